//! Kernels over raw backing arrays.
//!
//! Operands arrive as `(data, shift)` pairs plus a common length. The
//! dispatcher only calls in here when every operand walks in the same
//! direction and, for reversed walks, has the same size, so physical slot
//! `shift + k` of every operand holds the same logical index. Elementwise
//! kernels can therefore ignore direction entirely. Order-sensitive kernels
//! (folds, scans, index fills) take a `reverse` flag and walk backwards.
//!
//! When all shifts coincide a single running index addresses every array,
//! otherwise each operand gets its own window.

/// `dest[d + k] = f(lhs[l + k], rhs[r + k])` for `k < len`.
#[allow(clippy::too_many_arguments)]
pub fn ebe_do_into<A, B, C, F>(
    lhs: &[A],
    l_shift: usize,
    rhs: &[B],
    r_shift: usize,
    dest: &mut [C],
    d_shift: usize,
    len: usize,
    mut f: F,
) where
    A: Copy,
    B: Copy,
    F: FnMut(A, B) -> C,
{
    if l_shift == d_shift && r_shift == d_shift {
        for i in d_shift..d_shift + len {
            dest[i] = f(lhs[i], rhs[i]);
        }
    } else {
        let lhs = &lhs[l_shift..l_shift + len];
        let rhs = &rhs[r_shift..r_shift + len];
        let dest = &mut dest[d_shift..d_shift + len];
        for ((d, &a), &b) in dest.iter_mut().zip(lhs).zip(rhs) {
            *d = f(a, b);
        }
    }
}

/// `lhs[l + k] = f(lhs[l + k], rhs[r + k])` for `k < len`.
pub fn ebe_do_in_place<A, B, F>(lhs: &mut [A], l_shift: usize, rhs: &[B], r_shift: usize, len: usize, mut f: F)
where
    A: Copy,
    B: Copy,
    F: FnMut(A, B) -> A,
{
    if l_shift == r_shift {
        for i in l_shift..l_shift + len {
            lhs[i] = f(lhs[i], rhs[i]);
        }
    } else {
        let lhs = &mut lhs[l_shift..l_shift + len];
        let rhs = &rhs[r_shift..r_shift + len];
        for (a, &b) in lhs.iter_mut().zip(rhs) {
            *a = f(*a, b);
        }
    }
}

pub fn map_do_into<A, C, F>(src: &[A], s_shift: usize, dest: &mut [C], d_shift: usize, len: usize, mut f: F)
where
    A: Copy,
    F: FnMut(A) -> C,
{
    let src = &src[s_shift..s_shift + len];
    let dest = &mut dest[d_shift..d_shift + len];
    for (d, &a) in dest.iter_mut().zip(src) {
        *d = f(a);
    }
}

pub fn map_do_in_place<A, F>(data: &mut [A], shift: usize, len: usize, mut f: F)
where
    A: Copy,
    F: FnMut(A) -> A,
{
    for a in &mut data[shift..shift + len] {
        *a = f(*a);
    }
}

pub fn fill_value<A: Copy>(data: &mut [A], shift: usize, len: usize, value: A) {
    data[shift..shift + len].fill(value);
}

pub fn fill_from<A: Copy>(dest: &mut [A], d_shift: usize, src: &[A], s_shift: usize, len: usize) {
    dest[d_shift..d_shift + len].copy_from_slice(&src[s_shift..s_shift + len]);
}

/// `logical[i] = getter(i)` over a window walked in `reverse` if set.
pub fn fill_with<A, G>(data: &mut [A], shift: usize, len: usize, reverse: bool, mut getter: G)
where
    G: FnMut(usize) -> A,
{
    let window = &mut data[shift..shift + len];
    if reverse {
        for (i, slot) in window.iter_mut().rev().enumerate() {
            *slot = getter(i);
        }
    } else {
        for (i, slot) in window.iter_mut().enumerate() {
            *slot = getter(i);
        }
    }
}

pub fn assign<A, G>(data: &mut [A], shift: usize, len: usize, reverse: bool, mut supplier: G)
where
    G: FnMut() -> A,
{
    let window = &mut data[shift..shift + len];
    if reverse {
        window.iter_mut().rev().for_each(|slot| *slot = supplier());
    } else {
        window.iter_mut().for_each(|slot| *slot = supplier());
    }
}

pub fn for_each<A: Copy, G: FnMut(A)>(data: &[A], shift: usize, len: usize, reverse: bool, consumer: G) {
    let window = &data[shift..shift + len];
    if reverse {
        window.iter().rev().copied().for_each(consumer);
    } else {
        window.iter().copied().for_each(consumer);
    }
}

pub fn fold<A: Copy, B, F>(data: &[A], shift: usize, len: usize, reverse: bool, init: B, f: F) -> B
where
    F: FnMut(B, A) -> B,
{
    let window = &data[shift..shift + len];
    if reverse {
        window.iter().rev().copied().fold(init, f)
    } else {
        window.iter().copied().fold(init, f)
    }
}

/// Order does not matter for a predicate scan.
pub fn any<A: Copy, P: FnMut(A) -> bool>(data: &[A], shift: usize, len: usize, mut pred: P) -> bool {
    data[shift..shift + len].iter().any(|&a| pred(a))
}

#[allow(clippy::too_many_arguments)]
pub fn cum_fold_into<A, C, S, F, E>(
    src: &[A],
    s_shift: usize,
    dest: &mut [C],
    d_shift: usize,
    len: usize,
    reverse: bool,
    init: S,
    mut step: F,
    mut emit: E,
) where
    A: Copy,
    F: FnMut(S, A) -> S,
    E: FnMut(&S) -> C,
{
    let src = &src[s_shift..s_shift + len];
    let dest = &mut dest[d_shift..d_shift + len];
    let mut acc = init;
    if reverse {
        for (d, &a) in dest.iter_mut().rev().zip(src.iter().rev()) {
            acc = step(acc, a);
            *d = emit(&acc);
        }
    } else {
        for (d, &a) in dest.iter_mut().zip(src) {
            acc = step(acc, a);
            *d = emit(&acc);
        }
    }
}

pub fn sum(data: &[f64], shift: usize, len: usize, reverse: bool) -> f64 {
    fold(data, shift, len, reverse, 0.0, |acc, v| acc + v)
}

pub fn prod(data: &[f64], shift: usize, len: usize, reverse: bool) -> f64 {
    fold(data, shift, len, reverse, 1.0, |acc, v| acc * v)
}

/// Accumulates in logical order so the rounding matches the cursor kernel.
pub fn dot(lhs: &[f64], l_shift: usize, rhs: &[f64], r_shift: usize, len: usize, reverse: bool) -> f64 {
    let pairs = lhs[l_shift..l_shift + len]
        .iter()
        .zip(&rhs[r_shift..r_shift + len]);
    if reverse {
        pairs.rev().fold(0.0, |acc, (a, b)| acc + a * b)
    } else {
        pairs.fold(0.0, |acc, (a, b)| acc + a * b)
    }
}

/// Copies a window into another in opposite order.
///
/// The two windows are equally long and walk in the same direction, so
/// logical reversal is a physical reversal of the copy.
pub fn reverse_into<A: Copy>(src: &[A], s_shift: usize, dest: &mut [A], d_shift: usize, len: usize) {
    let src = &src[s_shift..s_shift + len];
    let dest = &mut dest[d_shift..d_shift + len];
    for (d, &a) in dest.iter_mut().zip(src.iter().rev()) {
        *d = a;
    }
}

pub fn reverse_in_place<A>(data: &mut [A], shift: usize, len: usize) {
    data[shift..shift + len].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_and_independent_shifts_agree() {
        let lhs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let rhs = [10.0, 20.0, 30.0, 40.0, 50.0];

        let mut shared = [0.0; 5];
        ebe_do_into(&lhs, 1, &rhs, 1, &mut shared, 1, 3, |a, b| a + b);
        assert_eq!(shared, [0.0, 21.0, 32.0, 43.0, 0.0]);

        let mut independent = [0.0; 3];
        ebe_do_into(&lhs, 1, &rhs, 1, &mut independent, 0, 3, |a, b| a + b);
        assert_eq!(independent, [21.0, 32.0, 43.0]);
    }

    #[test]
    fn test_in_place_shifts() {
        let mut lhs = [1, 2, 3, 4];
        ebe_do_in_place(&mut lhs, 2, &[10, 20], 0, 2, |a, b| a * b);
        assert_eq!(lhs, [1, 2, 30, 80]);
    }

    #[test]
    fn test_reverse_walks() {
        let data = [1.0, 2.0, 3.0];
        let seen = fold(&data, 0, 3, true, Vec::new(), |mut acc, v| {
            acc.push(v);
            acc
        });
        assert_eq!(seen, vec![3.0, 2.0, 1.0]);

        let mut out = [0.0; 3];
        cum_fold_into(&data, 0, &mut out, 0, 3, true, 0.0, |s, v| s + v, |&s| s);
        // logical order is 3, 2, 1 so running sums land back to front
        assert_eq!(out, [6.0, 5.0, 3.0]);

        let mut filled = [0usize; 4];
        fill_with(&mut filled, 0, 4, true, |i| i);
        assert_eq!(filled, [3, 2, 1, 0]);
    }

    #[test]
    fn test_reverse_into() {
        let mut dest = [0; 4];
        reverse_into(&[9, 1, 2, 3], 1, &mut dest, 1, 3);
        assert_eq!(dest, [0, 3, 2, 1]);
    }
}
