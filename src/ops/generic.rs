//! Cursor-only kernels.
//!
//! Nothing here looks at storage: every kernel walks its operands through
//! [`ReadCursor`]/[`WriteCursor`], so it is correct for any [`VectorGet`] or
//! [`VectorSet`] implementation, including index views and user types.
//! Binary kernels stop at the shortest operand.

use crate::error::Result;
use crate::vector::cursor::{ReadCursor, WriteCursor};
use crate::vector::traits::{VectorGet, VectorSet};

/// `dest[i] = f(lhs[i], rhs[i])`.
pub fn ebe_do_into<L, R, D, F>(lhs: &L, rhs: &R, dest: &mut D, mut f: F) -> Result<()>
where
    L: VectorGet + ?Sized,
    R: VectorGet + ?Sized,
    D: VectorSet + ?Sized,
    F: FnMut(L::Elem, R::Elem) -> D::Elem,
{
    let mut li = lhs.cursor();
    let mut ri = rhs.cursor();
    let mut di = dest.set_cursor();
    while li.has_next() && ri.has_next() && di.has_next() {
        di.next_and_set(f(li.next()?, ri.next()?))?;
    }
    Ok(())
}

/// `lhs[i] = f(lhs[i], rhs[i])`.
pub fn ebe_do_in_place<L, R, F>(lhs: &mut L, rhs: &R, mut f: F) -> Result<()>
where
    L: VectorSet + ?Sized,
    R: VectorGet + ?Sized,
    F: FnMut(L::Elem, R::Elem) -> L::Elem,
{
    let mut ri = rhs.cursor();
    let mut li = lhs.set_cursor();
    while li.has_next() && ri.has_next() {
        let value = li.next()?;
        li.set(f(value, ri.next()?))?;
    }
    Ok(())
}

/// `dest[i] = f(src[i])`.
pub fn map_do_into<V, D, F>(src: &V, dest: &mut D, mut f: F) -> Result<()>
where
    V: VectorGet + ?Sized,
    D: VectorSet + ?Sized,
    F: FnMut(V::Elem) -> D::Elem,
{
    let mut si = src.cursor();
    let mut di = dest.set_cursor();
    while si.has_next() && di.has_next() {
        di.next_and_set(f(si.next()?))?;
    }
    Ok(())
}

/// `v[i] = f(v[i])`.
pub fn map_do_in_place<V, F>(v: &mut V, mut f: F) -> Result<()>
where
    V: VectorSet + ?Sized,
    F: FnMut(V::Elem) -> V::Elem,
{
    let mut it = v.set_cursor();
    while it.has_next() {
        let value = it.next()?;
        it.set(f(value))?;
    }
    Ok(())
}

pub fn fill_value<D: VectorSet + ?Sized>(dest: &mut D, value: D::Elem) -> Result<()> {
    let mut it = dest.set_cursor();
    while it.has_next() {
        it.next_and_set(value)?;
    }
    Ok(())
}

pub fn fill_from<D, V>(dest: &mut D, src: &V) -> Result<()>
where
    D: VectorSet + ?Sized,
    V: VectorGet<Elem = D::Elem> + ?Sized,
{
    map_do_into(src, dest, |v| v)
}

/// `dest[i] = getter(i)`.
pub fn fill_with<D, G>(dest: &mut D, mut getter: G) -> Result<()>
where
    D: VectorSet + ?Sized,
    G: FnMut(usize) -> D::Elem,
{
    let mut it = dest.set_cursor();
    let mut index = 0;
    while it.has_next() {
        it.next_and_set(getter(index))?;
        index += 1;
    }
    Ok(())
}

/// Calls `supplier` once per element, in logical order.
pub fn assign<D, G>(dest: &mut D, mut supplier: G) -> Result<()>
where
    D: VectorSet + ?Sized,
    G: FnMut() -> D::Elem,
{
    let mut it = dest.set_cursor();
    while it.has_next() {
        it.next_and_set(supplier())?;
    }
    Ok(())
}

pub fn for_each<V, G>(src: &V, mut consumer: G) -> Result<()>
where
    V: VectorGet + ?Sized,
    G: FnMut(V::Elem),
{
    let mut it = src.cursor();
    while it.has_next() {
        consumer(it.next()?);
    }
    Ok(())
}

pub fn fold<V, A, F>(src: &V, init: A, mut f: F) -> Result<A>
where
    V: VectorGet + ?Sized,
    F: FnMut(A, V::Elem) -> A,
{
    let mut it = src.cursor();
    let mut acc = init;
    while it.has_next() {
        acc = f(acc, it.next()?);
    }
    Ok(acc)
}

/// Whether any element satisfies `pred`. Stops at the first hit.
pub fn any<V, P>(src: &V, mut pred: P) -> Result<bool>
where
    V: VectorGet + ?Sized,
    P: FnMut(V::Elem) -> bool,
{
    let mut it = src.cursor();
    while it.has_next() {
        if pred(it.next()?) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Running fold: `dest[i] = emit(state after src[0..=i])`.
pub fn cum_fold_into<V, D, A, F, E>(src: &V, dest: &mut D, init: A, mut step: F, mut emit: E) -> Result<()>
where
    V: VectorGet + ?Sized,
    D: VectorSet + ?Sized,
    F: FnMut(A, V::Elem) -> A,
    E: FnMut(&A) -> D::Elem,
{
    let mut si = src.cursor();
    let mut di = dest.set_cursor();
    let mut acc = init;
    while si.has_next() && di.has_next() {
        acc = step(acc, si.next()?);
        di.next_and_set(emit(&acc))?;
    }
    Ok(())
}

pub fn sum<V: VectorGet<Elem = f64> + ?Sized>(src: &V) -> Result<f64> {
    fold(src, 0.0, |acc, v| acc + v)
}

pub fn prod<V: VectorGet<Elem = f64> + ?Sized>(src: &V) -> Result<f64> {
    fold(src, 1.0, |acc, v| acc * v)
}

/// NaN for an empty vector. A NaN accumulator is replaced by the next value.
pub fn max<V: VectorGet<Elem = f64> + ?Sized>(src: &V) -> Result<f64> {
    fold(src, f64::NAN, nan_max)
}

/// NaN for an empty vector. A NaN accumulator is replaced by the next value.
pub fn min<V: VectorGet<Elem = f64> + ?Sized>(src: &V) -> Result<f64> {
    fold(src, f64::NAN, nan_min)
}

#[inline]
pub(crate) fn nan_max(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v > acc {
        v
    } else {
        acc
    }
}

#[inline]
pub(crate) fn nan_min(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v < acc {
        v
    } else {
        acc
    }
}

/// `dest[i] = src[size - 1 - i]`.
pub fn reverse_into<V, D>(src: &V, dest: &mut D) -> Result<()>
where
    V: VectorGet + ?Sized,
    D: VectorSet<Elem = V::Elem> + ?Sized,
{
    let size = src.size();
    let mut index = size;
    let mut di = dest.set_cursor();
    while index > 0 && di.has_next() {
        index -= 1;
        di.next_and_set(src.get(index)?)?;
    }
    Ok(())
}

pub fn reverse_in_place<V: VectorSet + ?Sized>(v: &mut V) -> Result<()> {
    let size = v.size();
    for i in 0..size / 2 {
        v.swap(i, size - 1 - i)?;
    }
    Ok(())
}

/// `dest[i] = pred(lhs[i], rhs[i])`.
pub fn compare_into<L, R, D, P>(lhs: &L, rhs: &R, dest: &mut D, pred: P) -> Result<()>
where
    L: VectorGet + ?Sized,
    R: VectorGet + ?Sized,
    D: VectorSet<Elem = bool> + ?Sized,
    P: FnMut(L::Elem, R::Elem) -> bool,
{
    ebe_do_into(lhs, rhs, dest, pred)
}

pub fn dot<L, R>(lhs: &L, rhs: &R) -> Result<f64>
where
    L: VectorGet<Elem = f64> + ?Sized,
    R: VectorGet<Elem = f64> + ?Sized,
{
    let mut li = lhs.cursor();
    let mut ri = rhs.cursor();
    let mut acc = 0.0;
    while li.has_next() && ri.has_next() {
        acc += li.next()? * ri.next()?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ebe_stops_at_shortest() {
        let mut dest = vec![0.0; 4];
        ebe_do_into(&vec![1.0, 2.0, 3.0], &vec![10.0, 20.0], &mut dest, |a, b| a + b).unwrap();
        assert_eq!(dest, vec![11.0, 22.0, 0.0, 0.0]);
    }

    #[test]
    fn test_nan_seeded_extrema() {
        assert!(max(&Vec::<f64>::new()).unwrap().is_nan());
        assert_eq!(max(&vec![1.0, 5.0, -2.0]).unwrap(), 5.0);
        assert_eq!(min(&vec![1.0, 5.0, -2.0]).unwrap(), -2.0);
        // only a NaN accumulator is replaced, a NaN element is skipped
        assert_eq!(max(&vec![9.0, f64::NAN, 1.0]).unwrap(), 9.0);
        assert_eq!(min(&vec![f64::NAN, 3.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_cum_fold_mean() {
        let mut dest = vec![0.0; 3];
        cum_fold_into(
            &vec![2.0, 4.0, 9.0],
            &mut dest,
            (0.0, 0.0),
            |(s, n), v| (s + v, n + 1.0),
            |&(s, n)| s / n,
        )
        .unwrap();
        assert_eq!(dest, vec![2.0, 3.0, 5.0]);
    }

    #[test]
    fn test_reverse() {
        let mut dest = vec![0; 3];
        reverse_into(&vec![1, 2, 3], &mut dest).unwrap();
        assert_eq!(dest, vec![3, 2, 1]);
        let mut v = vec![1, 2, 3, 4];
        reverse_in_place(&mut v).unwrap();
        assert_eq!(v, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_fill_with_index() {
        let mut v = vec![0usize as i64; 4];
        fill_with(&mut v, |i| (i * i) as i64).unwrap();
        assert_eq!(v, vec![0, 1, 4, 9]);
    }
}
