//! Operations on complex vectors.
//!
//! Values travel as `(re, im)` pairs. The cursor kernels walk
//! [`ComplexGet`]/[`ComplexSet`] cursors; the plane kernels index the real
//! and imaginary arrays directly. Path selection follows the same rule as
//! [`dispatch`](super::dispatch): raw planes only when every operand exposes
//! them with a compatible walk.
//!
//! Products are expanded inline, `(a + bi)(c + di) = (ac - bd) + (bc + ad)i`,
//! without going through [`Complex64`].

use num::complex::Complex64;
use tracing::trace;

use super::dispatch::check_dims;
use crate::error::Result;
use crate::vector::complex::{ComplexArrayVector, ComplexVector};
use crate::vector::dense::{ArrayVector, Vector};
use crate::vector::traits::{compatible_walks, ComplexGet, ComplexSet, VectorGet, VectorSet};

/// A complex value as `(re, im)`.
pub type Parts = (f64, f64);

#[inline(always)]
fn mul_parts((a, b): Parts, (c, d): Parts) -> Parts {
    (a * c - b * d, b * c + a * d)
}

#[inline(always)]
fn div_parts((a, b): Parts, (c, d): Parts) -> Parts {
    let den = c * c + d * d;
    ((a * c + b * d) / den, (b * c - a * d) / den)
}

#[inline(always)]
fn parts(z: Complex64) -> Parts {
    (z.re, z.im)
}

#[inline(always)]
fn complex((re, im): Parts) -> Complex64 {
    Complex64::new(re, im)
}

mod cursor_kernels {
    use super::Parts;
    use crate::error::Result;
    use crate::vector::cursor::{ComplexReadCursor, ComplexWriteCursor, ReadCursor, WriteCursor};
    use crate::vector::traits::{ComplexGet, ComplexSet, VectorGet, VectorSet};

    pub fn ebe_into<L, R, D, F>(lhs: &L, rhs: &R, dest: &mut D, mut f: F) -> Result<()>
    where
        L: ComplexGet + ?Sized,
        R: ComplexGet + ?Sized,
        D: ComplexSet + ?Sized,
        F: FnMut(Parts, Parts) -> Parts,
    {
        let mut li = lhs.cursor();
        let mut ri = rhs.cursor();
        let mut di = dest.set_cursor();
        while li.has_next() && ri.has_next() && di.has_next() {
            let (re, im) = f(li.next_parts()?, ri.next_parts()?);
            di.next_and_set_parts(re, im)?;
        }
        Ok(())
    }

    pub fn ebe_real_into<L, R, D, F>(lhs: &L, rhs: &R, dest: &mut D, mut f: F) -> Result<()>
    where
        L: ComplexGet + ?Sized,
        R: VectorGet<Elem = f64> + ?Sized,
        D: ComplexSet + ?Sized,
        F: FnMut(Parts, f64) -> Parts,
    {
        let mut li = lhs.cursor();
        let mut ri = rhs.cursor();
        let mut di = dest.set_cursor();
        while li.has_next() && ri.has_next() && di.has_next() {
            let (re, im) = f(li.next_parts()?, ri.next()?);
            di.next_and_set_parts(re, im)?;
        }
        Ok(())
    }

    pub fn ebe_in_place<L, R, F>(lhs: &mut L, rhs: &R, mut f: F) -> Result<()>
    where
        L: ComplexSet + ?Sized,
        R: ComplexGet + ?Sized,
        F: FnMut(Parts, Parts) -> Parts,
    {
        let mut ri = rhs.cursor();
        let mut li = lhs.set_cursor();
        while li.has_next() && ri.has_next() {
            let (re, im) = f(li.next_parts()?, ri.next_parts()?);
            li.set_parts(re, im)?;
        }
        Ok(())
    }

    pub fn ebe_real_in_place<L, R, F>(lhs: &mut L, rhs: &R, mut f: F) -> Result<()>
    where
        L: ComplexSet + ?Sized,
        R: VectorGet<Elem = f64> + ?Sized,
        F: FnMut(Parts, f64) -> Parts,
    {
        let mut ri = rhs.cursor();
        let mut li = lhs.set_cursor();
        while li.has_next() && ri.has_next() {
            let (re, im) = f(li.next_parts()?, ri.next()?);
            li.set_parts(re, im)?;
        }
        Ok(())
    }

    pub fn map_into<V, D, F>(src: &V, dest: &mut D, mut f: F) -> Result<()>
    where
        V: ComplexGet + ?Sized,
        D: ComplexSet + ?Sized,
        F: FnMut(Parts) -> Parts,
    {
        let mut si = src.cursor();
        let mut di = dest.set_cursor();
        while si.has_next() && di.has_next() {
            let (re, im) = f(si.next_parts()?);
            di.next_and_set_parts(re, im)?;
        }
        Ok(())
    }

    pub fn map_in_place<V, F>(v: &mut V, mut f: F) -> Result<()>
    where
        V: ComplexSet + ?Sized,
        F: FnMut(Parts) -> Parts,
    {
        let mut it = v.set_cursor();
        while it.has_next() {
            let (re, im) = f(it.next_parts()?);
            it.set_parts(re, im)?;
        }
        Ok(())
    }

    pub fn map_real_into<V, D, F>(src: &V, dest: &mut D, mut f: F) -> Result<()>
    where
        V: ComplexGet + ?Sized,
        D: VectorSet<Elem = f64> + ?Sized,
        F: FnMut(Parts) -> f64,
    {
        let mut si = src.cursor();
        let mut di = dest.set_cursor();
        while si.has_next() && di.has_next() {
            di.next_and_set(f(si.next_parts()?))?;
        }
        Ok(())
    }

    pub fn fill_with<D, G>(dest: &mut D, mut getter: G) -> Result<()>
    where
        D: ComplexSet + ?Sized,
        G: FnMut(usize) -> Parts,
    {
        let mut it = dest.set_cursor();
        let mut index = 0;
        while it.has_next() {
            let (re, im) = getter(index);
            it.next_and_set_parts(re, im)?;
            index += 1;
        }
        Ok(())
    }

    pub fn fold<V, A, F>(src: &V, init: A, mut f: F) -> Result<A>
    where
        V: ComplexGet + ?Sized,
        F: FnMut(A, Parts) -> A,
    {
        let mut it = src.cursor();
        let mut acc = init;
        while it.has_next() {
            acc = f(acc, it.next_parts()?);
        }
        Ok(acc)
    }

    pub fn fold_zip<L, R, A, F>(lhs: &L, rhs: &R, init: A, mut f: F) -> Result<A>
    where
        L: ComplexGet + ?Sized,
        R: ComplexGet + ?Sized,
        F: FnMut(A, Parts, Parts) -> A,
    {
        let mut li = lhs.cursor();
        let mut ri = rhs.cursor();
        let mut acc = init;
        while li.has_next() && ri.has_next() {
            acc = f(acc, li.next_parts()?, ri.next_parts()?);
        }
        Ok(acc)
    }

    pub fn fold_zip_real<L, R, A, F>(lhs: &L, rhs: &R, init: A, mut f: F) -> Result<A>
    where
        L: ComplexGet + ?Sized,
        R: VectorGet<Elem = f64> + ?Sized,
        F: FnMut(A, Parts, f64) -> A,
    {
        let mut li = lhs.cursor();
        let mut ri = rhs.cursor();
        let mut acc = init;
        while li.has_next() && ri.has_next() {
            acc = f(acc, li.next_parts()?, ri.next()?);
        }
        Ok(acc)
    }

    pub fn cum_into<V, D, A, F, E>(src: &V, dest: &mut D, init: A, mut step: F, mut emit: E) -> Result<()>
    where
        V: ComplexGet + ?Sized,
        D: ComplexSet + ?Sized,
        F: FnMut(A, Parts) -> A,
        E: FnMut(&A) -> Parts,
    {
        let mut si = src.cursor();
        let mut di = dest.set_cursor();
        let mut acc = init;
        while si.has_next() && di.has_next() {
            acc = step(acc, si.next_parts()?);
            let (re, im) = emit(&acc);
            di.next_and_set_parts(re, im)?;
        }
        Ok(())
    }

    pub fn reverse_into<V, D>(src: &V, dest: &mut D) -> Result<()>
    where
        V: ComplexGet + ?Sized,
        D: ComplexSet + ?Sized,
    {
        let mut index = src.size();
        let mut di = dest.set_cursor();
        while index > 0 && di.has_next() {
            index -= 1;
            let (re, im) = src.get_parts(index)?;
            di.next_and_set_parts(re, im)?;
        }
        Ok(())
    }
}

mod plane_kernels {
    //! Every operand passed together here walks compatibly, so physical
    //! offset `k` from each shift is the same logical element.

    use super::Parts;
    use crate::vector::traits::{ComplexStrided, ComplexStridedMut, Strided, StridedMut};

    /// Physical slot of the `k`-th logical element.
    #[inline(always)]
    fn slot(shift: usize, len: usize, reverse: bool, k: usize) -> usize {
        if reverse {
            shift + len - 1 - k
        } else {
            shift + k
        }
    }

    pub fn ebe_into<F>(l: ComplexStrided<'_>, r: ComplexStrided<'_>, d: ComplexStridedMut<'_>, len: usize, mut f: F)
    where
        F: FnMut(Parts, Parts) -> Parts,
    {
        if l.shift == d.shift && r.shift == d.shift {
            for i in d.shift..d.shift + len {
                let (re, im) = f((l.real[i], l.imag[i]), (r.real[i], r.imag[i]));
                d.real[i] = re;
                d.imag[i] = im;
            }
        } else {
            for k in 0..len {
                let (li, ri, di) = (l.shift + k, r.shift + k, d.shift + k);
                let (re, im) = f((l.real[li], l.imag[li]), (r.real[ri], r.imag[ri]));
                d.real[di] = re;
                d.imag[di] = im;
            }
        }
    }

    pub fn ebe_real_into<F>(l: ComplexStrided<'_>, r: Strided<'_, f64>, d: ComplexStridedMut<'_>, len: usize, mut f: F)
    where
        F: FnMut(Parts, f64) -> Parts,
    {
        for k in 0..len {
            let (li, di) = (l.shift + k, d.shift + k);
            let (re, im) = f((l.real[li], l.imag[li]), r.data[r.shift + k]);
            d.real[di] = re;
            d.imag[di] = im;
        }
    }

    pub fn ebe_in_place<F>(l: ComplexStridedMut<'_>, r: ComplexStrided<'_>, len: usize, mut f: F)
    where
        F: FnMut(Parts, Parts) -> Parts,
    {
        for k in 0..len {
            let (li, ri) = (l.shift + k, r.shift + k);
            let (re, im) = f((l.real[li], l.imag[li]), (r.real[ri], r.imag[ri]));
            l.real[li] = re;
            l.imag[li] = im;
        }
    }

    pub fn ebe_real_in_place<F>(l: ComplexStridedMut<'_>, r: Strided<'_, f64>, len: usize, mut f: F)
    where
        F: FnMut(Parts, f64) -> Parts,
    {
        for k in 0..len {
            let li = l.shift + k;
            let (re, im) = f((l.real[li], l.imag[li]), r.data[r.shift + k]);
            l.real[li] = re;
            l.imag[li] = im;
        }
    }

    pub fn map_into<F>(s: ComplexStrided<'_>, d: ComplexStridedMut<'_>, len: usize, mut f: F)
    where
        F: FnMut(Parts) -> Parts,
    {
        for k in 0..len {
            let (si, di) = (s.shift + k, d.shift + k);
            let (re, im) = f((s.real[si], s.imag[si]));
            d.real[di] = re;
            d.imag[di] = im;
        }
    }

    pub fn map_in_place<F>(v: ComplexStridedMut<'_>, mut f: F)
    where
        F: FnMut(Parts) -> Parts,
    {
        for i in v.shift..v.shift + v.size {
            let (re, im) = f((v.real[i], v.imag[i]));
            v.real[i] = re;
            v.imag[i] = im;
        }
    }

    pub fn map_real_into<F>(s: ComplexStrided<'_>, d: StridedMut<'_, f64>, len: usize, mut f: F)
    where
        F: FnMut(Parts) -> f64,
    {
        for k in 0..len {
            let si = s.shift + k;
            d.data[d.shift + k] = f((s.real[si], s.imag[si]));
        }
    }

    pub fn fill_with<G>(d: ComplexStridedMut<'_>, mut getter: G)
    where
        G: FnMut(usize) -> Parts,
    {
        for k in 0..d.size {
            let i = slot(d.shift, d.size, d.reverse, k);
            let (re, im) = getter(k);
            d.real[i] = re;
            d.imag[i] = im;
        }
    }

    pub fn fold<A, F>(s: ComplexStrided<'_>, init: A, mut f: F) -> A
    where
        F: FnMut(A, Parts) -> A,
    {
        let mut acc = init;
        for k in 0..s.size {
            let i = slot(s.shift, s.size, s.reverse, k);
            acc = f(acc, (s.real[i], s.imag[i]));
        }
        acc
    }

    /// Folds pairs in logical order.
    pub fn fold_zip<A, F>(l: ComplexStrided<'_>, r: ComplexStrided<'_>, len: usize, init: A, mut f: F) -> A
    where
        F: FnMut(A, Parts, Parts) -> A,
    {
        let mut acc = init;
        for k in 0..len {
            let li = slot(l.shift, l.size, l.reverse, k);
            let ri = slot(r.shift, r.size, r.reverse, k);
            acc = f(acc, (l.real[li], l.imag[li]), (r.real[ri], r.imag[ri]));
        }
        acc
    }

    pub fn fold_zip_real<A, F>(l: ComplexStrided<'_>, r: Strided<'_, f64>, len: usize, init: A, mut f: F) -> A
    where
        F: FnMut(A, Parts, f64) -> A,
    {
        let mut acc = init;
        for k in 0..len {
            let li = slot(l.shift, l.size, l.reverse, k);
            let ri = slot(r.shift, r.size, r.reverse, k);
            acc = f(acc, (l.real[li], l.imag[li]), r.data[ri]);
        }
        acc
    }

    pub fn cum_into<A, F, E>(s: ComplexStrided<'_>, d: ComplexStridedMut<'_>, len: usize, init: A, mut step: F, mut emit: E)
    where
        F: FnMut(A, Parts) -> A,
        E: FnMut(&A) -> Parts,
    {
        let mut acc = init;
        for k in 0..len {
            let si = slot(s.shift, len, s.reverse, k);
            let di = slot(d.shift, len, d.reverse, k);
            acc = step(acc, (s.real[si], s.imag[si]));
            let (re, im) = emit(&acc);
            d.real[di] = re;
            d.imag[di] = im;
        }
    }

    pub fn reverse_into(s: ComplexStrided<'_>, d: ComplexStridedMut<'_>) {
        let len = s.size;
        for k in 0..len {
            let (si, di) = (s.shift + len - 1 - k, d.shift + k);
            d.real[di] = s.real[si];
            d.imag[di] = s.imag[si];
        }
    }

    pub fn reverse_in_place(v: ComplexStridedMut<'_>) {
        let end = v.shift + v.size;
        v.real[v.shift..end].reverse();
        v.imag[v.shift..end].reverse();
    }
}

fn zeros_like<V: ComplexGet + ?Sized>(src: &V) -> ComplexVector {
    let reverse = src.same_order().is_some_and(|s| s.reverse);
    ComplexVector::zeros_directed(src.size(), reverse)
}

fn real_zeros_like<V: ComplexGet + ?Sized>(src: &V) -> Vector {
    let reverse = src.same_order().is_some_and(|s| s.reverse);
    ArrayVector::zeros_directed(src.size(), reverse)
}

pub fn ebe_into<L, R, D, F>(op: &'static str, lhs: &L, rhs: &R, dest: &mut D, f: F) -> Result<()>
where
    L: ComplexGet + ?Sized,
    R: ComplexGet + ?Sized,
    D: ComplexSet + ?Sized,
    F: FnMut(Parts, Parts) -> Parts,
{
    check_dims(op, lhs.size(), rhs.size())?;
    check_dims(op, lhs.size(), dest.size())?;
    if let (Some(l), Some(r)) = (lhs.same_order(), rhs.same_order()) {
        if l.compatible(&r) {
            if let Some(d) = dest.same_order_mut() {
                if d.compatible(&l) {
                    let len = l.size.min(r.size).min(d.size);
                    trace!(op, len, "fast path");
                    plane_kernels::ebe_into(l, r, d, len, f);
                    return Ok(());
                }
            }
        }
    }
    trace!(op, "generic path");
    cursor_kernels::ebe_into(lhs, rhs, dest, f)
}

pub fn ebe_real_into<L, R, D, F>(op: &'static str, lhs: &L, rhs: &R, dest: &mut D, f: F) -> Result<()>
where
    L: ComplexGet + ?Sized,
    R: VectorGet<Elem = f64> + ?Sized,
    D: ComplexSet + ?Sized,
    F: FnMut(Parts, f64) -> Parts,
{
    check_dims(op, lhs.size(), rhs.size())?;
    check_dims(op, lhs.size(), dest.size())?;
    if let (Some(l), Some(r)) = (lhs.same_order(), rhs.same_order()) {
        if l.compatible_real(&r) {
            if let Some(d) = dest.same_order_mut() {
                if d.compatible(&l) {
                    let len = l.size.min(r.size).min(d.size);
                    trace!(op, len, "fast path");
                    plane_kernels::ebe_real_into(l, r, d, len, f);
                    return Ok(());
                }
            }
        }
    }
    trace!(op, "generic path");
    cursor_kernels::ebe_real_into(lhs, rhs, dest, f)
}

pub fn ebe_in_place<L, R, F>(op: &'static str, lhs: &mut L, rhs: &R, f: F) -> Result<()>
where
    L: ComplexSet + ?Sized,
    R: ComplexGet + ?Sized,
    F: FnMut(Parts, Parts) -> Parts,
{
    check_dims(op, lhs.size(), rhs.size())?;
    if let Some(r) = rhs.same_order() {
        if let Some(l) = lhs.same_order_mut() {
            if l.compatible(&r) {
                let len = l.size.min(r.size);
                trace!(op, len, "fast path");
                plane_kernels::ebe_in_place(l, r, len, f);
                return Ok(());
            }
        }
    }
    trace!(op, "generic path");
    cursor_kernels::ebe_in_place(lhs, rhs, f)
}

pub fn ebe_real_in_place<L, R, F>(op: &'static str, lhs: &mut L, rhs: &R, f: F) -> Result<()>
where
    L: ComplexSet + ?Sized,
    R: VectorGet<Elem = f64> + ?Sized,
    F: FnMut(Parts, f64) -> Parts,
{
    check_dims(op, lhs.size(), rhs.size())?;
    if let Some(r) = rhs.same_order() {
        if let Some(l) = lhs.same_order_mut() {
            if l.compatible_real(&r) {
                let len = l.size.min(r.size);
                trace!(op, len, "fast path");
                plane_kernels::ebe_real_in_place(l, r, len, f);
                return Ok(());
            }
        }
    }
    trace!(op, "generic path");
    cursor_kernels::ebe_real_in_place(lhs, rhs, f)
}

pub fn map_into<V, D, F>(op: &'static str, src: &V, dest: &mut D, f: F) -> Result<()>
where
    V: ComplexGet + ?Sized,
    D: ComplexSet + ?Sized,
    F: FnMut(Parts) -> Parts,
{
    check_dims(op, src.size(), dest.size())?;
    if let Some(s) = src.same_order() {
        if let Some(d) = dest.same_order_mut() {
            if d.compatible(&s) {
                let len = s.size.min(d.size);
                trace!(op, len, "fast path");
                plane_kernels::map_into(s, d, len, f);
                return Ok(());
            }
        }
    }
    trace!(op, "generic path");
    cursor_kernels::map_into(src, dest, f)
}

pub fn map_in_place<V, F>(op: &'static str, v: &mut V, f: F) -> Result<()>
where
    V: ComplexSet + ?Sized,
    F: FnMut(Parts) -> Parts,
{
    if let Some(s) = v.same_order_mut() {
        trace!(op, len = s.size, "fast path");
        plane_kernels::map_in_place(s, f);
        return Ok(());
    }
    trace!(op, "generic path");
    cursor_kernels::map_in_place(v, f)
}

pub fn map_real_into<V, D, F>(op: &'static str, src: &V, dest: &mut D, f: F) -> Result<()>
where
    V: ComplexGet + ?Sized,
    D: VectorSet<Elem = f64> + ?Sized,
    F: FnMut(Parts) -> f64,
{
    check_dims(op, src.size(), dest.size())?;
    if let Some(s) = src.same_order() {
        if let Some(d) = dest.same_order_mut() {
            if compatible_walks(s.reverse, s.size, d.reverse, d.size) {
                let len = s.size.min(d.size);
                trace!(op, len, "fast path");
                plane_kernels::map_real_into(s, d, len, f);
                return Ok(());
            }
        }
    }
    trace!(op, "generic path");
    cursor_kernels::map_real_into(src, dest, f)
}

pub fn fill_with<D, G>(dest: &mut D, getter: G) -> Result<()>
where
    D: ComplexSet + ?Sized,
    G: FnMut(usize) -> Parts,
{
    if let Some(d) = dest.same_order_mut() {
        trace!(op = "fill", "fast path");
        plane_kernels::fill_with(d, getter);
        return Ok(());
    }
    trace!(op = "fill", "generic path");
    cursor_kernels::fill_with(dest, getter)
}

/// Folds in logical order.
pub fn fold<V, A, F>(src: &V, init: A, f: F) -> Result<A>
where
    V: ComplexGet + ?Sized,
    F: FnMut(A, Parts) -> A,
{
    if let Some(s) = src.same_order() {
        trace!(op = "fold", "fast path");
        return Ok(plane_kernels::fold(s, init, f));
    }
    trace!(op = "fold", "generic path");
    cursor_kernels::fold(src, init, f)
}

/// Folds `(lhs[i], rhs[i])` pairs in logical order over the common length.
pub fn fold_zip<L, R, A, F>(op: &'static str, lhs: &L, rhs: &R, init: A, f: F) -> Result<A>
where
    L: ComplexGet + ?Sized,
    R: ComplexGet + ?Sized,
    F: FnMut(A, Parts, Parts) -> A,
{
    check_dims(op, lhs.size(), rhs.size())?;
    if let (Some(l), Some(r)) = (lhs.same_order(), rhs.same_order()) {
        if l.compatible(&r) {
            let len = l.size.min(r.size);
            trace!(op, len, "fast path");
            return Ok(plane_kernels::fold_zip(l, r, len, init, f));
        }
    }
    trace!(op, "generic path");
    cursor_kernels::fold_zip(lhs, rhs, init, f)
}

pub fn fold_zip_real<L, R, A, F>(op: &'static str, lhs: &L, rhs: &R, init: A, f: F) -> Result<A>
where
    L: ComplexGet + ?Sized,
    R: VectorGet<Elem = f64> + ?Sized,
    F: FnMut(A, Parts, f64) -> A,
{
    check_dims(op, lhs.size(), rhs.size())?;
    if let (Some(l), Some(r)) = (lhs.same_order(), rhs.same_order()) {
        if l.compatible_real(&r) {
            let len = l.size.min(r.size);
            trace!(op, len, "fast path");
            return Ok(plane_kernels::fold_zip_real(l, r, len, init, f));
        }
    }
    trace!(op, "generic path");
    cursor_kernels::fold_zip_real(lhs, rhs, init, f)
}

pub fn cum_into<V, D, A, F, E>(op: &'static str, src: &V, dest: &mut D, init: A, step: F, emit: E) -> Result<()>
where
    V: ComplexGet + ?Sized,
    D: ComplexSet + ?Sized,
    F: FnMut(A, Parts) -> A,
    E: FnMut(&A) -> Parts,
{
    check_dims(op, src.size(), dest.size())?;
    if let Some(s) = src.same_order() {
        if let Some(d) = dest.same_order_mut() {
            // scans address both walks by logical index, so sizes must agree
            if d.compatible(&s) && d.size == s.size {
                trace!(op, len = s.size, "fast path");
                let len = s.size;
                plane_kernels::cum_into(s, d, len, init, step, emit);
                return Ok(());
            }
        }
    }
    trace!(op, "generic path");
    cursor_kernels::cum_into(src, dest, init, step, emit)
}

pub fn reverse_into<V, D>(src: &V, dest: &mut D) -> Result<()>
where
    V: ComplexGet + ?Sized,
    D: ComplexSet + ?Sized,
{
    check_dims("reverse", src.size(), dest.size())?;
    if let Some(s) = src.same_order() {
        if let Some(d) = dest.same_order_mut() {
            if d.compatible(&s) && d.size == s.size {
                trace!(op = "reverse", "fast path");
                plane_kernels::reverse_into(s, d);
                return Ok(());
            }
        }
    }
    trace!(op = "reverse", "generic path");
    cursor_kernels::reverse_into(src, dest)
}

macro_rules! complex_ops {
    ($(
        $name:ident, $into:ident, $in_place:ident, $scalar:ident, $scalar_in_place:ident
            => |($a:ident, $b:ident), ($c:ident, $d:ident)| $body:expr;
    )*) => {
        impl<S: AsRef<[f64]>> ComplexArrayVector<S> {
            $(
                pub fn $name<R: ComplexGet + ?Sized>(&self, rhs: &R) -> Result<ComplexVector> {
                    let mut out = zeros_like(self);
                    ebe_into(stringify!($name), self, rhs, &mut out, |($a, $b): Parts, ($c, $d): Parts| $body)?;
                    Ok(out)
                }

                pub fn $into<R, D>(&self, rhs: &R, dest: &mut D) -> Result<()>
                where
                    R: ComplexGet + ?Sized,
                    D: ComplexSet + ?Sized,
                {
                    ebe_into(stringify!($name), self, rhs, dest, |($a, $b): Parts, ($c, $d): Parts| $body)
                }

                pub fn $scalar(&self, rhs: Complex64) -> Result<ComplexVector> {
                    let mut out = zeros_like(self);
                    map_into(stringify!($scalar), self, &mut out, |($a, $b): Parts| {
                        let ($c, $d) = parts(rhs);
                        $body
                    })?;
                    Ok(out)
                }
            )*
        }

        impl<S: AsRef<[f64]> + AsMut<[f64]>> ComplexArrayVector<S> {
            $(
                pub fn $in_place<R: ComplexGet + ?Sized>(&mut self, rhs: &R) -> Result<()> {
                    ebe_in_place(stringify!($in_place), self, rhs, |($a, $b): Parts, ($c, $d): Parts| $body)
                }

                pub fn $scalar_in_place(&mut self, rhs: Complex64) -> Result<()> {
                    map_in_place(stringify!($scalar_in_place), self, |($a, $b): Parts| {
                        let ($c, $d) = parts(rhs);
                        $body
                    })
                }
            )*
        }
    };
}

macro_rules! complex_real_ops {
    ($(
        $name:ident, $into:ident, $in_place:ident, $scalar:ident, $scalar_in_place:ident
            => |($a:ident, $b:ident), $x:ident| $body:expr;
    )*) => {
        impl<S: AsRef<[f64]>> ComplexArrayVector<S> {
            $(
                pub fn $name<R: VectorGet<Elem = f64> + ?Sized>(&self, rhs: &R) -> Result<ComplexVector> {
                    let mut out = zeros_like(self);
                    ebe_real_into(stringify!($name), self, rhs, &mut out, |($a, $b): Parts, $x: f64| $body)?;
                    Ok(out)
                }

                pub fn $into<R, D>(&self, rhs: &R, dest: &mut D) -> Result<()>
                where
                    R: VectorGet<Elem = f64> + ?Sized,
                    D: ComplexSet + ?Sized,
                {
                    ebe_real_into(stringify!($name), self, rhs, dest, |($a, $b): Parts, $x: f64| $body)
                }

                pub fn $scalar(&self, rhs: f64) -> Result<ComplexVector> {
                    let mut out = zeros_like(self);
                    map_into(stringify!($scalar), self, &mut out, |($a, $b): Parts| {
                        let $x = rhs;
                        $body
                    })?;
                    Ok(out)
                }
            )*
        }

        impl<S: AsRef<[f64]> + AsMut<[f64]>> ComplexArrayVector<S> {
            $(
                pub fn $in_place<R: VectorGet<Elem = f64> + ?Sized>(&mut self, rhs: &R) -> Result<()> {
                    ebe_real_in_place(stringify!($in_place), self, rhs, |($a, $b): Parts, $x: f64| $body)
                }

                pub fn $scalar_in_place(&mut self, rhs: f64) -> Result<()> {
                    map_in_place(stringify!($scalar_in_place), self, |($a, $b): Parts| {
                        let $x = rhs;
                        $body
                    })
                }
            )*
        }
    };
}

complex_ops! {
    plus, plus_into, plus_in_place, plus_scalar, plus_scalar_in_place
        => |(a, b), (c, d)| (a + c, b + d);
    minus, minus_into, minus_in_place, minus_scalar, minus_scalar_in_place
        => |(a, b), (c, d)| (a - c, b - d);
    lminus, lminus_into, lminus_in_place, lminus_scalar, lminus_scalar_in_place
        => |(a, b), (c, d)| (c - a, d - b);
    multiply, multiply_into, multiply_in_place, multiply_scalar, multiply_scalar_in_place
        => |(a, b), (c, d)| mul_parts((a, b), (c, d));
    div, div_into, div_in_place, div_scalar, div_scalar_in_place
        => |(a, b), (c, d)| div_parts((a, b), (c, d));
    ldiv, ldiv_into, ldiv_in_place, ldiv_scalar, ldiv_scalar_in_place
        => |(a, b), (c, d)| div_parts((c, d), (a, b));
}

complex_real_ops! {
    plus_real, plus_real_into, plus_real_in_place, plus_real_scalar, plus_real_scalar_in_place
        => |(a, b), x| (a + x, b);
    minus_real, minus_real_into, minus_real_in_place, minus_real_scalar, minus_real_scalar_in_place
        => |(a, b), x| (a - x, b);
    lminus_real, lminus_real_into, lminus_real_in_place, lminus_real_scalar, lminus_real_scalar_in_place
        => |(a, b), x| (x - a, -b);
    multiply_real, multiply_real_into, multiply_real_in_place, multiply_real_scalar, multiply_real_scalar_in_place
        => |(a, b), x| (a * x, b * x);
    div_real, div_real_into, div_real_in_place, div_real_scalar, div_real_scalar_in_place
        => |(a, b), x| (a / x, b / x);
    ldiv_real, ldiv_real_into, ldiv_real_in_place, ldiv_real_scalar, ldiv_real_scalar_in_place
        => |(a, b), x| div_parts((x, 0.0), (a, b));
}

impl<S: AsRef<[f64]>> ComplexArrayVector<S> {
    pub fn operate<R, F>(&self, rhs: &R, mut f: F) -> Result<ComplexVector>
    where
        R: ComplexGet + ?Sized,
        F: FnMut(Complex64, Complex64) -> Complex64,
    {
        let mut out = zeros_like(self);
        ebe_into("operate", self, rhs, &mut out, |l, r| parts(f(complex(l), complex(r))))?;
        Ok(out)
    }

    pub fn map<F: FnMut(Complex64) -> Complex64>(&self, mut f: F) -> Result<ComplexVector> {
        let mut out = zeros_like(self);
        map_into("map", self, &mut out, |z| parts(f(complex(z))))?;
        Ok(out)
    }

    pub fn negative(&self) -> Result<ComplexVector> {
        let mut out = zeros_like(self);
        map_into("negative", self, &mut out, |(a, b)| (-a, -b))?;
        Ok(out)
    }

    pub fn conj(&self) -> Result<ComplexVector> {
        let mut out = zeros_like(self);
        map_into("conj", self, &mut out, |(a, b)| (a, -b))?;
        Ok(out)
    }

    /// Moduli as a real vector.
    pub fn abs(&self) -> Result<Vector> {
        let mut out = real_zeros_like(self);
        map_real_into("abs", self, &mut out, |(a, b)| a.hypot(b))?;
        Ok(out)
    }

    pub fn for_each<G: FnMut(Complex64)>(&self, mut consumer: G) -> Result<()> {
        fold(self, (), |(), z| consumer(complex(z)))
    }

    pub fn sum(&self) -> Result<Complex64> {
        fold(self, (0.0, 0.0), |(sr, si), (a, b)| (sr + a, si + b)).map(complex)
    }

    pub fn mean(&self) -> Result<Complex64> {
        let n = self.size() as f64;
        let (re, im) = fold(self, (0.0, 0.0), |(sr, si), (a, b)| (sr + a, si + b))?;
        Ok(Complex64::new(re / n, im / n))
    }

    pub fn prod(&self) -> Result<Complex64> {
        fold(self, (1.0, 0.0), mul_parts).map(complex)
    }

    /// `sum(self[i] * conj(rhs[i]))`.
    pub fn dot<R: ComplexGet + ?Sized>(&self, rhs: &R) -> Result<Complex64> {
        fold_zip("dot", self, rhs, (0.0, 0.0), |(sr, si), (a, b), (c, d)| {
            let (re, im) = mul_parts((a, b), (c, -d));
            (sr + re, si + im)
        })
        .map(complex)
    }

    pub fn dot_real<R: VectorGet<Elem = f64> + ?Sized>(&self, rhs: &R) -> Result<Complex64> {
        fold_zip_real("dot_real", self, rhs, (0.0, 0.0), |(sr, si), (a, b), x| (sr + a * x, si + b * x)).map(complex)
    }

    /// Sum of squared moduli.
    pub fn dot_self(&self) -> Result<f64> {
        fold(self, 0.0, |acc, (a, b)| acc + (a * a + b * b))
    }

    pub fn norm(&self) -> Result<f64> {
        Ok(self.dot_self()?.sqrt())
    }

    pub fn cumsum(&self) -> Result<ComplexVector> {
        let mut out = zeros_like(self);
        cum_into("cumsum", self, &mut out, (0.0, 0.0), |(sr, si), (a, b)| (sr + a, si + b), |&acc| acc)?;
        Ok(out)
    }

    pub fn cummean(&self) -> Result<ComplexVector> {
        let mut out = zeros_like(self);
        cum_into(
            "cummean",
            self,
            &mut out,
            (0.0, 0.0, 0.0),
            |(sr, si, n), (a, b)| (sr + a, si + b, n + 1.0),
            |&(sr, si, n)| (sr / n, si / n),
        )?;
        Ok(out)
    }

    pub fn cumprod(&self) -> Result<ComplexVector> {
        let mut out = zeros_like(self);
        cum_into("cumprod", self, &mut out, (1.0, 0.0), mul_parts, |&acc| acc)?;
        Ok(out)
    }

    pub fn reverse(&self) -> Result<ComplexVector> {
        let mut out = zeros_like(self);
        reverse_into(self, &mut out)?;
        Ok(out)
    }

    pub fn reverse_into<D: ComplexSet + ?Sized>(&self, dest: &mut D) -> Result<()> {
        reverse_into(self, dest)
    }
}

impl<S: AsRef<[f64]> + AsMut<[f64]>> ComplexArrayVector<S> {
    pub fn operate_in_place<R, F>(&mut self, rhs: &R, mut f: F) -> Result<()>
    where
        R: ComplexGet + ?Sized,
        F: FnMut(Complex64, Complex64) -> Complex64,
    {
        ebe_in_place("operate_in_place", self, rhs, |l, r| parts(f(complex(l), complex(r))))
    }

    pub fn map_in_place<F: FnMut(Complex64) -> Complex64>(&mut self, mut f: F) -> Result<()> {
        map_in_place("map_in_place", self, |z| parts(f(complex(z))))
    }

    pub fn negative_in_place(&mut self) -> Result<()> {
        map_in_place("negative_in_place", self, |(a, b)| (-a, -b))
    }

    pub fn conj_in_place(&mut self) -> Result<()> {
        map_in_place("conj_in_place", self, |(a, b)| (a, -b))
    }

    pub fn fill(&mut self, value: Complex64) -> Result<()> {
        fill_with(self, |_| parts(value))
    }

    pub fn fill_from<V: ComplexGet + ?Sized>(&mut self, src: &V) -> Result<()> {
        check_dims("fill", self.size(), src.size())?;
        // the in-place kernel with a discarding operator is a plain copy
        ebe_in_place("fill", self, src, |_, r| r)
    }

    /// Copies a real vector in, zeroing the imaginary plane.
    pub fn fill_from_real<V: VectorGet<Elem = f64> + ?Sized>(&mut self, src: &V) -> Result<()> {
        ebe_real_in_place("fill", self, src, |_, x| (x, 0.0))
    }

    /// `self[i] = getter(i)`.
    pub fn fill_with<G: FnMut(usize) -> Complex64>(&mut self, mut getter: G) -> Result<()> {
        fill_with(self, |i| parts(getter(i)))
    }

    pub fn assign<G: FnMut() -> Complex64>(&mut self, mut supplier: G) -> Result<()> {
        fill_with(self, |_| parts(supplier()))
    }

    pub fn reverse_in_place(&mut self) -> Result<()> {
        if let Some(v) = self.same_order_mut() {
            trace!(op = "reverse_in_place", "fast path");
            plane_kernels::reverse_in_place(v);
            return Ok(());
        }
        let size = self.size();
        for i in 0..size / 2 {
            self.swap(i, size - 1 - i)?;
        }
        Ok(())
    }
}
