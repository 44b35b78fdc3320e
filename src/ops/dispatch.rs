//! Path selection between the raw-array kernels and the cursor kernels.
//!
//! Every entry point asks its operands for [`same_order`] access. The fast
//! path runs only when every operand answers and all walks are mutually
//! compatible; anything else goes through the generic kernels, which are
//! correct for every implementation.
//!
//! Lengths are validated while [`config::operation_check`] is on. With the
//! check off, mismatched operands compute over the common prefix.
//!
//! [`same_order`]: crate::vector::traits::VectorGet::same_order

use tracing::trace;

use super::{fast, generic};
use crate::config;
use crate::error::{dimension_error, Result};
use crate::vector::dense::ArrayVector;
use crate::vector::element::Element;
use crate::vector::traits::{VectorGet, VectorSet};

/// Fails with `DimensionMismatch` when checking is on and sizes differ.
#[inline]
pub fn check_dims(op: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found && config::operation_check() {
        return Err(dimension_error(op, expected, found));
    }
    Ok(())
}

/// A zero-filled owning vector walking the same direction as `src`, so the
/// result of an operation stays fast-path compatible with its left operand.
pub fn zeros_like<V, T>(src: &V) -> ArrayVector<T>
where
    V: VectorGet + ?Sized,
    T: Element,
{
    let reverse = src.same_order().is_some_and(|s| s.reverse);
    ArrayVector::zeros_directed(src.size(), reverse)
}

pub fn ebe_into<L, R, D, F>(op: &'static str, lhs: &L, rhs: &R, dest: &mut D, f: F) -> Result<()>
where
    L: VectorGet + ?Sized,
    R: VectorGet + ?Sized,
    D: VectorSet + ?Sized,
    F: FnMut(L::Elem, R::Elem) -> D::Elem,
{
    check_dims(op, lhs.size(), rhs.size())?;
    check_dims(op, lhs.size(), dest.size())?;
    if let (Some(l), Some(r)) = (lhs.same_order(), rhs.same_order()) {
        if l.compatible(&r) {
            if let Some(d) = dest.same_order_mut() {
                if d.compatible(&l) {
                    let len = l.size.min(r.size).min(d.size);
                    trace!(op, len, "fast path");
                    fast::ebe_do_into(l.data, l.shift, r.data, r.shift, d.data, d.shift, len, f);
                    return Ok(());
                }
            }
        }
    }
    trace!(op, "generic path");
    generic::ebe_do_into(lhs, rhs, dest, f)
}

pub fn ebe_in_place<L, R, F>(op: &'static str, lhs: &mut L, rhs: &R, f: F) -> Result<()>
where
    L: VectorSet + ?Sized,
    R: VectorGet + ?Sized,
    F: FnMut(L::Elem, R::Elem) -> L::Elem,
{
    check_dims(op, lhs.size(), rhs.size())?;
    if let Some(r) = rhs.same_order() {
        if let Some(l) = lhs.same_order_mut() {
            if l.compatible(&r) {
                let len = l.size.min(r.size);
                trace!(op, len, "fast path");
                fast::ebe_do_in_place(l.data, l.shift, r.data, r.shift, len, f);
                return Ok(());
            }
        }
    }
    trace!(op, "generic path");
    generic::ebe_do_in_place(lhs, rhs, f)
}

pub fn map_into<V, D, F>(op: &'static str, src: &V, dest: &mut D, f: F) -> Result<()>
where
    V: VectorGet + ?Sized,
    D: VectorSet + ?Sized,
    F: FnMut(V::Elem) -> D::Elem,
{
    check_dims(op, src.size(), dest.size())?;
    if let Some(s) = src.same_order() {
        if let Some(d) = dest.same_order_mut() {
            if d.compatible(&s) {
                let len = s.size.min(d.size);
                trace!(op, len, "fast path");
                fast::map_do_into(s.data, s.shift, d.data, d.shift, len, f);
                return Ok(());
            }
        }
    }
    trace!(op, "generic path");
    generic::map_do_into(src, dest, f)
}

pub fn map_in_place<V, F>(op: &'static str, v: &mut V, f: F) -> Result<()>
where
    V: VectorSet + ?Sized,
    F: FnMut(V::Elem) -> V::Elem,
{
    if let Some(s) = v.same_order_mut() {
        trace!(op, len = s.size, "fast path");
        fast::map_do_in_place(s.data, s.shift, s.size, f);
        return Ok(());
    }
    trace!(op, "generic path");
    generic::map_do_in_place(v, f)
}

pub fn fill_value<D: VectorSet + ?Sized>(dest: &mut D, value: D::Elem) -> Result<()> {
    if let Some(d) = dest.same_order_mut() {
        trace!(op = "fill", "fast path");
        fast::fill_value(d.data, d.shift, d.size, value);
        return Ok(());
    }
    trace!(op = "fill", "generic path");
    generic::fill_value(dest, value)
}

pub fn fill_from<D, V>(dest: &mut D, src: &V) -> Result<()>
where
    D: VectorSet + ?Sized,
    V: VectorGet<Elem = D::Elem> + ?Sized,
{
    check_dims("fill", dest.size(), src.size())?;
    if let Some(s) = src.same_order() {
        if let Some(d) = dest.same_order_mut() {
            if d.compatible(&s) {
                let len = s.size.min(d.size);
                trace!(op = "fill", len, "fast path");
                fast::fill_from(d.data, d.shift, s.data, s.shift, len);
                return Ok(());
            }
        }
    }
    trace!(op = "fill", "generic path");
    generic::fill_from(dest, src)
}

pub fn fill_with<D, G>(dest: &mut D, getter: G) -> Result<()>
where
    D: VectorSet + ?Sized,
    G: FnMut(usize) -> D::Elem,
{
    if let Some(d) = dest.same_order_mut() {
        trace!(op = "fill_with", "fast path");
        fast::fill_with(d.data, d.shift, d.size, d.reverse, getter);
        return Ok(());
    }
    trace!(op = "fill_with", "generic path");
    generic::fill_with(dest, getter)
}

pub fn assign<D, G>(dest: &mut D, supplier: G) -> Result<()>
where
    D: VectorSet + ?Sized,
    G: FnMut() -> D::Elem,
{
    if let Some(d) = dest.same_order_mut() {
        trace!(op = "assign", "fast path");
        fast::assign(d.data, d.shift, d.size, d.reverse, supplier);
        return Ok(());
    }
    trace!(op = "assign", "generic path");
    generic::assign(dest, supplier)
}

pub fn for_each<V, G>(src: &V, consumer: G) -> Result<()>
where
    V: VectorGet + ?Sized,
    G: FnMut(V::Elem),
{
    if let Some(s) = src.same_order() {
        trace!(op = "for_each", "fast path");
        fast::for_each(s.data, s.shift, s.size, s.reverse, consumer);
        return Ok(());
    }
    trace!(op = "for_each", "generic path");
    generic::for_each(src, consumer)
}

/// Folds in logical order.
pub fn fold<V, A, F>(src: &V, init: A, f: F) -> Result<A>
where
    V: VectorGet + ?Sized,
    F: FnMut(A, V::Elem) -> A,
{
    if let Some(s) = src.same_order() {
        trace!(op = "fold", "fast path");
        return Ok(fast::fold(s.data, s.shift, s.size, s.reverse, init, f));
    }
    trace!(op = "fold", "generic path");
    generic::fold(src, init, f)
}

pub fn any<V, P>(src: &V, pred: P) -> Result<bool>
where
    V: VectorGet + ?Sized,
    P: FnMut(V::Elem) -> bool,
{
    if let Some(s) = src.same_order() {
        trace!(op = "any", "fast path");
        return Ok(fast::any(s.data, s.shift, s.size, pred));
    }
    trace!(op = "any", "generic path");
    generic::any(src, pred)
}

/// Running fold into `dest`, see [`generic::cum_fold_into`].
pub fn cum_into<V, D, A, F, E>(op: &'static str, src: &V, dest: &mut D, init: A, step: F, emit: E) -> Result<()>
where
    V: VectorGet + ?Sized,
    D: VectorSet + ?Sized,
    F: FnMut(A, V::Elem) -> A,
    E: FnMut(&A) -> D::Elem,
{
    check_dims(op, src.size(), dest.size())?;
    if let Some(s) = src.same_order() {
        if let Some(d) = dest.same_order_mut() {
            if d.compatible(&s) {
                let len = s.size.min(d.size);
                trace!(op, len, "fast path");
                fast::cum_fold_into(s.data, s.shift, d.data, d.shift, len, s.reverse, init, step, emit);
                return Ok(());
            }
        }
    }
    trace!(op, "generic path");
    generic::cum_fold_into(src, dest, init, step, emit)
}

pub fn sum<V: VectorGet<Elem = f64> + ?Sized>(src: &V) -> Result<f64> {
    if let Some(s) = src.same_order() {
        trace!(op = "sum", "fast path");
        return Ok(fast::sum(s.data, s.shift, s.size, s.reverse));
    }
    trace!(op = "sum", "generic path");
    generic::sum(src)
}

pub fn prod<V: VectorGet<Elem = f64> + ?Sized>(src: &V) -> Result<f64> {
    if let Some(s) = src.same_order() {
        trace!(op = "prod", "fast path");
        return Ok(fast::prod(s.data, s.shift, s.size, s.reverse));
    }
    trace!(op = "prod", "generic path");
    generic::prod(src)
}

pub fn max<V: VectorGet<Elem = f64> + ?Sized>(src: &V) -> Result<f64> {
    fold(src, f64::NAN, generic::nan_max)
}

pub fn min<V: VectorGet<Elem = f64> + ?Sized>(src: &V) -> Result<f64> {
    fold(src, f64::NAN, generic::nan_min)
}

pub fn dot<L, R>(lhs: &L, rhs: &R) -> Result<f64>
where
    L: VectorGet<Elem = f64> + ?Sized,
    R: VectorGet<Elem = f64> + ?Sized,
{
    check_dims("dot", lhs.size(), rhs.size())?;
    if let (Some(l), Some(r)) = (lhs.same_order(), rhs.same_order()) {
        if l.compatible(&r) {
            trace!(op = "dot", "fast path");
            let len = l.size.min(r.size);
            return Ok(fast::dot(l.data, l.shift, r.data, r.shift, len, l.reverse));
        }
    }
    trace!(op = "dot", "generic path");
    generic::dot(lhs, rhs)
}

/// `dest[i] = src[size - 1 - i]`.
///
/// The raw copy needs equal sizes on top of compatible walks, otherwise the
/// two windows would be mirrored around different centres.
pub fn reverse_into<V, D>(src: &V, dest: &mut D) -> Result<()>
where
    V: VectorGet + ?Sized,
    D: VectorSet<Elem = V::Elem> + ?Sized,
{
    check_dims("reverse", src.size(), dest.size())?;
    if let Some(s) = src.same_order() {
        if let Some(d) = dest.same_order_mut() {
            if d.compatible(&s) && d.size == s.size {
                trace!(op = "reverse", "fast path");
                fast::reverse_into(s.data, s.shift, d.data, d.shift, s.size);
                return Ok(());
            }
        }
    }
    trace!(op = "reverse", "generic path");
    generic::reverse_into(src, dest)
}

pub fn reverse_in_place<V: VectorSet + ?Sized>(v: &mut V) -> Result<()> {
    if let Some(s) = v.same_order_mut() {
        trace!(op = "reverse_in_place", "fast path");
        fast::reverse_in_place(s.data, s.shift, s.size);
        return Ok(());
    }
    trace!(op = "reverse_in_place", "generic path");
    generic::reverse_in_place(v)
}
