//! Constructors for base vectors.

use num::complex::Complex64;
use rand::Rng;

use super::complex::ComplexVector;
use super::dense::{ArrayVector, IntVector, Vector};
use super::element::Element;
use super::traits::VectorGet;
use crate::error::{argument_error, Result};
use crate::ops::dispatch;

pub fn zeros<T: Element>(size: usize) -> ArrayVector<T> {
    ArrayVector::zeros(size)
}

pub fn ones(size: usize) -> Vector {
    filled(size, 1.0)
}

pub fn filled<T: Element>(size: usize, value: T) -> ArrayVector<T> {
    ArrayVector::from_vec(vec![value; size])
}

pub fn nan(size: usize) -> Vector {
    filled(size, f64::NAN)
}

pub fn from_vec<T: Element>(data: Vec<T>) -> ArrayVector<T> {
    ArrayVector::from_vec(data)
}

pub fn from_slice<T: Element>(data: &[T]) -> ArrayVector<T> {
    ArrayVector::from_vec(data.to_vec())
}

/// `v[i] = f(i)`.
pub fn from_fn<T: Element, F: FnMut(usize) -> T>(size: usize, f: F) -> ArrayVector<T> {
    ArrayVector::from_vec((0..size).map(f).collect())
}

/// A forward copy of any vector, in logical order.
pub fn from_vector<V: VectorGet + ?Sized>(src: &V) -> Result<ArrayVector<V::Elem>> {
    let mut out = ArrayVector::zeros(src.size());
    dispatch::fill_from(&mut out, src)?;
    Ok(out)
}

pub fn complex_zeros(size: usize) -> ComplexVector {
    ComplexVector::zeros(size)
}

pub fn complex_from_fn<F: FnMut(usize) -> Complex64>(size: usize, f: F) -> ComplexVector {
    ComplexVector::from_fn(size, f)
}

/// `n` values `start, start + step, ...`, accumulated by repeated addition.
pub fn linsequence(start: f64, step: f64, n: usize) -> Vector {
    let mut value = start;
    from_fn(n, |_| {
        let current = value;
        value += step;
        current
    })
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vector {
    let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0.0 };
    linsequence(start, step, n)
}

/// `n` values `start, start * ratio, ...`.
pub fn logsequence(start: f64, ratio: f64, n: usize) -> Vector {
    let mut value = start;
    from_fn(n, |_| {
        let current = value;
        value *= ratio;
        current
    })
}

/// `n` geometrically spaced values from `start` to `end` inclusive. Both
/// ends must be positive.
pub fn logspace(start: f64, end: f64, n: usize) -> Result<Vector> {
    if !(start > 0.0 && end > 0.0) {
        return Err(argument_error(format!(
            "logspace bounds must be positive, got [{start}, {end}]"
        )));
    }
    let ratio = if n > 1 { (end / start).powf(1.0 / (n - 1) as f64) } else { 1.0 };
    Ok(logsequence(start, ratio, n))
}

/// `start, start + 1, ..., end - 1`; empty when `end <= start`.
pub fn range(start: i32, end: i32) -> IntVector {
    let size = if end > start { (end as i64 - start as i64) as usize } else { 0 };
    from_fn(size, |i| start.wrapping_add(i as i32))
}

/// `start, start + step, ...` while strictly before `end` in the walk
/// direction.
pub fn range_step(start: i32, end: i32, step: i32) -> Result<IntVector> {
    if step == 0 {
        return Err(argument_error("range step must be non-zero"));
    }
    let span = end as i64 - start as i64;
    let step = step as i64;
    let size = if span != 0 && (span > 0) == (step > 0) {
        // ceil(span / step) for same-sign operands
        ((span.abs() + step.abs() - 1) / step.abs()) as usize
    } else {
        0
    };
    Ok(from_fn(size, |i| (start as i64 + i as i64 * step) as i32))
}

/// `before` followed by `after`.
pub fn merge<T, A, B>(before: &A, after: &B) -> Result<ArrayVector<T>>
where
    T: Element,
    A: VectorGet<Elem = T> + ?Sized,
    B: VectorGet<Elem = T> + ?Sized,
{
    let mut data = Vec::with_capacity(before.size() + after.size());
    dispatch::for_each(before, |v| data.push(v))?;
    dispatch::for_each(after, |v| data.push(v))?;
    Ok(ArrayVector::from_vec(data))
}

/// The elements of `src` accepted by `predicate`, in logical order.
pub fn filter<V, P>(src: &V, mut predicate: P) -> Result<ArrayVector<V::Elem>>
where
    V: VectorGet + ?Sized,
    P: FnMut(V::Elem) -> bool,
{
    let mut data = Vec::new();
    dispatch::for_each(src, |v| {
        if predicate(v) {
            data.push(v);
        }
    })?;
    Ok(ArrayVector::from_vec(data))
}

/// Uniform samples from `[0, 1)`.
pub fn rand<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vector {
    from_fn(size, |_| rng.random::<f64>())
}
