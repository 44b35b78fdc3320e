//! Operations shared by every element kind.

use super::dispatch;
use crate::error::Result;
use crate::vector::dense::{ArrayVector, LogicalVector};
use crate::vector::element::Element;
use crate::vector::traits::{VectorGet, VectorSet};

impl<T: Element, S: AsRef<[T]>> ArrayVector<T, S> {
    pub fn map<F: FnMut(T) -> T>(&self, f: F) -> Result<ArrayVector<T>> {
        let mut out = dispatch::zeros_like(self);
        dispatch::map_into("map", self, &mut out, f)?;
        Ok(out)
    }

    pub fn map_into<D, F>(&self, dest: &mut D, f: F) -> Result<()>
    where
        D: VectorSet<Elem = T> + ?Sized,
        F: FnMut(T) -> T,
    {
        dispatch::map_into("map", self, dest, f)
    }

    /// `f(self[i], rhs[i])` into a fresh vector.
    pub fn operate<R, F>(&self, rhs: &R, f: F) -> Result<ArrayVector<T>>
    where
        R: VectorGet<Elem = T> + ?Sized,
        F: FnMut(T, T) -> T,
    {
        let mut out = dispatch::zeros_like(self);
        dispatch::ebe_into("operate", self, rhs, &mut out, f)?;
        Ok(out)
    }

    pub fn operate_into<R, D, F>(&self, rhs: &R, dest: &mut D, f: F) -> Result<()>
    where
        R: VectorGet<Elem = T> + ?Sized,
        D: VectorSet<Elem = T> + ?Sized,
        F: FnMut(T, T) -> T,
    {
        dispatch::ebe_into("operate", self, rhs, dest, f)
    }

    /// `pred(self[i], rhs[i])` as a logical vector.
    pub fn compare<R, P>(&self, rhs: &R, pred: P) -> Result<LogicalVector>
    where
        R: VectorGet<Elem = T> + ?Sized,
        P: FnMut(T, T) -> bool,
    {
        let mut out = dispatch::zeros_like(self);
        dispatch::ebe_into("compare", self, rhs, &mut out, pred)?;
        Ok(out)
    }

    /// `pred(self[i])` as a logical vector.
    pub fn check<P: FnMut(T) -> bool>(&self, pred: P) -> Result<LogicalVector> {
        let mut out = dispatch::zeros_like(self);
        dispatch::map_into("check", self, &mut out, pred)?;
        Ok(out)
    }

    /// Visits elements in logical order.
    pub fn for_each<G: FnMut(T)>(&self, consumer: G) -> Result<()> {
        dispatch::for_each(self, consumer)
    }

    /// Folds in logical order.
    pub fn fold<A, F: FnMut(A, T) -> A>(&self, init: A, f: F) -> Result<A> {
        dispatch::fold(self, init, f)
    }

    /// A reversed copy, as opposed to the [`ref_reverse`](Self::ref_reverse) view.
    pub fn reverse(&self) -> Result<ArrayVector<T>> {
        let mut out = dispatch::zeros_like(self);
        dispatch::reverse_into(self, &mut out)?;
        Ok(out)
    }

    pub fn reverse_into<D: VectorSet<Elem = T> + ?Sized>(&self, dest: &mut D) -> Result<()> {
        dispatch::reverse_into(self, dest)
    }
}

impl<T: Element, S: AsRef<[T]> + AsMut<[T]>> ArrayVector<T, S> {
    pub fn map_in_place<F: FnMut(T) -> T>(&mut self, f: F) -> Result<()> {
        dispatch::map_in_place("map_in_place", self, f)
    }

    pub fn operate_in_place<R, F>(&mut self, rhs: &R, f: F) -> Result<()>
    where
        R: VectorGet<Elem = T> + ?Sized,
        F: FnMut(T, T) -> T,
    {
        dispatch::ebe_in_place("operate_in_place", self, rhs, f)
    }

    pub fn fill(&mut self, value: T) -> Result<()> {
        dispatch::fill_value(self, value)
    }

    pub fn fill_from<V: VectorGet<Elem = T> + ?Sized>(&mut self, src: &V) -> Result<()> {
        dispatch::fill_from(self, src)
    }

    /// `self[i] = getter(i)`.
    pub fn fill_with<G: FnMut(usize) -> T>(&mut self, getter: G) -> Result<()> {
        dispatch::fill_with(self, getter)
    }

    /// Calls `supplier` once per element, in logical order.
    pub fn assign<G: FnMut() -> T>(&mut self, supplier: G) -> Result<()> {
        dispatch::assign(self, supplier)
    }

    pub fn reverse_in_place(&mut self) -> Result<()> {
        dispatch::reverse_in_place(self)
    }
}

compare_ops! {
    equal, equal_scalar => ==;
    greater, greater_scalar => >;
    greater_or_equal, greater_or_equal_scalar => >=;
    less, less_scalar => <;
    less_or_equal, less_or_equal_scalar => <=;
}
