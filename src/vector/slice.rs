//! Index and mask selections.
//!
//! A [`Selector`] picks logical indices of a vector. `slice` materializes the
//! picked elements into a new owning vector; `ref_slice` and `ref_slice_mut`
//! return live views that read and write through to the source. Selections
//! are not affine, so their views never take the fast path.

use super::cursor::{IndexCursor, IndexSetCursor};
use super::dense::ArrayVector;
use super::element::Element;
use super::layout::Layout;
use super::traits::{VectorGet, VectorSet};
use crate::error::{dimension_error, index_error, range_check, Result};
use crate::ops::dispatch;

/// Which logical indices a slice keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every index, in order.
    All,
    /// Explicit indices, in the given order. Repeats are allowed.
    Indices(Vec<usize>),
    /// `true` entries are kept. The mask must be as long as the vector.
    Mask(Vec<bool>),
}

impl Selector {
    /// Indices in `[0, size)` accepted by `predicate`.
    pub fn filter<P: FnMut(usize) -> bool>(size: usize, mut predicate: P) -> Self {
        Selector::Indices((0..size).filter(|&i| predicate(i)).collect())
    }

    /// Mask read from a logical vector.
    pub fn mask<V: VectorGet<Elem = bool> + ?Sized>(mask: &V) -> Result<Self> {
        let mut values = Vec::with_capacity(mask.size());
        dispatch::for_each(mask, |b| values.push(b))?;
        Ok(Selector::Mask(values))
    }

    /// The selected logical indices of a vector of length `size`.
    pub fn resolve(&self, size: usize) -> Result<Vec<usize>> {
        match self {
            Selector::All => Ok((0..size).collect()),
            Selector::Indices(indices) => {
                if let Some(&bad) = indices.iter().find(|&&i| i >= size) {
                    return Err(index_error(bad, size));
                }
                Ok(indices.clone())
            }
            Selector::Mask(mask) => {
                if mask.len() != size {
                    return Err(dimension_error("slice", size, mask.len()));
                }
                Ok(mask
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &keep)| keep.then_some(i))
                    .collect())
            }
        }
    }
}

impl From<Vec<usize>> for Selector {
    fn from(indices: Vec<usize>) -> Self {
        Selector::Indices(indices)
    }
}

impl From<Vec<bool>> for Selector {
    fn from(mask: Vec<bool>) -> Self {
        Selector::Mask(mask)
    }
}

/// Read view over selected elements of an array-backed vector.
#[derive(Debug, Clone)]
pub struct IndexView<'a, T> {
    data: &'a [T],
    layout: Layout,
    indices: Vec<usize>,
}

/// Write view over selected elements of an array-backed vector.
#[derive(Debug)]
pub struct IndexViewMut<'a, T> {
    data: &'a mut [T],
    layout: Layout,
    indices: Vec<usize>,
}

impl<T: Element> IndexView<'_, T> {
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<T> {
        range_check(index, self.indices.len())?;
        Ok(self.data[self.layout.physical(self.indices[index])])
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.indices
            .iter()
            .map(|&i| self.data[self.layout.physical(i)])
            .collect()
    }

    pub fn copy(&self) -> ArrayVector<T> {
        ArrayVector::from_vec(self.to_vec())
    }
}

impl<T: Element> IndexViewMut<'_, T> {
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<T> {
        range_check(index, self.indices.len())?;
        Ok(self.data[self.layout.physical(self.indices[index])])
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        range_check(index, self.indices.len())?;
        let slot = self.layout.physical(self.indices[index]);
        self.data[slot] = value;
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.indices
            .iter()
            .map(|&i| self.data[self.layout.physical(i)])
            .collect()
    }

    pub fn fill(&mut self, value: T) -> Result<()> {
        dispatch::fill_value(self, value)
    }

    pub fn fill_from<V: VectorGet<Elem = T> + ?Sized>(&mut self, src: &V) -> Result<()> {
        dispatch::fill_from(self, src)
    }

    pub fn map_in_place<F: FnMut(T) -> T>(&mut self, f: F) -> Result<()> {
        dispatch::map_in_place("map_in_place", self, f)
    }
}

impl<T: Element> VectorGet for IndexView<'_, T> {
    type Elem = T;
    type Cursor<'b>
        = IndexCursor<'b, T>
    where
        Self: 'b;

    fn size(&self) -> usize {
        self.indices.len()
    }

    fn get(&self, index: usize) -> Result<T> {
        IndexView::get(self, index)
    }

    fn cursor(&self) -> IndexCursor<'_, T> {
        IndexCursor::new(self.data, self.layout, &self.indices)
    }
}

impl<T: Element> VectorGet for IndexViewMut<'_, T> {
    type Elem = T;
    type Cursor<'b>
        = IndexCursor<'b, T>
    where
        Self: 'b;

    fn size(&self) -> usize {
        self.indices.len()
    }

    fn get(&self, index: usize) -> Result<T> {
        IndexViewMut::get(self, index)
    }

    fn cursor(&self) -> IndexCursor<'_, T> {
        IndexCursor::new(&*self.data, self.layout, &self.indices)
    }
}

impl<T: Element> VectorSet for IndexViewMut<'_, T> {
    type SetCursor<'b>
        = IndexSetCursor<'b, T>
    where
        Self: 'b;

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        IndexViewMut::set(self, index, value)
    }

    fn set_cursor(&mut self) -> IndexSetCursor<'_, T> {
        IndexSetCursor::new(&mut *self.data, self.layout, &self.indices)
    }
}

impl<T: Element, S: AsRef<[T]>> ArrayVector<T, S> {
    /// Copies the selected elements into a new vector.
    pub fn slice(&self, selector: &Selector) -> Result<ArrayVector<T>> {
        Ok(self.ref_slice(selector)?.copy())
    }

    /// A live read view over the selected elements.
    pub fn ref_slice(&self, selector: &Selector) -> Result<IndexView<'_, T>> {
        let indices = selector.resolve(self.size())?;
        Ok(IndexView {
            data: self.data.as_ref(),
            layout: self.layout,
            indices,
        })
    }
}

impl<T: Element, S: AsRef<[T]> + AsMut<[T]>> ArrayVector<T, S> {
    /// A live write view over the selected elements.
    pub fn ref_slice_mut(&mut self, selector: &Selector) -> Result<IndexViewMut<'_, T>> {
        let indices = selector.resolve(self.size())?;
        let layout = self.layout;
        Ok(IndexViewMut {
            data: self.data.as_mut(),
            layout,
            indices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorError;
    use crate::vector::dense::{LogicalVector, Vector};

    #[test]
    fn test_slice_copies() {
        let v = Vector::from_vec(vec![10.0, 11.0, 12.0, 13.0]);
        let picked = v.slice(&Selector::Indices(vec![3, 0, 0])).unwrap();
        assert_eq!(picked.to_vec(), vec![13.0, 10.0, 10.0]);
        assert_eq!(v.slice(&Selector::All).unwrap(), v);
    }

    #[test]
    fn test_filter_selector() {
        let odd = Selector::filter(7, |i| i % 2 == 1);
        assert_eq!(odd, Selector::Indices(vec![1, 3, 5]));
        assert_eq!(odd.resolve(7).unwrap(), vec![1, 3, 5]);
        assert_eq!(Selector::filter(0, |_| true), Selector::Indices(vec![]));

        let mut calls = Vec::new();
        Selector::filter(3, |i| {
            calls.push(i);
            false
        });
        assert_eq!(calls, vec![0, 1, 2]);
    }

    #[test]
    fn test_ref_slice_through_reverse() {
        let v = Vector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let rev = v.ref_reverse();
        let view = rev.ref_slice(&Selector::filter(4, |i| i % 2 == 0)).unwrap();
        assert_eq!(view.to_vec(), vec![4.0, 2.0]);
        assert!(view.same_order().is_none());
    }

    #[test]
    fn test_ref_slice_mut_writes_through() {
        let mut v = Vector::from_vec(vec![1.0, -2.0, 3.0, -4.0]);
        let mask = LogicalVector::from_vec(vec![false, true, false, true]);
        {
            let mut negatives = v.ref_slice_mut(&Selector::mask(&mask).unwrap()).unwrap();
            negatives.fill(0.0).unwrap();
        }
        assert_eq!(v.to_vec(), vec![1.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_selector_errors() {
        let v = Vector::from_vec(vec![1.0, 2.0]);
        assert_eq!(
            v.slice(&Selector::Indices(vec![0, 2])).unwrap_err(),
            VectorError::IndexOutOfBounds { index: 2, size: 2 }
        );
        assert!(matches!(
            v.slice(&Selector::Mask(vec![true])),
            Err(VectorError::DimensionMismatch { .. })
        ));
        let view = v.ref_slice(&Selector::All).unwrap();
        assert!(view.get(2).is_err());
    }
}
