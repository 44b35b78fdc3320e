//! Array-backed vectors and their zero-copy views.
//!
//! [`ArrayVector`] pairs a backing store with a [`Layout`]. The store decides
//! ownership:
//!
//! | storage     | alias                | role                |
//! |-------------|----------------------|---------------------|
//! | `Vec<T>`    | [`Vector`]           | owning base vector  |
//! | `&[T]`      | [`VectorView`]       | read view           |
//! | `&mut [T]`  | [`VectorViewMut`]    | write view          |
//!
//! Views borrow their owner, so the borrow checker ties a view's lifetime to
//! the vector it was taken from. Taking a view of a view recomputes the
//! layout instead of nesting.

use std::fmt;
use std::marker::PhantomData;

use ndarray::{Array1, ArrayView1, Axis};

use super::cursor::{ArrayCursor, ArraySetCursor};
use super::element::Element;
use super::layout::Layout;
use super::traits::{Strided, StridedMut, VectorGet, VectorSet};
use crate::error::{argument_error, bi_range_check, range_check, Result};

/// A dense vector over a contiguous backing array.
#[derive(Clone)]
pub struct ArrayVector<T, S = Vec<T>> {
    pub(crate) data: S,
    pub(crate) layout: Layout,
    _marker: PhantomData<T>,
}

pub type Vector = ArrayVector<f64>;
pub type VectorView<'a> = ArrayVector<f64, &'a [f64]>;
pub type VectorViewMut<'a> = ArrayVector<f64, &'a mut [f64]>;

pub type IntVector = ArrayVector<i32>;
pub type IntVectorView<'a> = ArrayVector<i32, &'a [i32]>;
pub type IntVectorViewMut<'a> = ArrayVector<i32, &'a mut [i32]>;

pub type LongVector = ArrayVector<i64>;
pub type LongVectorView<'a> = ArrayVector<i64, &'a [i64]>;
pub type LongVectorViewMut<'a> = ArrayVector<i64, &'a mut [i64]>;

pub type LogicalVector = ArrayVector<bool>;
pub type LogicalVectorView<'a> = ArrayVector<bool, &'a [bool]>;
pub type LogicalVectorViewMut<'a> = ArrayVector<bool, &'a mut [bool]>;

impl<T: Element> ArrayVector<T> {
    /// Takes ownership of `data` as a forward vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        let layout = Layout::forward(data.len());
        ArrayVector {
            data,
            layout,
            _marker: PhantomData,
        }
    }

    /// A default-filled forward vector.
    pub fn zeros(size: usize) -> Self {
        ArrayVector::from_vec(vec![T::default(); size])
    }

    /// A default-filled owning vector walked in the given direction.
    pub(crate) fn zeros_directed(size: usize, reverse: bool) -> Self {
        ArrayVector {
            data: vec![T::default(); size],
            layout: Layout::new(0, size, reverse),
            _marker: PhantomData,
        }
    }

    /// The elements in logical order, reusing the allocation when possible.
    pub fn into_vec(self) -> Vec<T> {
        let layout = self.layout;
        let mut data = self.data;
        data.truncate(layout.end());
        data.drain(..layout.shift());
        if layout.is_reverse() {
            data.reverse();
        }
        data
    }
}

impl<T: Element, S: AsRef<[T]>> ArrayVector<T, S> {
    /// Wraps `data` with an explicit layout.
    pub fn with_layout(data: S, layout: Layout) -> Result<Self> {
        let len = data.as_ref().len();
        if !layout.fits(len) {
            return Err(argument_error(format!(
                "layout [{}, {}) does not fit a backing array of length {}",
                layout.shift(),
                layout.end(),
                len
            )));
        }
        Ok(ArrayVector {
            data,
            layout,
            _marker: PhantomData,
        })
    }

    pub(crate) fn with_layout_unchecked(data: S, layout: Layout) -> Self {
        debug_assert!(layout.fits(data.as_ref().len()));
        ArrayVector {
            data,
            layout,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.size() == 0
    }

    /// Length of the whole backing array, which may exceed `size`.
    #[inline]
    pub fn internal_size(&self) -> usize {
        self.data.as_ref().len()
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.layout.is_reverse()
    }

    /// The whole backing array.
    #[inline]
    pub fn internal_data(&self) -> &[T] {
        self.data.as_ref()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Result<T> {
        range_check(index, self.size())?;
        Ok(self.data.as_ref()[self.layout.physical(index)])
    }

    pub fn first(&self) -> Result<T> {
        self.get(0)
    }

    pub fn last(&self) -> Result<T> {
        // wraps to usize::MAX on empty, which get() rejects
        self.get(self.size().wrapping_sub(1))
    }

    /// The elements in logical order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        let data = self.data.as_ref();
        let layout = self.layout;
        (0..layout.size()).map(move |i| data[layout.physical(i)])
    }

    pub fn to_vec(&self) -> Vec<T> {
        let window = &self.data.as_ref()[self.layout.shift()..self.layout.end()];
        if self.layout.is_reverse() {
            window.iter().rev().copied().collect()
        } else {
            window.to_vec()
        }
    }

    /// A fresh owning forward vector with the same logical contents.
    pub fn copy(&self) -> ArrayVector<T> {
        ArrayVector::from_vec(self.to_vec())
    }

    /// The logical window as a slice, only for forward layouts.
    pub fn as_slice(&self) -> Option<&[T]> {
        if self.layout.is_reverse() {
            None
        } else {
            Some(&self.data.as_ref()[self.layout.shift()..self.layout.end()])
        }
    }

    pub fn view(&self) -> ArrayVector<T, &[T]> {
        ArrayVector {
            data: self.data.as_ref(),
            layout: self.layout,
            _marker: PhantomData,
        }
    }

    /// A read view of logical `[from, to)`.
    pub fn sub_vec(&self, from: usize, to: usize) -> Result<ArrayVector<T, &[T]>> {
        let layout = self.layout.sub(from, to)?;
        Ok(ArrayVector {
            data: self.data.as_ref(),
            layout,
            _marker: PhantomData,
        })
    }

    /// A read view walking this vector backwards.
    pub fn ref_reverse(&self) -> ArrayVector<T, &[T]> {
        ArrayVector {
            data: self.data.as_ref(),
            layout: self.layout.reversed(),
            _marker: PhantomData,
        }
    }

    pub fn to_ndarray(&self) -> Array1<T> {
        Array1::from_vec(self.to_vec())
    }

    /// A zero-copy `ndarray` view. Reversed layouts get a negative stride.
    pub fn as_ndarray(&self) -> ArrayView1<'_, T> {
        let window = &self.data.as_ref()[self.layout.shift()..self.layout.end()];
        let mut view = ArrayView1::from(window);
        if self.layout.is_reverse() {
            view.invert_axis(Axis(0));
        }
        view
    }
}

impl<T: Element, S: AsRef<[T]> + AsMut<[T]>> ArrayVector<T, S> {
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        range_check(index, self.size())?;
        let slot = self.layout.physical(index);
        self.data.as_mut()[slot] = value;
        Ok(())
    }

    /// Writes `value` and returns what was there.
    pub fn get_and_set(&mut self, index: usize, value: T) -> Result<T> {
        range_check(index, self.size())?;
        let slot = self.layout.physical(index);
        Ok(std::mem::replace(&mut self.data.as_mut()[slot], value))
    }

    pub fn update<F: FnOnce(T) -> T>(&mut self, index: usize, f: F) -> Result<()> {
        range_check(index, self.size())?;
        let slot = self.layout.physical(index);
        let data = self.data.as_mut();
        data[slot] = f(data[slot]);
        Ok(())
    }

    /// Applies `f` in place and returns the previous value.
    pub fn get_and_update<F: FnOnce(T) -> T>(&mut self, index: usize, f: F) -> Result<T> {
        range_check(index, self.size())?;
        let slot = self.layout.physical(index);
        let data = self.data.as_mut();
        let old = data[slot];
        data[slot] = f(old);
        Ok(old)
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        bi_range_check(i, j, self.size())?;
        let (a, b) = (self.layout.physical(i), self.layout.physical(j));
        self.data.as_mut().swap(a, b);
        Ok(())
    }

    pub fn internal_data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }

    pub fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        if self.layout.is_reverse() {
            None
        } else {
            let (shift, end) = (self.layout.shift(), self.layout.end());
            Some(&mut self.data.as_mut()[shift..end])
        }
    }

    pub fn view_mut(&mut self) -> ArrayVector<T, &mut [T]> {
        ArrayVector {
            data: self.data.as_mut(),
            layout: self.layout,
            _marker: PhantomData,
        }
    }

    /// A write view of logical `[from, to)`.
    pub fn sub_vec_mut(&mut self, from: usize, to: usize) -> Result<ArrayVector<T, &mut [T]>> {
        let layout = self.layout.sub(from, to)?;
        Ok(ArrayVector {
            data: self.data.as_mut(),
            layout,
            _marker: PhantomData,
        })
    }

    pub fn ref_reverse_mut(&mut self) -> ArrayVector<T, &mut [T]> {
        ArrayVector {
            data: self.data.as_mut(),
            layout: self.layout.reversed(),
            _marker: PhantomData,
        }
    }
}

impl<T: Element> Copy for ArrayVector<T, &[T]> {}

/// Consuming adapters keep the owner's lifetime `'a`, so views chain in one
/// expression and can be returned from functions taking a view.
impl<'a, T: Element> ArrayVector<T, &'a [T]> {
    pub fn into_sub_vec(self, from: usize, to: usize) -> Result<ArrayVector<T, &'a [T]>> {
        let layout = self.layout.sub(from, to)?;
        Ok(ArrayVector::with_layout_unchecked(self.data, layout))
    }

    pub fn into_reverse(self) -> ArrayVector<T, &'a [T]> {
        ArrayVector::with_layout_unchecked(self.data, self.layout.reversed())
    }
}

impl<'a, T: Element> ArrayVector<T, &'a mut [T]> {
    pub fn into_sub_vec(self, from: usize, to: usize) -> Result<ArrayVector<T, &'a mut [T]>> {
        let layout = self.layout.sub(from, to)?;
        Ok(ArrayVector::with_layout_unchecked(self.data, layout))
    }

    pub fn into_reverse(self) -> ArrayVector<T, &'a mut [T]> {
        let layout = self.layout.reversed();
        ArrayVector::with_layout_unchecked(self.data, layout)
    }
}

macro_rules! impl_numeric_accessors {
    ($($t:ty => $add:expr),* $(,)?) => {$(
        impl<S: AsRef<[$t]> + AsMut<[$t]>> ArrayVector<$t, S> {
            pub fn add_at(&mut self, index: usize, delta: $t) -> Result<()> {
                self.update(index, |v| $add(v, delta))
            }

            /// Adds `delta` and returns the previous value.
            pub fn get_and_add(&mut self, index: usize, delta: $t) -> Result<$t> {
                self.get_and_update(index, |v| $add(v, delta))
            }

            pub fn increment(&mut self, index: usize) -> Result<()> {
                self.add_at(index, 1 as $t)
            }

            pub fn decrement(&mut self, index: usize) -> Result<()> {
                self.add_at(index, -1 as $t)
            }
        }
    )*};
}

impl_numeric_accessors! {
    f64 => |a: f64, b: f64| a + b,
    i32 => i32::wrapping_add,
    i64 => i64::wrapping_add,
}

impl<T: Element, S: AsRef<[T]>> VectorGet for ArrayVector<T, S> {
    type Elem = T;
    type Cursor<'a>
        = ArrayCursor<'a, T>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.layout.size()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<T> {
        ArrayVector::get(self, index)
    }

    fn cursor(&self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(self.data.as_ref(), self.layout)
    }

    #[inline]
    fn same_order(&self) -> Option<Strided<'_, T>> {
        Some(Strided::new(self.data.as_ref(), self.layout))
    }
}

impl<T: Element, S: AsRef<[T]> + AsMut<[T]>> VectorSet for ArrayVector<T, S> {
    type SetCursor<'a>
        = ArraySetCursor<'a, T>
    where
        Self: 'a;

    #[inline]
    fn set(&mut self, index: usize, value: T) -> Result<()> {
        ArrayVector::set(self, index, value)
    }

    fn set_cursor(&mut self) -> ArraySetCursor<'_, T> {
        let layout = self.layout;
        ArraySetCursor::new(self.data.as_mut(), layout)
    }

    #[inline]
    fn same_order_mut(&mut self) -> Option<StridedMut<'_, T>> {
        let layout = self.layout;
        Some(StridedMut::new(self.data.as_mut(), layout))
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        ArrayVector::swap(self, i, j)
    }
}

impl<T: Element, S: AsRef<[T]>, S2: AsRef<[T]>> PartialEq<ArrayVector<T, S2>> for ArrayVector<T, S> {
    fn eq(&self, other: &ArrayVector<T, S2>) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T: Element, S: AsRef<[T]>> fmt::Debug for ArrayVector<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Element> From<Vec<T>> for ArrayVector<T> {
    fn from(data: Vec<T>) -> Self {
        ArrayVector::from_vec(data)
    }
}

impl<T: Element> From<&[T]> for ArrayVector<T> {
    fn from(data: &[T]) -> Self {
        ArrayVector::from_vec(data.to_vec())
    }
}

impl<T: Element> From<Array1<T>> for ArrayVector<T> {
    fn from(array: Array1<T>) -> Self {
        ArrayVector::from_vec(array.iter().copied().collect())
    }
}

impl<T: Element> FromIterator<T> for ArrayVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayVector::from_vec(iter.into_iter().collect())
    }
}
