//! Capability traits every vector implementation provides.
//!
//! [`VectorGet`] and [`VectorSet`] are all the generic engine needs: a size,
//! bounds-checked element access and a cursor. The optional
//! [`same_order`](VectorGet::same_order) capability exposes the raw backing
//! array when an implementation's index map is a plain shift, which is what
//! lets the dispatcher pick the fast path.

use super::cursor::{
    ArrayCursor, ArraySetCursor, ComplexReadCursor, ComplexWriteCursor, ReadCursor, WriteCursor,
};
use super::element::Element;
use super::layout::Layout;
use crate::error::{bi_range_check, range_check, Result};

/// Whether two raw walks visit matching logical indices at matching steps.
///
/// Forward walks always line up. Reversed walks line up only when their
/// sizes agree, otherwise one starts later than the other.
#[inline]
pub(crate) fn compatible_walks(a_reverse: bool, a_size: usize, b_reverse: bool, b_size: usize) -> bool {
    a_reverse == b_reverse && (!a_reverse || a_size == b_size)
}

/// Read access to the raw array behind a vector.
#[derive(Debug, Clone, Copy)]
pub struct Strided<'a, T> {
    pub data: &'a [T],
    pub shift: usize,
    pub size: usize,
    pub reverse: bool,
}

impl<'a, T> Strided<'a, T> {
    #[inline]
    pub fn new(data: &'a [T], layout: Layout) -> Self {
        Strided {
            data,
            shift: layout.shift(),
            size: layout.size(),
            reverse: layout.is_reverse(),
        }
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        Layout::new(self.shift, self.size, self.reverse)
    }

    /// The physical slots `[shift, shift + size)`.
    #[inline]
    pub fn window(&self) -> &'a [T] {
        &self.data[self.shift..self.shift + self.size]
    }

    #[inline]
    pub fn compatible<U>(&self, other: &Strided<'_, U>) -> bool {
        compatible_walks(self.reverse, self.size, other.reverse, other.size)
    }

    #[inline]
    pub fn compatible_mut<U>(&self, other: &StridedMut<'_, U>) -> bool {
        compatible_walks(self.reverse, self.size, other.reverse, other.size)
    }
}

/// Write access to the raw array behind a vector.
#[derive(Debug)]
pub struct StridedMut<'a, T> {
    pub data: &'a mut [T],
    pub shift: usize,
    pub size: usize,
    pub reverse: bool,
}

impl<'a, T> StridedMut<'a, T> {
    #[inline]
    pub fn new(data: &'a mut [T], layout: Layout) -> Self {
        StridedMut {
            data,
            shift: layout.shift(),
            size: layout.size(),
            reverse: layout.is_reverse(),
        }
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        Layout::new(self.shift, self.size, self.reverse)
    }

    #[inline]
    pub fn window(&mut self) -> &mut [T] {
        &mut self.data[self.shift..self.shift + self.size]
    }

    #[inline]
    pub fn into_window(self) -> &'a mut [T] {
        &mut self.data[self.shift..self.shift + self.size]
    }

    #[inline]
    pub fn compatible<U>(&self, other: &Strided<'_, U>) -> bool {
        compatible_walks(self.reverse, self.size, other.reverse, other.size)
    }
}

/// Readable vector of a single element kind.
pub trait VectorGet {
    type Elem: Element;
    type Cursor<'a>: ReadCursor<Self::Elem>
    where
        Self: 'a;

    fn size(&self) -> usize;

    /// Bounds-checked read of logical `index`.
    fn get(&self, index: usize) -> Result<Self::Elem>;

    /// A cursor positioned before logical index 0.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// The backing array, if the index map is a plain shift.
    #[inline]
    fn same_order(&self) -> Option<Strided<'_, Self::Elem>> {
        None
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Writable vector of a single element kind.
pub trait VectorSet: VectorGet {
    type SetCursor<'a>: WriteCursor<Self::Elem>
    where
        Self: 'a;

    /// Bounds-checked write of logical `index`.
    fn set(&mut self, index: usize, value: Self::Elem) -> Result<()>;

    fn set_cursor(&mut self) -> Self::SetCursor<'_>;

    #[inline]
    fn same_order_mut(&mut self) -> Option<StridedMut<'_, Self::Elem>> {
        None
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        bi_range_check(i, j, self.size())?;
        let a = self.get(i)?;
        let b = self.get(j)?;
        self.set(i, b)?;
        self.set(j, a)
    }
}

impl<T: Element> VectorGet for Vec<T> {
    type Elem = T;
    type Cursor<'a> = ArrayCursor<'a, T>;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<T> {
        range_check(index, self.len())?;
        Ok(self[index])
    }

    fn cursor(&self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(self, Layout::forward(self.len()))
    }

    #[inline]
    fn same_order(&self) -> Option<Strided<'_, T>> {
        Some(Strided::new(self, Layout::forward(self.len())))
    }
}

impl<T: Element> VectorSet for Vec<T> {
    type SetCursor<'a> = ArraySetCursor<'a, T>;

    #[inline]
    fn set(&mut self, index: usize, value: T) -> Result<()> {
        range_check(index, self.len())?;
        self[index] = value;
        Ok(())
    }

    fn set_cursor(&mut self) -> ArraySetCursor<'_, T> {
        let layout = Layout::forward(self.len());
        ArraySetCursor::new(self, layout)
    }

    #[inline]
    fn same_order_mut(&mut self) -> Option<StridedMut<'_, T>> {
        let layout = Layout::forward(self.len());
        Some(StridedMut::new(self, layout))
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        bi_range_check(i, j, self.len())?;
        <[T]>::swap(self, i, j);
        Ok(())
    }
}

/// Raw planes of a complex vector.
#[derive(Debug, Clone, Copy)]
pub struct ComplexStrided<'a> {
    pub real: &'a [f64],
    pub imag: &'a [f64],
    pub shift: usize,
    pub size: usize,
    pub reverse: bool,
}

impl<'a> ComplexStrided<'a> {
    #[inline]
    pub fn new(real: &'a [f64], imag: &'a [f64], layout: Layout) -> Self {
        ComplexStrided {
            real,
            imag,
            shift: layout.shift(),
            size: layout.size(),
            reverse: layout.is_reverse(),
        }
    }

    #[inline]
    pub fn windows(&self) -> (&'a [f64], &'a [f64]) {
        let end = self.shift + self.size;
        (&self.real[self.shift..end], &self.imag[self.shift..end])
    }

    #[inline]
    pub fn compatible(&self, other: &ComplexStrided<'_>) -> bool {
        compatible_walks(self.reverse, self.size, other.reverse, other.size)
    }

    #[inline]
    pub fn compatible_real(&self, other: &Strided<'_, f64>) -> bool {
        compatible_walks(self.reverse, self.size, other.reverse, other.size)
    }
}

/// Mutable raw planes of a complex vector.
#[derive(Debug)]
pub struct ComplexStridedMut<'a> {
    pub real: &'a mut [f64],
    pub imag: &'a mut [f64],
    pub shift: usize,
    pub size: usize,
    pub reverse: bool,
}

impl<'a> ComplexStridedMut<'a> {
    #[inline]
    pub fn new(real: &'a mut [f64], imag: &'a mut [f64], layout: Layout) -> Self {
        ComplexStridedMut {
            real,
            imag,
            shift: layout.shift(),
            size: layout.size(),
            reverse: layout.is_reverse(),
        }
    }

    #[inline]
    pub fn into_windows(self) -> (&'a mut [f64], &'a mut [f64]) {
        let end = self.shift + self.size;
        (&mut self.real[self.shift..end], &mut self.imag[self.shift..end])
    }

    #[inline]
    pub fn compatible(&self, other: &ComplexStrided<'_>) -> bool {
        compatible_walks(self.reverse, self.size, other.reverse, other.size)
    }

    #[inline]
    pub fn compatible_real(&self, other: &Strided<'_, f64>) -> bool {
        compatible_walks(self.reverse, self.size, other.reverse, other.size)
    }
}

/// Readable complex vector.
pub trait ComplexGet {
    type Cursor<'a>: ComplexReadCursor
    where
        Self: 'a;

    fn size(&self) -> usize;
    fn get_parts(&self, index: usize) -> Result<(f64, f64)>;
    fn cursor(&self) -> Self::Cursor<'_>;

    #[inline]
    fn same_order(&self) -> Option<ComplexStrided<'_>> {
        None
    }
}

/// Writable complex vector.
pub trait ComplexSet: ComplexGet {
    type SetCursor<'a>: ComplexWriteCursor
    where
        Self: 'a;

    fn set_parts(&mut self, index: usize, re: f64, im: f64) -> Result<()>;
    fn set_cursor(&mut self) -> Self::SetCursor<'_>;

    #[inline]
    fn same_order_mut(&mut self) -> Option<ComplexStridedMut<'_>> {
        None
    }
}
