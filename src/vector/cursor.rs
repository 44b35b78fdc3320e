//! Cursor protocol used by the generic engine.
//!
//! A read cursor walks a vector in logical order. A write cursor can also
//! advance without reading ([`WriteCursor::next_only`]) and overwrite the slot
//! it last visited ([`WriteCursor::set`]), so pure write streams such as
//! `fill` never read the old value.
//!
//! Misuse is reported, not tolerated: advancing past the end or calling `set`
//! before the first advance returns [`VectorError::InvalidState`].

use num::complex::Complex64;

use super::layout::Layout;
use crate::error::{Result, VectorError};

const EXHAUSTED: &str = "cursor advanced past the end";
const NOT_STARTED: &str = "set called before the cursor advanced";

/// Read-only traversal in logical order.
pub trait ReadCursor<T> {
    fn has_next(&self) -> bool;
    fn next(&mut self) -> Result<T>;
}

/// Read/write traversal in logical order.
pub trait WriteCursor<T>: ReadCursor<T> {
    /// Advances without reading the slot.
    fn next_only(&mut self) -> Result<()>;

    /// Overwrites the slot visited last.
    fn set(&mut self, value: T) -> Result<()>;

    #[inline]
    fn next_and_set(&mut self, value: T) -> Result<()> {
        self.next_only()?;
        self.set(value)
    }
}

/// Read-only traversal over the two planes of a complex vector.
///
/// Values come out as primitive `(re, im)` pairs; [`next`](Self::next) only
/// exists for callers that want a [`Complex64`].
pub trait ComplexReadCursor {
    fn has_next(&self) -> bool;
    fn next_parts(&mut self) -> Result<(f64, f64)>;

    #[inline]
    fn next(&mut self) -> Result<Complex64> {
        let (re, im) = self.next_parts()?;
        Ok(Complex64::new(re, im))
    }
}

/// Read/write traversal over the two planes of a complex vector.
pub trait ComplexWriteCursor: ComplexReadCursor {
    fn next_only(&mut self) -> Result<()>;
    fn set_parts(&mut self, re: f64, im: f64) -> Result<()>;

    #[inline]
    fn next_and_set_parts(&mut self, re: f64, im: f64) -> Result<()> {
        self.next_only()?;
        self.set_parts(re, im)
    }

    #[inline]
    fn set(&mut self, value: Complex64) -> Result<()> {
        self.set_parts(value.re, value.im)
    }
}

/// Cursor over an array addressed through a [`Layout`].
#[derive(Debug, Clone)]
pub struct ArrayCursor<'a, T> {
    data: &'a [T],
    layout: Layout,
    pos: usize,
}

impl<'a, T> ArrayCursor<'a, T> {
    pub(crate) fn new(data: &'a [T], layout: Layout) -> Self {
        debug_assert!(layout.fits(data.len()));
        ArrayCursor {
            data,
            layout,
            pos: 0,
        }
    }
}

impl<T: Copy> ReadCursor<T> for ArrayCursor<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.pos < self.layout.size()
    }

    #[inline]
    fn next(&mut self) -> Result<T> {
        if !self.has_next() {
            return Err(VectorError::InvalidState(EXHAUSTED));
        }
        let value = self.data[self.layout.physical(self.pos)];
        self.pos += 1;
        Ok(value)
    }
}

/// Write cursor over an array addressed through a [`Layout`].
#[derive(Debug)]
pub struct ArraySetCursor<'a, T> {
    data: &'a mut [T],
    layout: Layout,
    pos: usize,
    last: Option<usize>,
}

impl<'a, T> ArraySetCursor<'a, T> {
    pub(crate) fn new(data: &'a mut [T], layout: Layout) -> Self {
        debug_assert!(layout.fits(data.len()));
        ArraySetCursor {
            data,
            layout,
            pos: 0,
            last: None,
        }
    }

    #[inline]
    fn advance(&mut self) -> Result<usize> {
        if self.pos >= self.layout.size() {
            return Err(VectorError::InvalidState(EXHAUSTED));
        }
        let slot = self.layout.physical(self.pos);
        self.pos += 1;
        self.last = Some(slot);
        Ok(slot)
    }
}

impl<T: Copy> ReadCursor<T> for ArraySetCursor<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.pos < self.layout.size()
    }

    #[inline]
    fn next(&mut self) -> Result<T> {
        let slot = self.advance()?;
        Ok(self.data[slot])
    }
}

impl<T: Copy> WriteCursor<T> for ArraySetCursor<'_, T> {
    #[inline]
    fn next_only(&mut self) -> Result<()> {
        self.advance().map(|_| ())
    }

    #[inline]
    fn set(&mut self, value: T) -> Result<()> {
        let slot = self.last.ok_or(VectorError::InvalidState(NOT_STARTED))?;
        self.data[slot] = value;
        Ok(())
    }

    #[inline]
    fn next_and_set(&mut self, value: T) -> Result<()> {
        let slot = self.advance()?;
        self.data[slot] = value;
        Ok(())
    }
}

/// Cursor over an index selection of an array.
#[derive(Debug, Clone)]
pub struct IndexCursor<'a, T> {
    data: &'a [T],
    layout: Layout,
    indices: &'a [usize],
    pos: usize,
}

impl<'a, T> IndexCursor<'a, T> {
    pub(crate) fn new(data: &'a [T], layout: Layout, indices: &'a [usize]) -> Self {
        IndexCursor {
            data,
            layout,
            indices,
            pos: 0,
        }
    }
}

impl<T: Copy> ReadCursor<T> for IndexCursor<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.pos < self.indices.len()
    }

    fn next(&mut self) -> Result<T> {
        let index = *self
            .indices
            .get(self.pos)
            .ok_or(VectorError::InvalidState(EXHAUSTED))?;
        self.pos += 1;
        Ok(self.data[self.layout.physical(index)])
    }
}

/// Write cursor over an index selection of an array.
#[derive(Debug)]
pub struct IndexSetCursor<'a, T> {
    data: &'a mut [T],
    layout: Layout,
    indices: &'a [usize],
    pos: usize,
    last: Option<usize>,
}

impl<'a, T> IndexSetCursor<'a, T> {
    pub(crate) fn new(data: &'a mut [T], layout: Layout, indices: &'a [usize]) -> Self {
        IndexSetCursor {
            data,
            layout,
            indices,
            pos: 0,
            last: None,
        }
    }

    fn advance(&mut self) -> Result<usize> {
        let index = *self
            .indices
            .get(self.pos)
            .ok_or(VectorError::InvalidState(EXHAUSTED))?;
        self.pos += 1;
        let slot = self.layout.physical(index);
        self.last = Some(slot);
        Ok(slot)
    }
}

impl<T: Copy> ReadCursor<T> for IndexSetCursor<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.pos < self.indices.len()
    }

    fn next(&mut self) -> Result<T> {
        let slot = self.advance()?;
        Ok(self.data[slot])
    }
}

impl<T: Copy> WriteCursor<T> for IndexSetCursor<'_, T> {
    fn next_only(&mut self) -> Result<()> {
        self.advance().map(|_| ())
    }

    fn set(&mut self, value: T) -> Result<()> {
        let slot = self.last.ok_or(VectorError::InvalidState(NOT_STARTED))?;
        self.data[slot] = value;
        Ok(())
    }
}

/// Cursor over the real and imaginary planes of a complex vector.
#[derive(Debug, Clone)]
pub struct ComplexArrayCursor<'a> {
    real: &'a [f64],
    imag: &'a [f64],
    layout: Layout,
    pos: usize,
}

impl<'a> ComplexArrayCursor<'a> {
    pub(crate) fn new(real: &'a [f64], imag: &'a [f64], layout: Layout) -> Self {
        ComplexArrayCursor {
            real,
            imag,
            layout,
            pos: 0,
        }
    }
}

impl ComplexReadCursor for ComplexArrayCursor<'_> {
    #[inline]
    fn has_next(&self) -> bool {
        self.pos < self.layout.size()
    }

    #[inline]
    fn next_parts(&mut self) -> Result<(f64, f64)> {
        if !self.has_next() {
            return Err(VectorError::InvalidState(EXHAUSTED));
        }
        let slot = self.layout.physical(self.pos);
        self.pos += 1;
        Ok((self.real[slot], self.imag[slot]))
    }
}

/// Write cursor over the real and imaginary planes of a complex vector.
#[derive(Debug)]
pub struct ComplexArraySetCursor<'a> {
    real: &'a mut [f64],
    imag: &'a mut [f64],
    layout: Layout,
    pos: usize,
    last: Option<usize>,
}

impl<'a> ComplexArraySetCursor<'a> {
    pub(crate) fn new(real: &'a mut [f64], imag: &'a mut [f64], layout: Layout) -> Self {
        ComplexArraySetCursor {
            real,
            imag,
            layout,
            pos: 0,
            last: None,
        }
    }

    #[inline]
    fn advance(&mut self) -> Result<usize> {
        if self.pos >= self.layout.size() {
            return Err(VectorError::InvalidState(EXHAUSTED));
        }
        let slot = self.layout.physical(self.pos);
        self.pos += 1;
        self.last = Some(slot);
        Ok(slot)
    }
}

impl ComplexReadCursor for ComplexArraySetCursor<'_> {
    #[inline]
    fn has_next(&self) -> bool {
        self.pos < self.layout.size()
    }

    #[inline]
    fn next_parts(&mut self) -> Result<(f64, f64)> {
        let slot = self.advance()?;
        Ok((self.real[slot], self.imag[slot]))
    }
}

impl ComplexWriteCursor for ComplexArraySetCursor<'_> {
    #[inline]
    fn next_only(&mut self) -> Result<()> {
        self.advance().map(|_| ())
    }

    #[inline]
    fn set_parts(&mut self, re: f64, im: f64) -> Result<()> {
        let slot = self.last.ok_or(VectorError::InvalidState(NOT_STARTED))?;
        self.real[slot] = re;
        self.imag[slot] = im;
        Ok(())
    }
}
