//! Complex vectors stored as two `f64` planes.
//!
//! Both planes share one [`Layout`], so shifted and reversed views work
//! exactly as they do for [`ArrayVector`]. Elements cross the public API as
//! [`Complex64`]; kernels work on `(re, im)` pairs and never build one.

use std::fmt;

use num::complex::Complex64;

use super::cursor::{ComplexArrayCursor, ComplexArraySetCursor};
use super::dense::{ArrayVector, Vector};
use super::layout::Layout;
use super::traits::{ComplexGet, ComplexSet, ComplexStrided, ComplexStridedMut};
use crate::error::{argument_error, bi_range_check, range_check, Result};

#[derive(Clone)]
pub struct ComplexArrayVector<S = Vec<f64>> {
    pub(crate) real: S,
    pub(crate) imag: S,
    pub(crate) layout: Layout,
}

pub type ComplexVector = ComplexArrayVector;
pub type ComplexVectorView<'a> = ComplexArrayVector<&'a [f64]>;
pub type ComplexVectorViewMut<'a> = ComplexArrayVector<&'a mut [f64]>;

impl ComplexVector {
    pub fn zeros(size: usize) -> Self {
        ComplexVector::zeros_directed(size, false)
    }

    pub(crate) fn zeros_directed(size: usize, reverse: bool) -> Self {
        ComplexArrayVector {
            real: vec![0.0; size],
            imag: vec![0.0; size],
            layout: Layout::new(0, size, reverse),
        }
    }

    /// Takes ownership of two equally long planes.
    pub fn from_parts(real: Vec<f64>, imag: Vec<f64>) -> Result<Self> {
        if real.len() != imag.len() {
            return Err(argument_error(format!(
                "real plane has {} elements but imaginary plane has {}",
                real.len(),
                imag.len()
            )));
        }
        let layout = Layout::forward(real.len());
        Ok(ComplexArrayVector { real, imag, layout })
    }

    pub fn from_complex(values: &[Complex64]) -> Self {
        let real = values.iter().map(|z| z.re).collect::<Vec<_>>();
        let imag = values.iter().map(|z| z.im).collect();
        let layout = Layout::forward(real.len());
        ComplexArrayVector { real, imag, layout }
    }

    /// A complex vector with a zero imaginary plane.
    pub fn from_real<S: AsRef<[f64]>>(real: &ArrayVector<f64, S>) -> Self {
        let real = real.to_vec();
        let imag = vec![0.0; real.len()];
        let layout = Layout::forward(real.len());
        ComplexArrayVector { real, imag, layout }
    }

    pub fn from_fn<F: FnMut(usize) -> Complex64>(size: usize, f: F) -> Self {
        let values = (0..size).map(f).collect::<Vec<_>>();
        ComplexVector::from_complex(&values)
    }
}

impl<S: AsRef<[f64]>> ComplexArrayVector<S> {
    pub fn with_layout(real: S, imag: S, layout: Layout) -> Result<Self> {
        let (re_len, im_len) = (real.as_ref().len(), imag.as_ref().len());
        if re_len != im_len || !layout.fits(re_len) {
            return Err(argument_error(format!(
                "layout [{}, {}) does not fit planes of length {} and {}",
                layout.shift(),
                layout.end(),
                re_len,
                im_len
            )));
        }
        Ok(ComplexArrayVector { real, imag, layout })
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

    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.layout.is_reverse()
    }

    #[inline]
    pub fn get_parts(&self, index: usize) -> Result<(f64, f64)> {
        range_check(index, self.size())?;
        let slot = self.layout.physical(index);
        Ok((self.real.as_ref()[slot], self.imag.as_ref()[slot]))
    }

    pub fn get(&self, index: usize) -> Result<Complex64> {
        let (re, im) = self.get_parts(index)?;
        Ok(Complex64::new(re, im))
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Complex64> + ExactSizeIterator + '_ {
        let (real, imag) = (self.real.as_ref(), self.imag.as_ref());
        let layout = self.layout;
        (0..layout.size()).map(move |i| {
            let slot = layout.physical(i);
            Complex64::new(real[slot], imag[slot])
        })
    }

    pub fn to_vec(&self) -> Vec<Complex64> {
        self.iter().collect()
    }

    pub fn copy(&self) -> ComplexVector {
        let (real, imag): (Vec<f64>, Vec<f64>) = self.iter().map(|z| (z.re, z.im)).unzip();
        let layout = Layout::forward(real.len());
        ComplexArrayVector { real, imag, layout }
    }

    pub fn view(&self) -> ComplexVectorView<'_> {
        ComplexArrayVector {
            real: self.real.as_ref(),
            imag: self.imag.as_ref(),
            layout: self.layout,
        }
    }

    pub fn sub_vec(&self, from: usize, to: usize) -> Result<ComplexVectorView<'_>> {
        let layout = self.layout.sub(from, to)?;
        Ok(ComplexArrayVector {
            real: self.real.as_ref(),
            imag: self.imag.as_ref(),
            layout,
        })
    }

    pub fn ref_reverse(&self) -> ComplexVectorView<'_> {
        ComplexArrayVector {
            real: self.real.as_ref(),
            imag: self.imag.as_ref(),
            layout: self.layout.reversed(),
        }
    }

    /// Zero-copy view of the real plane.
    pub fn real_view(&self) -> ArrayVector<f64, &[f64]> {
        // the layout was validated against this plane on construction
        ArrayVector::with_layout_unchecked(self.real.as_ref(), self.layout)
    }

    /// Zero-copy view of the imaginary plane.
    pub fn imag_view(&self) -> ArrayVector<f64, &[f64]> {
        ArrayVector::with_layout_unchecked(self.imag.as_ref(), self.layout)
    }

    /// A copy of the real parts.
    pub fn real(&self) -> Vector {
        self.real_view().copy()
    }

    /// A copy of the imaginary parts.
    pub fn imag(&self) -> Vector {
        self.imag_view().copy()
    }
}

impl<S: AsRef<[f64]> + AsMut<[f64]>> ComplexArrayVector<S> {
    pub fn set_parts(&mut self, index: usize, re: f64, im: f64) -> Result<()> {
        range_check(index, self.size())?;
        let slot = self.layout.physical(index);
        self.real.as_mut()[slot] = re;
        self.imag.as_mut()[slot] = im;
        Ok(())
    }

    pub fn set(&mut self, index: usize, value: Complex64) -> Result<()> {
        self.set_parts(index, value.re, value.im)
    }

    pub fn get_and_set(&mut self, index: usize, value: Complex64) -> Result<Complex64> {
        let old = self.get(index)?;
        self.set_parts(index, value.re, value.im)?;
        Ok(old)
    }

    pub fn update<F: FnOnce(Complex64) -> Complex64>(&mut self, index: usize, f: F) -> Result<()> {
        let value = f(self.get(index)?);
        self.set_parts(index, value.re, value.im)
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        bi_range_check(i, j, self.size())?;
        let (a, b) = (self.layout.physical(i), self.layout.physical(j));
        self.real.as_mut().swap(a, b);
        self.imag.as_mut().swap(a, b);
        Ok(())
    }

    pub fn view_mut(&mut self) -> ComplexVectorViewMut<'_> {
        ComplexArrayVector {
            real: self.real.as_mut(),
            imag: self.imag.as_mut(),
            layout: self.layout,
        }
    }

    pub fn sub_vec_mut(&mut self, from: usize, to: usize) -> Result<ComplexVectorViewMut<'_>> {
        let layout = self.layout.sub(from, to)?;
        Ok(ComplexArrayVector {
            real: self.real.as_mut(),
            imag: self.imag.as_mut(),
            layout,
        })
    }

    pub fn ref_reverse_mut(&mut self) -> ComplexVectorViewMut<'_> {
        ComplexArrayVector {
            real: self.real.as_mut(),
            imag: self.imag.as_mut(),
            layout: self.layout.reversed(),
        }
    }

    /// Write views of both planes at once.
    pub fn planes_mut(&mut self) -> (ArrayVector<f64, &mut [f64]>, ArrayVector<f64, &mut [f64]>) {
        let layout = self.layout;
        (
            ArrayVector::with_layout_unchecked(self.real.as_mut(), layout),
            ArrayVector::with_layout_unchecked(self.imag.as_mut(), layout),
        )
    }
}

impl Copy for ComplexVectorView<'_> {}

impl<'a> ComplexVectorView<'a> {
    pub fn into_sub_vec(self, from: usize, to: usize) -> Result<ComplexVectorView<'a>> {
        let layout = self.layout.sub(from, to)?;
        Ok(ComplexArrayVector { layout, ..self })
    }

    pub fn into_reverse(self) -> ComplexVectorView<'a> {
        let layout = self.layout.reversed();
        ComplexArrayVector { layout, ..self }
    }
}

impl<S: AsRef<[f64]>> ComplexGet for ComplexArrayVector<S> {
    type Cursor<'a>
        = ComplexArrayCursor<'a>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.layout.size()
    }

    #[inline]
    fn get_parts(&self, index: usize) -> Result<(f64, f64)> {
        ComplexArrayVector::get_parts(self, index)
    }

    fn cursor(&self) -> ComplexArrayCursor<'_> {
        ComplexArrayCursor::new(self.real.as_ref(), self.imag.as_ref(), self.layout)
    }

    #[inline]
    fn same_order(&self) -> Option<ComplexStrided<'_>> {
        Some(ComplexStrided::new(self.real.as_ref(), self.imag.as_ref(), self.layout))
    }
}

impl<S: AsRef<[f64]> + AsMut<[f64]>> ComplexSet for ComplexArrayVector<S> {
    type SetCursor<'a>
        = ComplexArraySetCursor<'a>
    where
        Self: 'a;

    #[inline]
    fn set_parts(&mut self, index: usize, re: f64, im: f64) -> Result<()> {
        ComplexArrayVector::set_parts(self, index, re, im)
    }

    fn set_cursor(&mut self) -> ComplexArraySetCursor<'_> {
        let layout = self.layout;
        ComplexArraySetCursor::new(self.real.as_mut(), self.imag.as_mut(), layout)
    }

    #[inline]
    fn same_order_mut(&mut self) -> Option<ComplexStridedMut<'_>> {
        let layout = self.layout;
        Some(ComplexStridedMut::new(self.real.as_mut(), self.imag.as_mut(), layout))
    }
}

impl<S: AsRef<[f64]>, S2: AsRef<[f64]>> PartialEq<ComplexArrayVector<S2>> for ComplexArrayVector<S> {
    fn eq(&self, other: &ComplexArrayVector<S2>) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<S: AsRef<[f64]>> fmt::Debug for ComplexArrayVector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<Vec<Complex64>> for ComplexVector {
    fn from(values: Vec<Complex64>) -> Self {
        ComplexVector::from_complex(&values)
    }
}
