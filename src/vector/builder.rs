//! Growable staging buffer frozen into a fixed-size vector.

use super::dense::ArrayVector;
use super::element::Element;
use super::traits::VectorGet;
use crate::error::Result;
use crate::ops::dispatch;

/// Append-only builder.
///
/// [`build`](Self::build) consumes the builder, so it cannot be appended to
/// after the vector is produced.
///
/// ```
/// use densevec::vector::VectorBuilder;
///
/// let mut builder = VectorBuilder::with_capacity(3);
/// builder.append(1.0);
/// builder.extend([2.0, 3.0]);
/// let v = builder.build();
/// assert_eq!(v.to_vec(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VectorBuilder<T> {
    data: Vec<T>,
}

impl<T: Element> VectorBuilder<T> {
    pub fn new() -> Self {
        VectorBuilder { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        VectorBuilder {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, value: T) -> &mut Self {
        self.data.push(value);
        self
    }

    /// Appends every element of `src` in logical order.
    pub fn append_all<V: VectorGet<Elem = T> + ?Sized>(&mut self, src: &V) -> Result<&mut Self> {
        self.data.reserve(src.size());
        dispatch::for_each(src, |v| self.data.push(v))?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Freezes the staged values, dropping spare capacity.
    pub fn build(mut self) -> ArrayVector<T> {
        self.data.shrink_to_fit();
        ArrayVector::from_vec(self.data)
    }
}

impl<T: Element> Extend<T> for VectorBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}
