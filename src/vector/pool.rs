//! Size-keyed buffer pool.
//!
//! Buffers are checked out and returned explicitly; nothing is reclaimed
//! behind the caller's back. A returned buffer keeps its contents until the
//! next checkout, which hands it out as-is, so callers that need zeros must
//! fill it themselves.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::dense::ArrayVector;
use super::element::Element;
use super::traits::{VectorGet, VectorSet};
use crate::error::Result;
use crate::ops::dispatch;

type Shelves<T> = HashMap<usize, Vec<Vec<T>>>;

/// Thread-safe cache of backing arrays, keyed by length.
#[derive(Debug, Default)]
pub struct VectorPool<T> {
    shelves: Mutex<Shelves<T>>,
}

impl<T: Element> VectorPool<T> {
    pub fn new() -> Self {
        VectorPool {
            shelves: Mutex::new(HashMap::new()),
        }
    }

    // A panic while holding the lock cannot leave a shelf half-updated, so
    // poisoning is ignored.
    fn shelves(&self) -> MutexGuard<'_, Shelves<T>> {
        self.shelves.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A vector of length `size`, reused if one is cached, zeroed otherwise.
    pub fn checkout(&self, size: usize) -> ArrayVector<T> {
        match self.shelves().get_mut(&size).and_then(Vec::pop) {
            Some(data) => ArrayVector::from_vec(data),
            None => {
                debug!(size, "pool miss");
                ArrayVector::from_vec(vec![T::default(); size])
            }
        }
    }

    /// Returns a vector's backing array to the pool.
    pub fn recycle(&self, vector: ArrayVector<T>) {
        let data = vector.into_vec();
        self.shelves().entry(data.len()).or_default().push(data);
    }

    /// Checks out a buffer sized like `src`, copying `src` in unless
    /// `abort` is set.
    pub fn to_buf<V: VectorGet<Elem = T> + ?Sized>(&self, src: &V, abort: bool) -> Result<ArrayVector<T>> {
        let mut buf = self.checkout(src.size());
        if !abort {
            dispatch::fill_from(&mut buf, src)?;
        }
        Ok(buf)
    }

    /// Copies `buf` back into `dest` unless `abort` is set, then recycles
    /// `buf`. The buffer is recycled even when the copy fails.
    pub fn release_buf<D: VectorSet<Elem = T> + ?Sized>(
        &self,
        buf: ArrayVector<T>,
        dest: &mut D,
        abort: bool,
    ) -> Result<()> {
        let copied = if abort { Ok(()) } else { dispatch::fill_from(dest, &buf) };
        self.recycle(buf);
        copied
    }

    /// Drops every cached buffer.
    pub fn clear(&self) {
        self.shelves().clear();
    }

    /// Number of cached buffers of length `size`.
    pub fn cached(&self, size: usize) -> usize {
        self.shelves().get(&size).map_or(0, Vec::len)
    }
}
