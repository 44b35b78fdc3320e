//! Sorting decoupled from storage.
//!
//! [`heap_sort`] only needs an [`IndexSortable`]: a length, a comparison of
//! two positions and a swap of two positions. [`CoSort`] adapts a vector as
//! the key sequence and forwards every swap to a hook, so a second sequence
//! can be permuted identically.
//!
//! Array-backed vectors run the same heap sort over their raw window, with
//! logical positions mapped through the layout. Both paths therefore perform
//! the same comparisons and swaps, and agree even when the comparator has
//! ties.

use std::cmp::Ordering;

use rand::Rng;
use tracing::trace;

use crate::error::Result;
use crate::vector::dense::ArrayVector;
use crate::vector::element::Element;
use crate::vector::traits::VectorSet;

/// Below this length the heap sort falls back to insertion sort.
const INSERTION_SORT_THRESHOLD: usize = 16;

/// A sequence that can be sorted through positions alone.
pub trait IndexSortable {
    fn len(&self) -> usize;
    fn compare(&mut self, i: usize, j: usize) -> Result<Ordering>;
    fn swap(&mut self, i: usize, j: usize) -> Result<()>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Elements with a total order used by [`ArrayVector::sort`].
pub trait SortKey: Element {
    fn sort_cmp(&self, other: &Self) -> Ordering;
}

impl SortKey for f64 {
    /// Positive NaNs sort after every number, negative ones before.
    #[inline]
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

macro_rules! impl_sort_key_ord {
    ($($t:ty),*) => {$(
        impl SortKey for $t {
            #[inline]
            fn sort_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

impl_sort_key_ord!(i32, i64, bool);

/// In-place heap sort, ascending under `compare`.
pub fn heap_sort<S: IndexSortable + ?Sized>(s: &mut S) -> Result<()> {
    let n = s.len();
    if n < INSERTION_SORT_THRESHOLD {
        return insertion_sort(s, n);
    }
    for root in (0..n / 2).rev() {
        sift_down(s, root, n)?;
    }
    for end in (1..n).rev() {
        s.swap(0, end)?;
        sift_down(s, 0, end)?;
    }
    Ok(())
}

fn sift_down<S: IndexSortable + ?Sized>(s: &mut S, mut root: usize, end: usize) -> Result<()> {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return Ok(());
        }
        if child + 1 < end && s.compare(child, child + 1)? == Ordering::Less {
            child += 1;
        }
        if s.compare(root, child)? != Ordering::Less {
            return Ok(());
        }
        s.swap(root, child)?;
        root = child;
    }
}

fn insertion_sort<S: IndexSortable + ?Sized>(s: &mut S, n: usize) -> Result<()> {
    for i in 1..n {
        let mut j = i;
        while j > 0 && s.compare(j - 1, j)? == Ordering::Greater {
            s.swap(j - 1, j)?;
            j -= 1;
        }
    }
    Ok(())
}

/// The raw window of a same-order vector, addressed by logical position.
struct WindowSorter<'a, T, C> {
    window: &'a mut [T],
    reverse: bool,
    cmp: C,
}

impl<T, C> WindowSorter<'_, T, C> {
    #[inline]
    fn slot(&self, i: usize) -> usize {
        if self.reverse {
            self.window.len() - 1 - i
        } else {
            i
        }
    }
}

impl<T: Copy, C: FnMut(T, T) -> Ordering> IndexSortable for WindowSorter<'_, T, C> {
    fn len(&self) -> usize {
        self.window.len()
    }

    fn compare(&mut self, i: usize, j: usize) -> Result<Ordering> {
        let (a, b) = (self.window[self.slot(i)], self.window[self.slot(j)]);
        Ok((self.cmp)(a, b))
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let (a, b) = (self.slot(i), self.slot(j));
        self.window.swap(a, b);
        Ok(())
    }
}

/// A vector sorted through its own accessors.
struct VectorSorter<'a, V: ?Sized, C> {
    vector: &'a mut V,
    cmp: C,
}

impl<V, C> IndexSortable for VectorSorter<'_, V, C>
where
    V: VectorSet + ?Sized,
    C: FnMut(V::Elem, V::Elem) -> Ordering,
{
    fn len(&self) -> usize {
        self.vector.size()
    }

    fn compare(&mut self, i: usize, j: usize) -> Result<Ordering> {
        Ok((self.cmp)(self.vector.get(i)?, self.vector.get(j)?))
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.vector.swap(i, j)
    }
}

/// Key vector plus a swap hook: every swap of the keys is replayed through
/// `hook(i, j)`.
pub struct CoSort<'a, V: ?Sized, C, H> {
    keys: &'a mut V,
    cmp: C,
    hook: H,
}

impl<'a, V, C, H> CoSort<'a, V, C, H>
where
    V: VectorSet + ?Sized,
    C: FnMut(V::Elem, V::Elem) -> Ordering,
    H: FnMut(usize, usize),
{
    pub fn new(keys: &'a mut V, cmp: C, hook: H) -> Self {
        CoSort { keys, cmp, hook }
    }
}

impl<V, C, H> IndexSortable for CoSort<'_, V, C, H>
where
    V: VectorSet + ?Sized,
    C: FnMut(V::Elem, V::Elem) -> Ordering,
    H: FnMut(usize, usize),
{
    fn len(&self) -> usize {
        self.keys.size()
    }

    fn compare(&mut self, i: usize, j: usize) -> Result<Ordering> {
        Ok((self.cmp)(self.keys.get(i)?, self.keys.get(j)?))
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.keys.swap(i, j)?;
        (self.hook)(i, j);
        Ok(())
    }
}

/// Sorts any vector ascending under `cmp`.
pub fn sort_by<V, C>(v: &mut V, cmp: C) -> Result<()>
where
    V: VectorSet + ?Sized,
    C: FnMut(V::Elem, V::Elem) -> Ordering,
{
    if let Some(s) = v.same_order_mut() {
        trace!(op = "sort", len = s.size, "fast path");
        let reverse = s.reverse;
        return heap_sort(&mut WindowSorter {
            window: s.into_window(),
            reverse,
            cmp,
        });
    }
    trace!(op = "sort", "generic path");
    heap_sort(&mut VectorSorter { vector: v, cmp })
}

/// Sorts `keys` and replays each swap through `hook`.
pub fn bi_sort_by<V, C, H>(keys: &mut V, cmp: C, hook: H) -> Result<()>
where
    V: VectorSet + ?Sized,
    C: FnMut(V::Elem, V::Elem) -> Ordering,
    H: FnMut(usize, usize),
{
    heap_sort(&mut CoSort::new(keys, cmp, hook))
}

/// Uniform random permutation.
pub fn shuffle<V, R>(v: &mut V, rng: &mut R) -> Result<()>
where
    V: VectorSet + ?Sized,
    R: Rng + ?Sized,
{
    if let Some(s) = v.same_order_mut() {
        trace!(op = "shuffle", len = s.size, "fast path");
        let reverse = s.reverse;
        let mut window = WindowSorter {
            window: s.into_window(),
            reverse,
            cmp: |_: V::Elem, _: V::Elem| Ordering::Equal,
        };
        return fisher_yates(&mut window, rng);
    }
    trace!(op = "shuffle", "generic path");
    fisher_yates(
        &mut VectorSorter {
            vector: v,
            cmp: |_: V::Elem, _: V::Elem| Ordering::Equal,
        },
        rng,
    )
}

fn fisher_yates<S, R>(s: &mut S, rng: &mut R) -> Result<()>
where
    S: IndexSortable + ?Sized,
    R: Rng + ?Sized,
{
    for i in (1..s.len()).rev() {
        let j = rng.random_range(0..=i);
        s.swap(i, j)?;
    }
    Ok(())
}

impl<T: Element, S: AsRef<[T]> + AsMut<[T]>> ArrayVector<T, S> {
    /// Ascending sort under [`SortKey`].
    pub fn sort(&mut self) -> Result<()>
    where
        T: SortKey,
    {
        sort_by(self, |a: T, b: T| a.sort_cmp(&b))
    }

    pub fn sort_by<C: FnMut(T, T) -> Ordering>(&mut self, cmp: C) -> Result<()> {
        sort_by(self, cmp)
    }

    /// Sorts ascending and calls `swapper(i, j)` for every swap performed,
    /// so a companion sequence can follow the same permutation.
    pub fn bi_sort<H: FnMut(usize, usize)>(&mut self, swapper: H) -> Result<()>
    where
        T: SortKey,
    {
        bi_sort_by(self, |a: T, b: T| a.sort_cmp(&b), swapper)
    }

    pub fn bi_sort_by<C, H>(&mut self, cmp: C, swapper: H) -> Result<()>
    where
        C: FnMut(T, T) -> Ordering,
        H: FnMut(usize, usize),
    {
        bi_sort_by(self, cmp, swapper)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        shuffle(self, rng)
    }
}
