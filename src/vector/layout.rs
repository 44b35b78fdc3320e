//! The affine index map shared by every array-backed vector.
//!
//! A [`Layout`] maps a logical index `i` in `[0, size)` to a physical slot of
//! the backing array:
//!
//! * forward: `shift + i`
//! * reversed: `shift + size - 1 - i`
//!
//! Views never wrap other views. Slicing or reversing recomputes a new
//! `Layout` from the old one, so a reversed window of a shifted window is
//! still a single `(shift, size, reverse)` triple.

use crate::error::{sub_range_check, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    shift: usize,
    size: usize,
    reverse: bool,
}

impl Layout {
    #[inline]
    pub const fn new(shift: usize, size: usize, reverse: bool) -> Self {
        Layout {
            shift,
            size,
            reverse,
        }
    }

    /// Zero shift, forward order.
    #[inline]
    pub const fn forward(size: usize) -> Self {
        Layout::new(0, size, false)
    }

    #[inline]
    pub const fn shift(&self) -> usize {
        self.shift
    }

    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub const fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// One past the highest physical slot addressed.
    #[inline]
    pub const fn end(&self) -> usize {
        self.shift + self.size
    }

    /// Whether the layout stays inside a backing array of length `len`.
    #[inline]
    pub const fn fits(&self, len: usize) -> bool {
        self.shift <= len && self.size <= len - self.shift
    }

    /// Physical slot of logical `index`. The caller guarantees `index < size`.
    #[inline(always)]
    pub fn physical(&self, index: usize) -> usize {
        debug_assert!(index < self.size);
        if self.reverse {
            self.shift + self.size - 1 - index
        } else {
            self.shift + index
        }
    }

    /// The layout of logical window `[from, to)`.
    pub fn sub(&self, from: usize, to: usize) -> Result<Layout> {
        sub_range_check(from, to, self.size)?;
        let shift = if self.reverse {
            self.shift + self.size - to
        } else {
            self.shift + from
        };
        Ok(Layout::new(shift, to - from, self.reverse))
    }

    /// The same physical span walked the other way.
    #[inline]
    pub const fn reversed(&self) -> Layout {
        Layout::new(self.shift, self.size, !self.reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_physical() {
        let layout = Layout::new(2, 3, false);
        assert_eq!(
            (0..3).map(|i| layout.physical(i)).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
        assert_eq!(layout.end(), 5);
    }

    #[test]
    fn test_reverse_physical() {
        let layout = Layout::new(2, 3, true);
        assert_eq!(
            (0..3).map(|i| layout.physical(i)).collect::<Vec<_>>(),
            vec![4, 3, 2]
        );
    }

    #[test]
    fn test_sub_of_reverse_stays_reverse() {
        // physical 0..6 reversed: logical [5,4,3,2,1,0]
        let layout = Layout::new(0, 6, true);
        let sub = layout.sub(1, 4).unwrap();
        assert!(sub.is_reverse());
        assert_eq!(
            (0..3).map(|i| sub.physical(i)).collect::<Vec<_>>(),
            vec![4, 3, 2]
        );
    }

    #[test]
    fn test_double_reverse_is_identity() {
        let layout = Layout::new(3, 4, false);
        assert_eq!(layout.reversed().reversed(), layout);
    }

    #[test]
    fn test_sub_out_of_range() {
        let layout = Layout::forward(4);
        assert!(layout.sub(2, 5).is_err());
        assert!(layout.sub(3, 2).is_err());
        assert_eq!(layout.sub(4, 4).unwrap().size(), 0);
    }

    #[test]
    fn test_fits() {
        assert!(Layout::new(2, 3, false).fits(5));
        assert!(!Layout::new(3, 3, false).fits(5));
        assert!(!Layout::new(9, 0, false).fits(5));
    }
}
