//! Element kinds storable in an [`ArrayVector`](super::ArrayVector).
//!
//! ```text
//! Element            (f64, i32, i64, bool)
//!   └── Integer      (i32, i64)
//! ```
//!
//! Complex values are not an element kind: a complex vector keeps two `f64`
//! planes, see [`ComplexVector`](super::ComplexVector).

use std::fmt;

/// Base trait for everything a dense vector can hold. `Default` is the value
/// a freshly allocated vector is filled with.
pub trait Element: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {}

impl Element for f64 {}
impl Element for i32 {}
impl Element for i64 {}
impl Element for bool {}

/// Fixed-width integers with wrapping arithmetic.
pub trait Integer: Element + Ord + fmt::Display + num::Zero + num::One {
    /// The widened accumulator used by `exsum`.
    type Wide: Copy + Default + std::ops::Add<Output = Self::Wide> + fmt::Debug;

    fn widen(self) -> Self::Wide;
    fn to_f64(self) -> f64;
}

impl Integer for i32 {
    type Wide = i64;

    #[inline(always)]
    fn widen(self) -> i64 {
        self as i64
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Integer for i64 {
    type Wide = i128;

    #[inline(always)]
    fn widen(self) -> i128 {
        self as i128
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}
