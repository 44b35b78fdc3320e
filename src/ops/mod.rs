//! Operations on dense vectors.
//!
//! [`generic`] and [`fast`] are the two engines, [`dispatch`] chooses between
//! them. The remaining modules only add methods to
//! [`ArrayVector`](crate::vector::ArrayVector) and
//! [`ComplexArrayVector`](crate::vector::ComplexArrayVector), one module per
//! element family.

/// Checks operand lengths, then rejects a vector divisor with a zero among
/// the elements the operation will divide by.
macro_rules! divisor_check {
    (@scan rhs, $lhs:expr, $rhs:expr, $len:expr) => {
        ensure_nonzero($rhs, $len)?
    };
    (@scan lhs, $lhs:expr, $rhs:expr, $len:expr) => {
        ensure_nonzero($lhs, $len)?
    };
    ($guard:ident, $op:expr, $lhs:expr, $rhs:expr $(, $dest:expr)?) => {{
        dispatch::check_dims($op, $lhs.size(), $rhs.size())?;
        $(dispatch::check_dims($op, $lhs.size(), $dest.size())?;)?
        let len = $lhs.size().min($rhs.size());
        divisor_check!(@scan $guard, $lhs, $rhs, len)
    }};
}

/// Rejects a zero scalar divisor, or a vector divisor containing a zero.
macro_rules! divisor_check_scalar {
    (rhs, $lhs:expr, $x:expr) => {
        if num::Zero::is_zero(&$x) {
            return Err(crate::error::VectorError::DivisionByZero);
        }
    };
    (lhs, $lhs:expr, $x:expr) => {
        ensure_nonzero($lhs, $lhs.size())?
    };
}

/// Generates the five forms of each binary arithmetic operation:
/// vector rhs into a fresh result, into a caller destination and in place,
/// plus scalar rhs into a fresh result and in place.
///
/// An optional `[rhs]`/`[lhs]` marker names the divisor operand, which is
/// scanned for zeros before anything is written.
macro_rules! arith_ops {
    ($t:ty; $(
        $name:ident, $into:ident, $in_place:ident, $scalar:ident, $scalar_in_place:ident
        $([$guard:ident])? => |$a:ident, $b:ident| $body:expr;
    )*) => {
        impl<S: AsRef<[$t]>> ArrayVector<$t, S> {
            $(
                pub fn $name<R>(&self, rhs: &R) -> Result<ArrayVector<$t>>
                where
                    R: VectorGet<Elem = $t> + ?Sized,
                {
                    $(divisor_check!($guard, stringify!($name), self, rhs);)?
                    let mut out: ArrayVector<$t> = dispatch::zeros_like(self);
                    dispatch::ebe_into(stringify!($name), self, rhs, &mut out, |$a: $t, $b: $t| $body)?;
                    Ok(out)
                }

                pub fn $into<R, D>(&self, rhs: &R, dest: &mut D) -> Result<()>
                where
                    R: VectorGet<Elem = $t> + ?Sized,
                    D: VectorSet<Elem = $t> + ?Sized,
                {
                    $(divisor_check!($guard, stringify!($name), self, rhs, dest);)?
                    dispatch::ebe_into(stringify!($name), self, rhs, dest, |$a: $t, $b: $t| $body)
                }

                pub fn $scalar(&self, rhs: $t) -> Result<ArrayVector<$t>> {
                    $(divisor_check_scalar!($guard, self, rhs);)?
                    let mut out: ArrayVector<$t> = dispatch::zeros_like(self);
                    dispatch::map_into(stringify!($scalar), self, &mut out, |$a: $t| {
                        let $b = rhs;
                        $body
                    })?;
                    Ok(out)
                }
            )*
        }

        impl<S: AsRef<[$t]> + AsMut<[$t]>> ArrayVector<$t, S> {
            $(
                pub fn $in_place<R>(&mut self, rhs: &R) -> Result<()>
                where
                    R: VectorGet<Elem = $t> + ?Sized,
                {
                    $(divisor_check!($guard, stringify!($in_place), &*self, rhs);)?
                    dispatch::ebe_in_place(stringify!($in_place), self, rhs, |$a: $t, $b: $t| $body)
                }

                pub fn $scalar_in_place(&mut self, rhs: $t) -> Result<()> {
                    $(divisor_check_scalar!($guard, &*self, rhs);)?
                    dispatch::map_in_place(stringify!($scalar_in_place), self, |$a: $t| {
                        let $b = rhs;
                        $body
                    })
                }
            )*
        }
    };
}

/// Generates the vector and scalar forms of an ordering comparison.
macro_rules! compare_ops {
    ($($name:ident, $scalar:ident => $op:tt;)*) => {
        impl<T: Element + PartialOrd, S: AsRef<[T]>> ArrayVector<T, S> {
            $(
                pub fn $name<R>(&self, rhs: &R) -> Result<LogicalVector>
                where
                    R: VectorGet<Elem = T> + ?Sized,
                {
                    self.compare(rhs, |a, b| a $op b)
                }

                pub fn $scalar(&self, rhs: T) -> Result<LogicalVector> {
                    self.check(|a| a $op rhs)
                }
            )*
        }
    };
}

mod common;
pub mod complex;
pub mod dispatch;
pub mod fast;
pub mod generic;
mod integer;
mod logical;
mod real;
pub mod sort;

pub use sort::{heap_sort, CoSort, IndexSortable, SortKey};
