//! Arithmetic, reductions and scans for `i32` and `i64` vectors.
//!
//! Arithmetic wraps on overflow. Division and modulo check lengths, then scan
//! the divided elements of the divisor and fail with
//! [`VectorError::DivisionByZero`] before writing anything.

use super::dispatch;
use crate::error::{Result, VectorError};
use crate::vector::dense::{ArrayVector, Vector};
use crate::vector::element::Integer;
use crate::vector::traits::{VectorGet, VectorSet};

/// Fails if any of the first `len` elements of `divisor` is zero.
fn ensure_nonzero<V>(divisor: &V, len: usize) -> Result<()>
where
    V: VectorGet + ?Sized,
    V::Elem: Integer,
{
    let mut index = 0;
    let found = dispatch::any(divisor, |v| {
        index += 1;
        index <= len && num::Zero::is_zero(&v)
    })?;
    if found {
        return Err(VectorError::DivisionByZero);
    }
    Ok(())
}

macro_rules! integer_family {
    ($($t:ty),*) => {$(
        arith_ops! { $t;
            plus, plus_into, plus_in_place, plus_scalar, plus_scalar_in_place => |a, b| a.wrapping_add(b);
            minus, minus_into, minus_in_place, minus_scalar, minus_scalar_in_place => |a, b| a.wrapping_sub(b);
            lminus, lminus_into, lminus_in_place, lminus_scalar, lminus_scalar_in_place => |a, b| b.wrapping_sub(a);
            multiply, multiply_into, multiply_in_place, multiply_scalar, multiply_scalar_in_place => |a, b| a.wrapping_mul(b);
            div, div_into, div_in_place, div_scalar, div_scalar_in_place [rhs] => |a, b| a.wrapping_div(b);
            ldiv, ldiv_into, ldiv_in_place, ldiv_scalar, ldiv_scalar_in_place [lhs] => |a, b| b.wrapping_div(a);
            modulo, modulo_into, modulo_in_place, modulo_scalar, modulo_scalar_in_place [rhs] => |a, b| a.wrapping_rem(b);
            lmodulo, lmodulo_into, lmodulo_in_place, lmodulo_scalar, lmodulo_scalar_in_place [lhs] => |a, b| b.wrapping_rem(a);
        }

        impl<S: AsRef<[$t]>> ArrayVector<$t, S> {
            pub fn negative(&self) -> Result<ArrayVector<$t>> {
                self.map(<$t>::wrapping_neg)
            }

            pub fn abs(&self) -> Result<ArrayVector<$t>> {
                self.map(<$t>::wrapping_abs)
            }

            /// Wrapping sum.
            pub fn sum(&self) -> Result<$t> {
                dispatch::fold(self, 0, <$t>::wrapping_add)
            }

            /// Sum in the widened type, which cannot overflow for any
            /// vector that fits in memory.
            pub fn exsum(&self) -> Result<<$t as Integer>::Wide> {
                let init: <$t as Integer>::Wide = Default::default();
                dispatch::fold(self, init, |acc, v| acc + v.widen())
            }

            /// NaN for an empty vector.
            pub fn mean(&self) -> Result<f64> {
                let sum = dispatch::fold(self, 0.0, |acc, v: $t| acc + v.to_f64())?;
                Ok(sum / self.size() as f64)
            }

            /// Product in `f64`, which saturates to infinity instead of wrapping.
            pub fn prod(&self) -> Result<f64> {
                dispatch::fold(self, 1.0, |acc, v: $t| acc * v.to_f64())
            }

            /// `None` for an empty vector.
            pub fn max(&self) -> Result<Option<$t>> {
                dispatch::fold(self, None, |acc: Option<$t>, v| Some(acc.map_or(v, |m| m.max(v))))
            }

            /// `None` for an empty vector.
            pub fn min(&self) -> Result<Option<$t>> {
                dispatch::fold(self, None, |acc: Option<$t>, v| Some(acc.map_or(v, |m| m.min(v))))
            }

            pub fn cumsum(&self) -> Result<ArrayVector<$t>> {
                let mut out = dispatch::zeros_like(self);
                dispatch::cum_into("cumsum", self, &mut out, 0, <$t>::wrapping_add, |&acc| acc)?;
                Ok(out)
            }

            pub fn cummax(&self) -> Result<ArrayVector<$t>> {
                let mut out = dispatch::zeros_like(self);
                dispatch::cum_into(
                    "cummax",
                    self,
                    &mut out,
                    None,
                    |acc: Option<$t>, v| Some(acc.map_or(v, |m| m.max(v))),
                    |acc| acc.unwrap_or_default(),
                )?;
                Ok(out)
            }

            pub fn cummin(&self) -> Result<ArrayVector<$t>> {
                let mut out = dispatch::zeros_like(self);
                dispatch::cum_into(
                    "cummin",
                    self,
                    &mut out,
                    None,
                    |acc: Option<$t>, v| Some(acc.map_or(v, |m| m.min(v))),
                    |acc| acc.unwrap_or_default(),
                )?;
                Ok(out)
            }

            /// An `f64` copy.
            pub fn as_real(&self) -> Result<Vector> {
                let mut out = dispatch::zeros_like(self);
                dispatch::map_into("as_real", self, &mut out, |v: $t| v.to_f64())?;
                Ok(out)
            }
        }

        impl<S: AsRef<[$t]> + AsMut<[$t]>> ArrayVector<$t, S> {
            pub fn negative_in_place(&mut self) -> Result<()> {
                self.map_in_place(<$t>::wrapping_neg)
            }

            pub fn abs_in_place(&mut self) -> Result<()> {
                self.map_in_place(<$t>::wrapping_abs)
            }
        }
    )*};
}

integer_family!(i32, i64);

#[cfg(test)]
mod tests {
    use crate::config::scoped_operation_check;
    use crate::error::VectorError;
    use crate::vector::dense::{IntVector, LongVector};

    #[test]
    fn test_wrapping_arithmetic() {
        let a = IntVector::from_vec(vec![i32::MAX, i32::MIN, 7]);
        assert_eq!(a.plus_scalar(1).unwrap().to_vec(), vec![i32::MIN, i32::MIN + 1, 8]);
        assert_eq!(a.negative().unwrap().get(1).unwrap(), i32::MIN);
        assert_eq!(a.abs().unwrap().get(2).unwrap(), 7);
    }

    #[test]
    fn test_division_by_zero_is_reported() {
        let a = IntVector::from_vec(vec![6, 7, 8]);
        let b = IntVector::from_vec(vec![2, 0, 4]);
        assert_eq!(a.div(&b), Err(VectorError::DivisionByZero));
        assert_eq!(a.div_scalar(0), Err(VectorError::DivisionByZero));
        assert_eq!(b.ldiv_scalar(10), Err(VectorError::DivisionByZero));
        assert_eq!(a.modulo(&b), Err(VectorError::DivisionByZero));

        let mut c = a.copy();
        assert_eq!(c.div_in_place(&b), Err(VectorError::DivisionByZero));
        // nothing was written
        assert_eq!(c.to_vec(), vec![6, 7, 8]);

        let b = IntVector::from_vec(vec![4, 2, 3]);
        assert_eq!(a.div(&b).unwrap().to_vec(), vec![1, 3, 2]);
        assert_eq!(a.modulo(&b).unwrap().to_vec(), vec![2, 1, 2]);
        assert_eq!(b.ldiv(&a).unwrap().to_vec(), vec![1, 3, 2]);
        assert_eq!(IntVector::from_vec(vec![-7]).modulo_scalar(3).unwrap().to_vec(), vec![-1]);
    }

    #[test]
    fn test_length_checked_before_divisor() {
        let a = IntVector::from_vec(vec![6, 7, 8]);
        let short = IntVector::from_vec(vec![0, 1]);
        assert!(matches!(
            a.div(&short),
            Err(VectorError::DimensionMismatch { expected: 3, found: 2, .. })
        ));
        assert!(matches!(
            short.ldiv(&a),
            Err(VectorError::DimensionMismatch { expected: 2, found: 3, .. })
        ));
        let mut dest = vec![0; 2];
        assert!(matches!(
            a.modulo_into(&IntVector::from_vec(vec![0, 1, 2]), &mut dest),
            Err(VectorError::DimensionMismatch { expected: 3, found: 2, .. })
        ));
        let mut c = a.copy();
        assert!(matches!(
            c.div_in_place(&short),
            Err(VectorError::DimensionMismatch { .. })
        ));

        // unchecked: only the common prefix is divided, so a zero past it is ignored
        let _unchecked = scoped_operation_check(false);
        let long = IntVector::from_vec(vec![2, 3, 0]);
        assert_eq!(IntVector::from_vec(vec![4, 9]).div(&long).unwrap().to_vec(), vec![2, 3]);
        assert_eq!(a.div(&short), Err(VectorError::DivisionByZero));
    }

    #[test]
    fn test_reductions() {
        let a = LongVector::from_vec(vec![i64::MAX, i64::MAX, -4]);
        assert_eq!(a.exsum().unwrap(), 2 * i64::MAX as i128 - 4);
        assert_eq!(a.max().unwrap(), Some(i64::MAX));
        assert_eq!(a.min().unwrap(), Some(-4));
        assert_eq!(LongVector::from_vec(vec![]).max().unwrap(), None);

        let b = IntVector::from_vec(vec![1, 2, 3, 4]);
        assert_eq!(b.sum().unwrap(), 10);
        assert_eq!(b.mean().unwrap(), 2.5);
        assert_eq!(b.prod().unwrap(), 24.0);
        assert_eq!(b.as_real().unwrap().to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_scans() {
        let a = IntVector::from_vec(vec![3, -1, 5, 2]);
        assert_eq!(a.cumsum().unwrap().to_vec(), vec![3, 2, 7, 9]);
        assert_eq!(a.cummax().unwrap().to_vec(), vec![3, 3, 5, 5]);
        assert_eq!(a.cummin().unwrap().to_vec(), vec![3, -1, -1, -1]);
    }
}
