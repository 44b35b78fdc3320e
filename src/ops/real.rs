//! Arithmetic, reductions and scans for `f64` vectors.
//!
//! Real arithmetic never fails: division by zero and NaN follow IEEE 754.
//! The only errors come from length checks.

use super::dispatch;
use crate::error::Result;
use crate::vector::dense::ArrayVector;
use crate::vector::traits::{VectorGet, VectorSet};

arith_ops! { f64;
    plus, plus_into, plus_in_place, plus_scalar, plus_scalar_in_place => |a, b| a + b;
    minus, minus_into, minus_in_place, minus_scalar, minus_scalar_in_place => |a, b| a - b;
    lminus, lminus_into, lminus_in_place, lminus_scalar, lminus_scalar_in_place => |a, b| b - a;
    multiply, multiply_into, multiply_in_place, multiply_scalar, multiply_scalar_in_place => |a, b| a * b;
    div, div_into, div_in_place, div_scalar, div_scalar_in_place => |a, b| a / b;
    ldiv, ldiv_into, ldiv_in_place, ldiv_scalar, ldiv_scalar_in_place => |a, b| b / a;
    modulo, modulo_into, modulo_in_place, modulo_scalar, modulo_scalar_in_place => |a, b| a % b;
    lmodulo, lmodulo_into, lmodulo_in_place, lmodulo_scalar, lmodulo_scalar_in_place => |a, b| b % a;
}

impl<S: AsRef<[f64]>> ArrayVector<f64, S> {
    pub fn negative(&self) -> Result<ArrayVector<f64>> {
        self.map(|v| -v)
    }

    pub fn abs(&self) -> Result<ArrayVector<f64>> {
        self.map(f64::abs)
    }

    /// `0.0` for an empty vector.
    pub fn sum(&self) -> Result<f64> {
        dispatch::sum(self)
    }

    /// NaN for an empty vector.
    pub fn mean(&self) -> Result<f64> {
        Ok(dispatch::sum(self)? / self.size() as f64)
    }

    /// `1.0` for an empty vector.
    pub fn prod(&self) -> Result<f64> {
        dispatch::prod(self)
    }

    /// NaN for an empty vector.
    pub fn max(&self) -> Result<f64> {
        dispatch::max(self)
    }

    /// NaN for an empty vector.
    pub fn min(&self) -> Result<f64> {
        dispatch::min(self)
    }

    /// Folds `op` starting from NaN, so `op` decides how to treat the unset
    /// accumulator on the first call.
    pub fn stat<F: FnMut(f64, f64) -> f64>(&self, op: F) -> Result<f64> {
        dispatch::fold(self, f64::NAN, op)
    }

    pub fn cumsum(&self) -> Result<ArrayVector<f64>> {
        self.cum_with("cumsum", 0.0, |acc, v| acc + v)
    }

    /// Running sum divided by the running count.
    pub fn cummean(&self) -> Result<ArrayVector<f64>> {
        let mut out = dispatch::zeros_like(self);
        dispatch::cum_into(
            "cummean",
            self,
            &mut out,
            (0.0, 0.0),
            |(sum, n): (f64, f64), v| (sum + v, n + 1.0),
            |&(sum, n)| sum / n,
        )?;
        Ok(out)
    }

    pub fn cumprod(&self) -> Result<ArrayVector<f64>> {
        self.cum_with("cumprod", 1.0, |acc, v| acc * v)
    }

    pub fn cummax(&self) -> Result<ArrayVector<f64>> {
        self.cum_with("cummax", f64::NAN, super::generic::nan_max)
    }

    pub fn cummin(&self) -> Result<ArrayVector<f64>> {
        self.cum_with("cummin", f64::NAN, super::generic::nan_min)
    }

    /// Running [`stat`](Self::stat).
    pub fn cumstat<F: FnMut(f64, f64) -> f64>(&self, op: F) -> Result<ArrayVector<f64>> {
        self.cum_with("cumstat", f64::NAN, op)
    }

    fn cum_with<F: FnMut(f64, f64) -> f64>(&self, op: &'static str, init: f64, step: F) -> Result<ArrayVector<f64>> {
        let mut out = dispatch::zeros_like(self);
        dispatch::cum_into(op, self, &mut out, init, step, |&acc| acc)?;
        Ok(out)
    }

    pub fn cumsum_into<D: VectorSet<Elem = f64> + ?Sized>(&self, dest: &mut D) -> Result<()> {
        dispatch::cum_into("cumsum", self, dest, 0.0, |acc, v| acc + v, |&acc| acc)
    }

    pub fn dot<R: VectorGet<Elem = f64> + ?Sized>(&self, rhs: &R) -> Result<f64> {
        dispatch::dot(self, rhs)
    }

    /// Sum of squares.
    pub fn dot_self(&self) -> Result<f64> {
        dispatch::fold(self, 0.0, |acc, v| acc + v * v)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> Result<f64> {
        Ok(self.dot_self()?.sqrt())
    }
}

impl<S: AsRef<[f64]> + AsMut<[f64]>> ArrayVector<f64, S> {
    pub fn negative_in_place(&mut self) -> Result<()> {
        self.map_in_place(|v| -v)
    }

    pub fn abs_in_place(&mut self) -> Result<()> {
        self.map_in_place(f64::abs)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::scoped_operation_check;
    use crate::error::VectorError;
    use crate::vector::dense::Vector;
    use approx::assert_relative_eq;

    #[test]
    fn test_binary_forms_agree() {
        let a = Vector::from_vec(vec![6.0, 8.0, 9.0]);
        let b = Vector::from_vec(vec![3.0, 2.0, 4.0]);
        assert_eq!(a.div(&b).unwrap().to_vec(), vec![2.0, 4.0, 2.25]);
        assert_eq!(a.ldiv(&b).unwrap().to_vec(), vec![0.5, 0.25, 4.0 / 9.0]);
        assert_eq!(a.lminus_scalar(10.0).unwrap().to_vec(), vec![4.0, 2.0, 1.0]);
        assert_eq!(a.modulo(&b).unwrap().to_vec(), vec![0.0, 0.0, 1.0]);

        let mut c = a.copy();
        c.minus_in_place(&b).unwrap();
        assert_eq!(c.to_vec(), vec![3.0, 6.0, 5.0]);

        let mut dest = vec![0.0; 3];
        a.multiply_into(&b, &mut dest).unwrap();
        assert_eq!(dest, vec![18.0, 16.0, 36.0]);
    }

    #[test]
    fn test_ieee_division() {
        let a = Vector::from_vec(vec![1.0, -1.0, 0.0]);
        let q = a.div_scalar(0.0).unwrap();
        assert_eq!(q.get(0).unwrap(), f64::INFINITY);
        assert_eq!(q.get(1).unwrap(), f64::NEG_INFINITY);
        assert!(q.get(2).unwrap().is_nan());
    }

    #[test]
    fn test_mismatch_reported() {
        let _check = scoped_operation_check(true);
        let a = Vector::from_vec(vec![1.0; 3]);
        let b = Vector::from_vec(vec![1.0; 5]);
        assert!(matches!(
            a.plus(&b),
            Err(VectorError::DimensionMismatch { expected: 3, found: 5, .. })
        ));
    }

    #[test]
    fn test_reductions() {
        let a = Vector::from_vec(vec![1.0, 4.0, -2.0, 3.0]);
        assert_eq!(a.sum().unwrap(), 6.0);
        assert_eq!(a.mean().unwrap(), 1.5);
        assert_eq!(a.prod().unwrap(), -24.0);
        assert_eq!(a.max().unwrap(), 4.0);
        assert_eq!(a.min().unwrap(), -2.0);
        assert_relative_eq!(a.norm().unwrap(), 30f64.sqrt());
        assert!(Vector::from_vec(vec![]).mean().unwrap().is_nan());
        // NaN seed reaches the operator first
        let s = a.stat(|acc, v| if acc.is_nan() { v } else { acc + v }).unwrap();
        assert_eq!(s, 6.0);
    }

    #[test]
    fn test_scans() {
        let a = Vector::from_vec(vec![2.0, 4.0, 9.0, 1.0]);
        assert_eq!(a.cumsum().unwrap().to_vec(), vec![2.0, 6.0, 15.0, 16.0]);
        assert_eq!(a.cummean().unwrap().to_vec(), vec![2.0, 3.0, 5.0, 4.0]);
        assert_eq!(a.cummax().unwrap().to_vec(), vec![2.0, 4.0, 9.0, 9.0]);
        assert_eq!(a.cummin().unwrap().to_vec(), vec![2.0, 2.0, 2.0, 1.0]);
        assert_eq!(a.cumprod().unwrap().to_vec(), vec![2.0, 8.0, 72.0, 72.0]);
        let rev = a.ref_reverse().cumsum().unwrap();
        assert_eq!(rev.to_vec(), vec![1.0, 10.0, 14.0, 16.0]);
    }
}
