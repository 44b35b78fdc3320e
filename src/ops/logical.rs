//! Boolean algebra for logical vectors.

use super::dispatch;
use crate::error::Result;
use crate::vector::dense::{ArrayVector, IntVector};
use crate::vector::traits::{VectorGet, VectorSet};

arith_ops! { bool;
    and, and_into, and_in_place, and_scalar, and_scalar_in_place => |a, b| a & b;
    or, or_into, or_in_place, or_scalar, or_scalar_in_place => |a, b| a | b;
    xor, xor_into, xor_in_place, xor_scalar, xor_scalar_in_place => |a, b| a ^ b;
}

impl<S: AsRef<[bool]>> ArrayVector<bool, S> {
    pub fn not(&self) -> Result<ArrayVector<bool>> {
        self.map(|v| !v)
    }

    /// `true` for an empty vector.
    pub fn all(&self) -> Result<bool> {
        Ok(!dispatch::any(self, |v| !v)?)
    }

    pub fn any(&self) -> Result<bool> {
        dispatch::any(self, |v| v)
    }

    /// Number of `true` elements.
    pub fn count(&self) -> Result<usize> {
        dispatch::fold(self, 0, |acc, v| acc + usize::from(v))
    }

    pub fn cumall(&self) -> Result<ArrayVector<bool>> {
        let mut out = dispatch::zeros_like(self);
        dispatch::cum_into("cumall", self, &mut out, true, |acc, v| acc && v, |&acc| acc)?;
        Ok(out)
    }

    pub fn cumany(&self) -> Result<ArrayVector<bool>> {
        let mut out = dispatch::zeros_like(self);
        dispatch::cum_into("cumany", self, &mut out, false, |acc, v| acc || v, |&acc| acc)?;
        Ok(out)
    }

    /// Running number of `true` elements.
    pub fn cumcount(&self) -> Result<IntVector> {
        let mut out = dispatch::zeros_like(self);
        dispatch::cum_into("cumcount", self, &mut out, 0i32, |acc, v| acc + i32::from(v), |&acc| acc)?;
        Ok(out)
    }
}

impl<S: AsRef<[bool]> + AsMut<[bool]>> ArrayVector<bool, S> {
    pub fn not_in_place(&mut self) -> Result<()> {
        self.map_in_place(|v| !v)
    }
}

#[cfg(test)]
mod tests {
    use crate::vector::dense::LogicalVector;

    #[test]
    fn test_algebra() {
        let a = LogicalVector::from_vec(vec![true, true, false, false]);
        let b = LogicalVector::from_vec(vec![true, false, true, false]);
        assert_eq!(a.and(&b).unwrap().to_vec(), vec![true, false, false, false]);
        assert_eq!(a.or(&b).unwrap().to_vec(), vec![true, true, true, false]);
        assert_eq!(a.xor(&b).unwrap().to_vec(), vec![false, true, true, false]);
        assert_eq!(a.not().unwrap().to_vec(), vec![false, false, true, true]);
        assert_eq!(a.xor_scalar(true).unwrap().to_vec(), vec![false, false, true, true]);

        let mut c = a.copy();
        c.or_in_place(&b).unwrap();
        assert_eq!(c.count().unwrap(), 3);
    }

    #[test]
    fn test_reductions_and_scans() {
        let a = LogicalVector::from_vec(vec![true, true, false, true]);
        assert!(!a.all().unwrap());
        assert!(a.any().unwrap());
        assert!(LogicalVector::from_vec(vec![]).all().unwrap());
        assert_eq!(a.cumall().unwrap().to_vec(), vec![true, true, false, false]);
        assert_eq!(a.cumcount().unwrap().to_vec(), vec![1, 2, 2, 3]);
        assert_eq!(a.not().unwrap().cumany().unwrap().to_vec(), vec![false, false, true, true]);
    }
}
