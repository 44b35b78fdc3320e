//! Failure reporting across the public surface.

use densevec::config::{operation_check, scoped_operation_check};
use densevec::vector::{factory, IntVector, LongVector, Vector};
use densevec::VectorError;

#[test]
fn test_dimension_mismatch_reports_operands() {
    let _check = scoped_operation_check(true);
    let a = factory::zeros::<f64>(3);
    let b = factory::zeros::<f64>(5);
    let err = a.plus(&b).unwrap_err();
    assert_eq!(
        err,
        VectorError::DimensionMismatch {
            op: "plus",
            expected: 3,
            found: 5
        }
    );
    assert_eq!(err.to_string(), "Dimension mismatch in plus: expected 3, found 5");
}

#[test]
fn test_unchecked_mismatch_uses_common_prefix() {
    let a = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    let b = Vector::from_vec(vec![10.0, 20.0]);
    {
        let _unchecked = scoped_operation_check(false);
        assert!(!operation_check());
        let out = a.plus(&b).unwrap();
        assert_eq!(out.to_vec(), vec![11.0, 22.0, 0.0]);
    }
    assert!(a.plus(&b).is_err());
}

#[test]
fn test_integer_division_by_zero_writes_nothing() {
    let mut a = IntVector::from_vec(vec![10, 20, 30]);
    let b = IntVector::from_vec(vec![2, 0, 5]);
    assert_eq!(a.div(&b).unwrap_err(), VectorError::DivisionByZero);
    assert_eq!(a.div_in_place(&b).unwrap_err(), VectorError::DivisionByZero);
    assert_eq!(a.to_vec(), vec![10, 20, 30]);
    assert_eq!(a.modulo_scalar(0).unwrap_err(), VectorError::DivisionByZero);
    assert_eq!(b.ldiv(&a).unwrap_err(), VectorError::DivisionByZero);

    let long = LongVector::from_vec(vec![i64::MIN, 7]);
    assert_eq!(long.div_scalar(-1).unwrap().to_vec(), vec![i64::MIN, -7]);
}

#[test]
fn test_real_division_follows_ieee() {
    let a = Vector::from_vec(vec![1.0, -1.0, 0.0]);
    let out = a.div_scalar(0.0).unwrap();
    assert_eq!(out.get(0).unwrap(), f64::INFINITY);
    assert_eq!(out.get(1).unwrap(), f64::NEG_INFINITY);
    assert!(out.get(2).unwrap().is_nan());
}

#[test]
fn test_argument_errors() {
    assert!(matches!(
        factory::range_step(0, 5, 0),
        Err(VectorError::InvalidArgument { .. })
    ));
    assert!(matches!(
        densevec::vector::ComplexVector::from_parts(vec![1.0], vec![]),
        Err(VectorError::InvalidArgument { .. })
    ));
    let empty = factory::zeros::<i32>(0);
    assert_eq!(
        empty.first().unwrap_err(),
        VectorError::IndexOutOfBounds { index: 0, size: 0 }
    );
    assert!(empty.last().is_err());
}
