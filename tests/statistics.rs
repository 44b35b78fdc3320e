//! Reductions cross-checked against `statrs` and `ndarray-stats`.

use approx::assert_relative_eq;
use densevec::vector::{factory, IntVector, Vector};
use ndarray::Array1;
use ndarray_stats::QuantileExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Kept out of module scope: `Statistics` would shadow `QuantileExt` on arrays.
fn statrs_mean(data: &[f64]) -> f64 {
    use statrs::statistics::Statistics;
    data.mean()
}

fn sample(seed: u64, size: usize) -> Vector {
    let mut rng = StdRng::seed_from_u64(seed);
    factory::from_fn(size, |_| rng.random_range(-100.0..100.0))
}

#[test]
fn test_mean_and_sum_against_statrs() {
    for seed in 0..5 {
        let v = sample(seed, 1000);
        let data = v.to_vec();
        assert_relative_eq!(v.mean().unwrap(), statrs_mean(&data), max_relative = 1e-10);
        assert_relative_eq!(
            v.ref_reverse().mean().unwrap(),
            statrs_mean(&data),
            max_relative = 1e-10
        );
        assert_relative_eq!(v.sum().unwrap(), data.iter().sum::<f64>(), max_relative = 1e-10);
    }
}

#[test]
fn test_extrema_against_ndarray_stats() {
    let v = sample(42, 513);
    let array = Array1::from(v.to_vec());
    assert_eq!(v.max().unwrap(), *array.max().unwrap());
    assert_eq!(v.min().unwrap(), *array.min().unwrap());
    let window = v.sub_vec(100, 200).unwrap();
    assert_eq!(window.max().unwrap(), *window.as_ndarray().max().unwrap());
}

#[test]
fn test_nan_handling() {
    let v = Vector::from_vec(vec![f64::NAN, 2.0, -1.0]);
    assert_eq!(v.max().unwrap(), 2.0);
    assert_eq!(v.min().unwrap(), -1.0);
    assert!(v.sum().unwrap().is_nan());
    assert!(factory::zeros::<f64>(0).max().unwrap().is_nan());
    let cm = v.cummax().unwrap();
    assert!(cm.get(0).unwrap().is_nan());
    assert_eq!(cm.get(2).unwrap(), 2.0);
}

#[test]
fn test_norms_and_dot() {
    let v = sample(7, 300);
    let array = v.to_ndarray();
    assert_relative_eq!(v.dot_self().unwrap(), array.dot(&array), max_relative = 1e-10);
    assert_relative_eq!(v.norm().unwrap(), array.dot(&array).sqrt(), max_relative = 1e-10);
}

#[test]
fn test_integer_reductions() {
    let v = IntVector::from_vec(vec![i32::MAX, 1, -5]);
    assert_eq!(v.sum().unwrap(), i32::MAX - 4);
    assert_eq!(v.exsum().unwrap(), i32::MAX as i64 - 4);
    assert_relative_eq!(v.mean().unwrap(), (i32::MAX as f64 - 4.0) / 3.0);
    assert_eq!(v.max().unwrap(), Some(i32::MAX));
    assert_eq!(IntVector::from_vec(vec![]).min().unwrap(), None);
    assert_eq!(v.cumsum().unwrap().get(1).unwrap(), i32::MIN);
}
