//! Complex vectors against `num::complex` arithmetic.

use approx::assert_relative_eq;
use densevec::error::{Result, VectorError};
use densevec::ops::complex::cum_into;
use densevec::vector::{
    factory, ComplexGet, ComplexReadCursor, ComplexSet, ComplexVector, ComplexWriteCursor, Vector,
};
use num::complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A complex vector that only implements the cursor protocol.
struct Opaque(Vec<Complex64>);

struct OpaqueReader<'a> {
    data: &'a [Complex64],
    pos: usize,
}

struct OpaqueWriter<'a> {
    data: &'a mut [Complex64],
    pos: usize,
}

impl ComplexReadCursor for OpaqueReader<'_> {
    fn has_next(&self) -> bool {
        self.pos < self.data.len()
    }

    fn next_parts(&mut self) -> Result<(f64, f64)> {
        let z = *self.data.get(self.pos).ok_or(VectorError::InvalidState("exhausted"))?;
        self.pos += 1;
        Ok((z.re, z.im))
    }
}

impl ComplexReadCursor for OpaqueWriter<'_> {
    fn has_next(&self) -> bool {
        self.pos < self.data.len()
    }

    fn next_parts(&mut self) -> Result<(f64, f64)> {
        let z = *self.data.get(self.pos).ok_or(VectorError::InvalidState("exhausted"))?;
        self.pos += 1;
        Ok((z.re, z.im))
    }
}

impl ComplexWriteCursor for OpaqueWriter<'_> {
    fn next_only(&mut self) -> Result<()> {
        if self.pos >= self.data.len() {
            return Err(VectorError::InvalidState("exhausted"));
        }
        self.pos += 1;
        Ok(())
    }

    fn set_parts(&mut self, re: f64, im: f64) -> Result<()> {
        let slot = self
            .pos
            .checked_sub(1)
            .and_then(|i| self.data.get_mut(i))
            .ok_or(VectorError::InvalidState("set before next"))?;
        *slot = Complex64::new(re, im);
        Ok(())
    }
}

impl ComplexGet for Opaque {
    type Cursor<'a> = OpaqueReader<'a>;

    fn size(&self) -> usize {
        self.0.len()
    }

    fn get_parts(&self, index: usize) -> Result<(f64, f64)> {
        let size = self.0.len();
        let z = self.0.as_slice().get(index).ok_or(VectorError::IndexOutOfBounds { index, size })?;
        Ok((z.re, z.im))
    }

    fn cursor(&self) -> OpaqueReader<'_> {
        OpaqueReader { data: &self.0, pos: 0 }
    }
}

impl ComplexSet for Opaque {
    type SetCursor<'a> = OpaqueWriter<'a>;

    fn set_parts(&mut self, index: usize, re: f64, im: f64) -> Result<()> {
        let size = self.0.len();
        let slot = self
            .0
            .as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfBounds { index, size })?;
        *slot = Complex64::new(re, im);
        Ok(())
    }

    fn set_cursor(&mut self) -> OpaqueWriter<'_> {
        OpaqueWriter { data: &mut self.0, pos: 0 }
    }
}

fn bits(values: &[Complex64]) -> Vec<(u64, u64)> {
    values.iter().map(|z| (z.re.to_bits(), z.im.to_bits())).collect()
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn random_complex(rng: &mut StdRng, size: usize) -> ComplexVector {
    ComplexVector::from_fn(size, |_| c(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)))
}

fn assert_close(actual: Complex64, expected: Complex64) {
    assert_relative_eq!(actual.re, expected.re, epsilon = 1e-9, max_relative = 1e-12);
    assert_relative_eq!(actual.im, expected.im, epsilon = 1e-9, max_relative = 1e-12);
}

#[test]
fn test_planewise_product() {
    let a = ComplexVector::from_complex(&[c(1.0, 2.0), c(3.0, -1.0)]);
    let b = ComplexVector::from_complex(&[c(2.0, 0.0), c(0.0, 1.0)]);
    assert_eq!(a.multiply(&b).unwrap().to_vec(), vec![c(2.0, 4.0), c(1.0, 3.0)]);
}

#[test]
fn test_arithmetic_matches_num() {
    let mut rng = StdRng::seed_from_u64(1234);
    let a = random_complex(&mut rng, 40);
    let b = random_complex(&mut rng, 40);
    let sum = a.plus(&b).unwrap();
    let diff = a.minus(&b).unwrap();
    let prod = a.multiply(&b).unwrap();
    let quot = a.div(&b).unwrap();
    for i in 0..40 {
        let (x, y) = (a.get(i).unwrap(), b.get(i).unwrap());
        assert_close(sum.get(i).unwrap(), x + y);
        assert_close(diff.get(i).unwrap(), x - y);
        assert_close(prod.get(i).unwrap(), x * y);
        assert_close(quot.get(i).unwrap(), x / y);
    }
}

#[test]
fn test_reductions_match_num() {
    let mut rng = StdRng::seed_from_u64(77);
    let a = random_complex(&mut rng, 25);
    let b = random_complex(&mut rng, 25);
    let values: Vec<Complex64> = a.to_vec();

    let expected_sum: Complex64 = values.iter().sum();
    assert_close(a.sum().unwrap(), expected_sum);
    assert_close(a.mean().unwrap(), expected_sum / 25.0);

    let expected_dot: Complex64 = a.iter().zip(b.iter()).map(|(x, y)| x * y.conj()).sum();
    assert_close(a.dot(&b).unwrap(), expected_dot);

    let expected_norm = values.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
    assert_relative_eq!(a.norm().unwrap(), expected_norm, max_relative = 1e-12);

    let moduli = a.abs().unwrap();
    for (m, z) in moduli.iter().zip(values.iter()) {
        assert_relative_eq!(m, z.norm(), max_relative = 1e-12);
    }
}

#[test]
fn test_real_operand_and_planes() {
    let a = ComplexVector::from_complex(&[c(1.0, 1.0), c(-2.0, 0.5), c(0.0, 3.0)]);
    let r = Vector::from_vec(vec![2.0, 2.0, 2.0]);
    assert_eq!(a.multiply_real(&r).unwrap(), a.plus(&a).unwrap());
    assert_eq!(a.plus_real(&r).unwrap().real().to_vec(), vec![3.0, 0.0, 2.0]);
    assert_close(a.dot_real(&r).unwrap(), c(-2.0, 9.0));

    assert_eq!(a.real_view().to_vec(), vec![1.0, -2.0, 0.0]);
    assert_eq!(a.ref_reverse().imag_view().to_vec(), vec![3.0, 0.5, 1.0]);
    let promoted = ComplexVector::from_real(&r);
    assert_eq!(promoted.imag().sum().unwrap(), 0.0);
}

#[test]
fn test_views_and_in_place_ops() {
    let mut a = ComplexVector::from_fn(6, |i| c(i as f64, 1.0));
    {
        let mut window = a.sub_vec_mut(2, 5).unwrap();
        window.conj_in_place().unwrap();
        window.multiply_scalar_in_place(c(0.0, 1.0)).unwrap();
    }
    // (k - i) * i = 1 + k i
    assert_eq!(a.get(3).unwrap(), c(1.0, 3.0));
    assert_eq!(a.get(5).unwrap(), c(5.0, 1.0));

    let rev = a.ref_reverse();
    assert_eq!(rev.get(0).unwrap(), a.get(5).unwrap());
    assert_eq!(rev.reverse().unwrap(), a);
    assert!(a.get(6).is_err());
}

#[test]
fn test_cumulative_scans() {
    let a = ComplexVector::from_complex(&[c(1.0, 1.0), c(0.0, 1.0), c(2.0, 0.0)]);
    assert_eq!(
        a.cumsum().unwrap().to_vec(),
        vec![c(1.0, 1.0), c(1.0, 2.0), c(3.0, 2.0)]
    );
    let cumprod = a.cumprod().unwrap();
    assert_eq!(cumprod.get(1).unwrap(), c(1.0, 1.0) * c(0.0, 1.0));
    assert_eq!(cumprod.get(2).unwrap(), c(-2.0, 2.0));
    assert_eq!(a.cummean().unwrap().get(2).unwrap(), c(1.0, 2.0 / 3.0));
}

#[test]
fn test_dimension_mismatch() {
    let a = ComplexVector::zeros(3);
    let b = ComplexVector::zeros(4);
    assert!(a.plus(&b).is_err());
    assert!(a.multiply_real(&factory::ones(2)).is_err());
}

#[test]
fn test_cursor_kernels_agree_with_planes() {
    let mut rng = StdRng::seed_from_u64(4321);
    let a = random_complex(&mut rng, 37);
    let b = random_complex(&mut rng, 37);
    let opaque_b = Opaque(b.to_vec());

    assert_eq!(bits(&a.plus(&b).unwrap().to_vec()), bits(&a.plus(&opaque_b).unwrap().to_vec()));
    assert_eq!(
        bits(&a.multiply(&b).unwrap().to_vec()),
        bits(&a.multiply(&opaque_b).unwrap().to_vec())
    );
    assert_eq!(bits(&a.div(&b).unwrap().to_vec()), bits(&a.div(&opaque_b).unwrap().to_vec()));
    assert_eq!(bits(&[a.dot(&b).unwrap()]), bits(&[a.dot(&opaque_b).unwrap()]));

    // a cursor-only destination forces the generic path as well
    let mut dest = Opaque(vec![Complex64::default(); 37]);
    a.multiply_into(&b, &mut dest).unwrap();
    assert_eq!(bits(&dest.0), bits(&a.multiply(&b).unwrap().to_vec()));

    let rev_b = Opaque(b.ref_reverse().to_vec());
    assert_eq!(
        bits(&a.ref_reverse().minus(&b.ref_reverse()).unwrap().to_vec()),
        bits(&a.ref_reverse().minus(&rev_b).unwrap().to_vec())
    );

    let opaque_a = Opaque(a.to_vec());
    let mut scanned = ComplexVector::zeros(37);
    cum_into(
        "cumsum",
        &opaque_a,
        &mut scanned,
        (0.0, 0.0),
        |(sr, si), (x, y)| (sr + x, si + y),
        |&acc| acc,
    )
    .unwrap();
    assert_eq!(bits(&scanned.to_vec()), bits(&a.cumsum().unwrap().to_vec()));

    let mut copied = ComplexVector::zeros(37);
    copied.fill_from(&opaque_b).unwrap();
    assert_eq!(copied, b);
}

#[test]
fn test_views_chain_and_compose() {
    let a = ComplexVector::from_fn(8, |i| c(i as f64, 0.5));
    let inner = a.sub_vec(2, 7).unwrap().into_reverse().into_sub_vec(1, 3).unwrap();
    assert_eq!(inner.to_vec(), vec![c(5.0, 0.5), c(4.0, 0.5)]);
    assert_eq!(inner.copy(), ComplexVector::from_complex(&[c(5.0, 0.5), c(4.0, 0.5)]));
}
