//! The raw-array kernels and the cursor kernels must agree bit for bit.
//!
//! Each case computes an operation twice: once with array-backed operands,
//! which takes the fast path, and once with one operand swapped for a type
//! that offers no raw access, which forces the generic path.

use densevec::error::{Result, VectorError};
use densevec::ops::dispatch;
use densevec::vector::{
    factory, IntVector, ReadCursor, Selector, Vector, VectorGet, WriteCursor,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A vector that only implements the cursor protocol.
struct Opaque(Vec<f64>);

struct OpaqueCursor<'a> {
    data: &'a [f64],
    pos: usize,
}

impl ReadCursor<f64> for OpaqueCursor<'_> {
    fn has_next(&self) -> bool {
        self.pos < self.data.len()
    }

    fn next(&mut self) -> Result<f64> {
        let value = *self
            .data
            .get(self.pos)
            .ok_or(VectorError::InvalidState("exhausted"))?;
        self.pos += 1;
        Ok(value)
    }
}

impl VectorGet for Opaque {
    type Elem = f64;
    type Cursor<'a> = OpaqueCursor<'a>;

    fn size(&self) -> usize {
        self.0.len()
    }

    fn get(&self, index: usize) -> Result<f64> {
        self.0.as_slice().get(index).copied().ok_or(VectorError::IndexOutOfBounds {
            index,
            size: self.0.len(),
        })
    }

    fn cursor(&self) -> OpaqueCursor<'_> {
        OpaqueCursor {
            data: &self.0,
            pos: 0,
        }
    }
}

fn random_vector(rng: &mut StdRng, size: usize) -> Vector {
    factory::from_fn(size, |_| rng.random_range(-10.0..10.0))
}

fn assert_bitwise(fast: &Vector, generic: &Vector, op: &str) {
    assert_eq!(fast.size(), generic.size(), "{op}: size");
    for (i, (a, b)) in fast.iter().zip(generic.iter()).enumerate() {
        assert!(
            a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()),
            "{op} differs at {i}: {a} vs {b}"
        );
    }
}

macro_rules! check_binary {
    ($rng:expr, $size:expr, $($op:ident),*) => {$(
        let a = random_vector($rng, $size);
        let b = random_vector($rng, $size);
        let fast = a.$op(&b).unwrap();
        let generic = a.$op(&Opaque(b.to_vec())).unwrap();
        assert_bitwise(&fast, &generic, stringify!($op));
    )*};
}

#[test]
fn test_binary_ops_agree() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..16 {
        let size = rng.random_range(1..300);
        check_binary!(&mut rng, size, plus, minus, lminus, multiply, div, ldiv, modulo, lmodulo);
    }
}

#[test]
fn test_binary_ops_agree_on_reversed_views() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = random_vector(&mut rng, 129);
    let b = random_vector(&mut rng, 129);
    let fast = a.ref_reverse().multiply(&b.ref_reverse()).unwrap();
    let generic = a.ref_reverse().multiply(&Opaque(b.reverse().unwrap().to_vec())).unwrap();
    assert_bitwise(&fast, &generic, "reversed multiply");
    // mixed directions are incompatible and fall back entirely
    let mixed = a.ref_reverse().plus(&b).unwrap();
    let expected: Vec<f64> = a.iter().rev().zip(b.iter()).map(|(x, y)| x + y).collect();
    assert_eq!(mixed.to_vec(), expected);
}

#[test]
fn test_reductions_agree() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..8 {
        let size = rng.random_range(0..500);
        let v = random_vector(&mut rng, size);
        let opaque = Opaque(v.to_vec());
        assert_eq!(v.sum().unwrap().to_bits(), dispatch::sum(&opaque).unwrap().to_bits());
        assert_eq!(v.prod().unwrap().to_bits(), dispatch::prod(&opaque).unwrap().to_bits());
        let (fast_max, generic_max) = (v.max().unwrap(), dispatch::max(&opaque).unwrap());
        assert!(fast_max == generic_max || (fast_max.is_nan() && generic_max.is_nan()));
        assert_eq!(
            v.dot(&v).unwrap().to_bits(),
            dispatch::dot(&v, &opaque).unwrap().to_bits()
        );

        let reversed = v.ref_reverse();
        let opaque_rev = Opaque(v.iter().rev().collect());
        assert_eq!(
            reversed.sum().unwrap().to_bits(),
            dispatch::sum(&opaque_rev).unwrap().to_bits()
        );
    }
}

#[test]
fn test_scans_agree_with_generic_destination() {
    let mut rng = StdRng::seed_from_u64(3);
    let v = random_vector(&mut rng, 77);
    let fast = v.cumsum().unwrap();

    let mut generic = factory::zeros::<f64>(77);
    {
        let mut dest = generic.ref_slice_mut(&Selector::All).unwrap();
        v.cumsum_into(&mut dest).unwrap();
    }
    assert_bitwise(&fast, &generic, "cumsum");

    let rev_fast = v.ref_reverse().cummean().unwrap();
    let expected = v.reverse().unwrap().cummean().unwrap();
    assert_bitwise(&rev_fast, &expected, "reversed cummean");
}

#[test]
fn test_fill_scenario_on_both_paths() {
    let mut v = factory::zeros::<f64>(5);
    v.fill(2.0).unwrap();
    let fast = v.plus(&factory::ones(5)).unwrap();
    let generic = v.plus(&Opaque(vec![1.0; 5])).unwrap();
    assert_eq!(fast.to_vec(), vec![3.0; 5]);
    assert_eq!(generic.to_vec(), vec![3.0; 5]);

    let mut w = factory::zeros::<f64>(5);
    {
        let mut all = w.ref_slice_mut(&Selector::All).unwrap();
        all.fill(2.0).unwrap();
    }
    assert_eq!(w, v);
}

#[test]
fn test_integer_paths_agree() {
    let mut rng = StdRng::seed_from_u64(21);
    let a: IntVector = factory::from_fn(64, |_| rng.random_range(i32::MIN..i32::MAX));
    let b: IntVector = factory::from_fn(64, |_| rng.random_range(1..1000));
    let fast = a.multiply(&b).unwrap();
    let selected = b.ref_slice(&Selector::All).unwrap();
    let generic = a.multiply(&selected).unwrap();
    assert_eq!(fast, generic);
    assert_eq!(a.modulo(&b).unwrap(), a.modulo(&selected).unwrap());
}

#[test]
fn test_opaque_cursor_protocol() {
    let opaque = Opaque(vec![1.0]);
    let mut cursor = opaque.cursor();
    assert_eq!(cursor.next().unwrap(), 1.0);
    assert!(cursor.next().is_err());

    let mut v = Vector::from_vec(vec![0.0; 2]);
    let mut view = v.ref_slice_mut(&Selector::Indices(vec![1])).unwrap();
    let mut set = densevec::VectorSet::set_cursor(&mut view);
    assert!(set.set(1.0).is_err());
    set.next_and_set(4.0).unwrap();
    assert!(set.next_only().is_err());
    drop(set);
    drop(view);
    assert_eq!(v.to_vec(), vec![0.0, 4.0]);
}
