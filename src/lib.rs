//! Dense in-memory numeric vectors.
//!
//! `densevec` stores real, integer, long, boolean and complex sequences in
//! contiguous arrays and exposes zero-copy views over them: shifted windows,
//! reversed order and index or mask selections.
//!
//! Every operation has two engines. The generic engine walks cursors and works
//! for any [`VectorGet`]/[`VectorSet`] implementation. The fast engine loops
//! over raw arrays and is chosen at runtime when every operand reports
//! [`same_order`](VectorGet::same_order) access with a compatible walk. Both
//! produce identical results.
//!
//! ```
//! use densevec::vector::{factory, Vector};
//!
//! let mut v = factory::zeros::<f64>(5);
//! v.fill(2.0).unwrap();
//! let sum = v.plus(&factory::ones(5)).unwrap();
//! assert_eq!(sum.to_vec(), vec![3.0; 5]);
//!
//! // a reversed view goes through the same operations
//! let r = Vector::from_vec(vec![1.0, 2.0, 3.0]);
//! assert_eq!(r.ref_reverse().to_vec(), vec![3.0, 2.0, 1.0]);
//! ```
//!
//! Large elementwise jobs can be split across threads with
//! [`parallel::ParallelExecutor`]. Runtime switches live in [`config`].

pub mod config;
pub mod error;
pub mod ops;
pub mod parallel;
pub mod vector;

pub use error::{Result, VectorError};
pub use parallel::ParallelExecutor;
pub use vector::{
    ArrayVector, ComplexVector, IntVector, LogicalVector, LongVector, Selector, Vector,
    VectorBuilder, VectorGet, VectorPool, VectorSet,
};
