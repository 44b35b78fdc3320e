//! Error types for densevec operations.
//!
//! Every public accessor and operation reports failures through
//! [`VectorError`] instead of panicking, so callers decide whether a bad
//! index or a length mismatch is fatal.

use thiserror::Error;

/// Errors that can occur during vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A logical index fell outside `[0, size)`.
    #[error("Index out of bounds: {index} (size: {size})")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The logical size of the vector that was accessed.
        size: usize,
    },
    /// A `[from, to)` range is empty-inverted or extends past the vector.
    #[error("Range out of bounds: [{from}, {to}) (size: {size})")]
    RangeOutOfBounds {
        /// Inclusive start of the requested range.
        from: usize,
        /// Exclusive end of the requested range.
        to: usize,
        /// The logical size of the vector that was sliced.
        size: usize,
    },
    /// Elementwise operands do not share a length.
    #[error("Dimension mismatch in {op}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Name of the operation that detected the mismatch.
        op: &'static str,
        /// Length of the receiving operand.
        expected: usize,
        /// Length of the offending operand.
        found: usize,
    },
    /// A cursor was used out of protocol.
    #[error("Invalid cursor state: {0}")]
    InvalidState(&'static str),
    /// Integer division or modulo by zero.
    #[error("Integer division by zero")]
    DivisionByZero,
    /// Input validation error.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Human-readable error message.
        message: String,
    },
    /// The worker pool could not be built.
    #[error("Thread pool error: {message}")]
    ThreadPool {
        /// Human-readable error message.
        message: String,
    },
}

/// Result type alias for densevec operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Creates an out-of-bounds error for a single index.
pub fn index_error(index: usize, size: usize) -> VectorError {
    VectorError::IndexOutOfBounds { index, size }
}

/// Creates an out-of-bounds error for a `[from, to)` range.
pub fn range_error(from: usize, to: usize, size: usize) -> VectorError {
    VectorError::RangeOutOfBounds { from, to, size }
}

/// Creates a dimension mismatch error.
pub fn dimension_error(op: &'static str, expected: usize, found: usize) -> VectorError {
    VectorError::DimensionMismatch {
        op,
        expected,
        found,
    }
}

/// Creates an invalid argument error.
pub fn argument_error(message: impl Into<String>) -> VectorError {
    VectorError::InvalidArgument {
        message: message.into(),
    }
}

/// Checks `index < size`.
#[inline]
pub fn range_check(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        Err(index_error(index, size))
    }
}

/// Checks that both swap indices are in range.
#[inline]
pub fn bi_range_check(i: usize, j: usize, size: usize) -> Result<()> {
    range_check(i, size)?;
    range_check(j, size)
}

/// Checks a `[from, to)` window against `size`.
#[inline]
pub fn sub_range_check(from: usize, to: usize, size: usize) -> Result<()> {
    if from <= to && to <= size {
        Ok(())
    } else {
        Err(range_error(from, to, size))
    }
}
