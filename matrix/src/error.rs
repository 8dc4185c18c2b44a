//! Contract violations detected by matrix operations.

use thiserror::Error;

use crate::Dimensions;

/// A violated precondition of a matrix operation.
///
/// The panicking operations panic with this error's message; the `try_*` operations return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row or column index lies outside the matrix.
    #[error("matrix indexes out of bounds: ({row}, {column}) in a {dimensions} matrix")]
    OutOfBounds {
        row: usize,
        column: usize,
        dimensions: Dimensions,
    },

    /// An operation defined only on column vectors got a matrix with more or fewer columns.
    #[error("matrix size for {operation} must have 1 column, got {dimensions}")]
    NotColumnVector {
        operation: &'static str,
        dimensions: Dimensions,
    },

    /// The operands of an addition differ in shape.
    #[error("matrix sizes are incompatible for addition: {lhs} + {rhs}")]
    AddShapeMismatch { lhs: Dimensions, rhs: Dimensions },

    /// The left operand's column count differs from the right operand's row count.
    #[error("matrix sizes are incompatible for multiplication: {lhs} * {rhs}")]
    MulShapeMismatch { lhs: Dimensions, rhs: Dimensions },

    /// The right operand of a dot product has fewer elements than the left one.
    #[error("dot product operand has {rhs_len} elements, need at least {lhs_len}")]
    DotLengthMismatch { lhs_len: usize, rhs_len: usize },

    /// `rows * columns` does not fit in a `usize`.
    #[error("matrix dimensions {rows}x{columns} overflow usize")]
    DimensionOverflow { rows: usize, columns: usize },

    /// The supplied backing storage does not match the requested shape.
    #[error("expected {expected} values for the matrix shape, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type alias for checked matrix operations.
pub type MatrixResult<T> = core::result::Result<T, MatrixError>;

/// Computes `rows * columns`, failing on overflow.
pub(crate) fn checked_area(rows: usize, columns: usize) -> MatrixResult<usize> {
    Dimensions { rows, columns }
        .area()
        .ok_or(MatrixError::DimensionOverflow { rows, columns })
}
