use thiserror::Error;

/// Errors raised by matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("INVALID_DIMENSIONS: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("RAGGED_ROWS: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("INDEX_OUT_OF_RANGE: ({row}, {col})")]
    IndexOutOfRange { row: usize, col: usize },
    #[error("DIMENSION_MISMATCH: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("NOT_SQUARE: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("SINGULAR")]
    Singular,
}

pub type Result<T> = std::result::Result<T, MatrixError>;
