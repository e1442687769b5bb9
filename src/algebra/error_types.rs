use thiserror::Error;

/// Error type returned by matrix construction, element access and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Row or column index outside of the matrix dimensions
    #[error("Index ({row},{col}) out of bounds for a {nrows}x{ncols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Operand shapes are incompatible for the requested operation
    #[error("Incompatible dimensions for {op}: {lhs:?} and {rhs:?}")]
    IncompatibleDimension {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Vector operand has the wrong length
    #[error("Vector length {found} does not match expected length {expected}")]
    VectorLength { expected: usize, found: usize },
    /// Operation requires a square matrix
    #[error("Matrix of size {nrows}x{ncols} is not square")]
    NotSquare { nrows: usize, ncols: usize },
    /// Argument not supported by the operation or storage kind
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Operation undefined for degenerate input
    #[error("Undefined operation: {0}")]
    Undefined(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by sparse matrix assembly operations.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Row start offsets are not monotone
    #[error("Bad row start values")]
    BadRowStart,
    /// Data is not sorted by column index within each row
    #[error("Data is not sorted by column index within each row")]
    BadColumnOrdering,
    #[error("Column index exceeds the matrix column dimension")]
    /// Column index exceeds the matrix column dimension
    BadColumnIndex,
}

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadField(&'static str),
}
