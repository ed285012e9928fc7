use thiserror::Error;

/// Error type for this crate.
///
/// # Example
///
/// Row and column indexes start at one.
/// Asking for row zero gives
/// [`LogicMatrixError::IndexOutOfBounds`](crate::LogicMatrixError::IndexOutOfBounds).
///
/// ```
/// let m = logic_matrix::LogicMatrix::new(2).unwrap();
/// assert!(matches!(
///     m.get(0, 1),
///     Err(logic_matrix::LogicMatrixError::IndexOutOfBounds { index: 0, size: 2 })
/// ));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LogicMatrixError {
    /// A row or column index outside of `1..=size`.
    #[error("index {index} is out of bounds for a matrix of size {size}")]
    IndexOutOfBounds {
        /// The offending (1-based) index.
        index: usize,
        /// The size of the matrix.
        size: usize,
    },
    /// Vectors of different lengths passed to
    /// [`logical_dot`](crate::logical_dot).
    #[error("vector lengths differ: {left} != {right}")]
    LengthMismatch {
        #[allow(missing_docs)]
        left: usize,
        #[allow(missing_docs)]
        right: usize,
    },
    /// Matrices of different sizes combined by an operation
    /// requiring equal sizes.
    #[error("matrix sizes differ: {left} != {right}")]
    DimensionMismatch {
        #[allow(missing_docs)]
        left: usize,
        #[allow(missing_docs)]
        right: usize,
    },
    /// Matrix sizes must be positive.
    #[error("matrix size must be > 0, got: {0}")]
    InvalidSize(usize),
    /// Exponents must be non-negative and fit in a `u32`.
    #[error("exponent must be a non-negative 32-bit integer, got: {0}")]
    InvalidExponent(i64),
    /// A row whose length does not equal the number of rows.
    #[error("row {row} has length {length}, expected {size}")]
    NotSquare {
        /// The (1-based) row.
        row: usize,
        #[allow(missing_docs)]
        length: usize,
        #[allow(missing_docs)]
        size: usize,
    },
    /// Errors parsing the text form of a matrix.
    #[error("{0:?}")]
    Parse(String),
    #[error(transparent)]
    /// Errors coming from `serde_yaml`.
    Yaml(#[from] serde_yaml::Error),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    #[error(transparent)]
    /// Errors coming from `serde_json`.
    Json(#[from] serde_json::Error),
}

impl From<std::convert::Infallible> for LogicMatrixError {
    fn from(value: std::convert::Infallible) -> Self {
        match value {}
    }
}
