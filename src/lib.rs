//! Square boolean matrices over the boolean semiring.
//!
//! Logical OR is addition and logical AND is multiplication.
//! Multiplying an adjacency matrix by itself answers
//! "is there a path of length two?", and so on for higher powers.
//!
//! # Example
//!
//! ```
//! use logic_matrix::LogicMatrix;
//!
//! // Edges 1 -> 2 and 2 -> 3
//! let mut edges = LogicMatrix::new(3).unwrap();
//! edges.set(1, 2, true).unwrap();
//! edges.set(2, 3, true).unwrap();
//!
//! let two_steps = edges.power(2).unwrap();
//! assert!(two_steps.get(1, 3).unwrap());
//!
//! let reachable = edges.transitive_closure();
//! assert!(reachable.get(1, 3).unwrap());
//! assert!(!reachable.get(3, 1).unwrap());
//! ```
//!
//! # Optional features
//!
//! * `json`: load matrices from `JSON` input.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]

mod macros;

mod error;
mod exponent;
mod input;
mod matrix;
mod vector;

use std::io::Read;

pub use error::LogicMatrixError;
pub use exponent::Exponent;
pub use matrix::LogicMatrix;
pub use vector::logical_dot;

/// Build a [`LogicMatrix`] from a YAML string.
///
/// The input is a sequence of rows.
/// Cells are `true`/`false` or `0`/`1`.
///
/// # Errors
///
/// * [`LogicMatrixError::Yaml`] if the input is not valid YAML
///   or the rows do not form a square matrix.
///
/// # Examples
///
/// ```
/// let yaml = "
/// - [0, 1, 0]
/// - [0, 0, 1]
/// - [0, 0, 0]
/// ";
/// let m = logic_matrix::loads(yaml).unwrap();
/// assert_eq!(m.size(), 3);
/// assert!(m.cube().is_zero());
/// ```
pub fn loads(yaml: &str) -> Result<LogicMatrix, LogicMatrixError> {
    let m = serde_yaml::from_str(yaml)?;
    Ok(m)
}

/// Build a [`LogicMatrix`] from a type implementing [`Read`](std::io::Read).
///
/// The input must be YAML.  See [`loads`].
pub fn load<T: Read>(reader: T) -> Result<LogicMatrix, LogicMatrixError> {
    let m = serde_yaml::from_reader(reader)?;
    Ok(m)
}

/// Build a [`LogicMatrix`] from a JSON string.
///
/// # Examples
///
/// ```
/// let json = "[[true, false], [1, 1]]";
/// let m = logic_matrix::loads_json(json).unwrap();
/// assert_eq!(m.count_true(), 3);
/// ```
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn loads_json(json: &str) -> Result<LogicMatrix, LogicMatrixError> {
    let m = serde_json::from_str(json)?;
    Ok(m)
}

/// Build a [`LogicMatrix`] from a JSON reader.
#[cfg(feature = "json")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
pub fn load_json<T: Read>(reader: T) -> Result<LogicMatrix, LogicMatrixError> {
    let m = serde_json::from_reader(reader)?;
    Ok(m)
}
