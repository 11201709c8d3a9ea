//! Error types for run-length encoded boolean vectors.

use thiserror::Error;

/// Errors returned by fallible [`RleBoolVec`](crate::RleBoolVec) operations.
///
/// Every operation validates its arguments before touching storage, so a
/// returned error means the vector was left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index or position lies outside the vector's bounds.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A range whose start lies after its end.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: usize, end: usize },

    /// An element was requested from an empty vector.
    #[error("vector is empty")]
    Empty,

    /// Growing by `additional` elements would overflow the length.
    #[error("capacity overflow: length {len} cannot grow by {additional}")]
    CapacityOverflow { len: usize, additional: usize },
}

/// A specialized Result type for vector operations.
pub type Result<T> = std::result::Result<T, Error>;
