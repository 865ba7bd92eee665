use thiserror::Error;

/// Arguments rejected by the count and range based entry points.
///
/// The sequence is never touched when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("count {count} exceeds sequence length {len}")]
    CountOutOfBounds { count: usize, len: usize },

    #[error("range end {high} out of bounds for sequence length {len}")]
    RangeOutOfBounds { high: usize, len: usize },

    #[error("split point {mid} outside of range [{low}, {high}]")]
    InvalidSplit { low: usize, mid: usize, high: usize },

    #[error("range [{low}, {high}] is empty")]
    EmptyRange { low: usize, high: usize },
}
