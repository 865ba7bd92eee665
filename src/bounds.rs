use tracing::{trace, warn};

use crate::SortError;

/// Validates the `n` of the count based sorts, which operate on `v[..n]`.
pub(crate) fn check_count(sort_name: &str, count: usize, len: usize) -> Result<(), SortError> {
    if count > len {
        warn!(sort_name, count, len, "rejected sort count");
        return Err(SortError::CountOutOfBounds { count, len });
    }

    trace!(sort_name, count, len, "sorting prefix");
    Ok(())
}

/// Validates an inclusive `[low, high]` range. `low > high` is the empty range and valid as long
/// as `high` itself is in bounds.
pub(crate) fn check_range(
    sort_name: &str,
    low: usize,
    high: usize,
    len: usize,
) -> Result<(), SortError> {
    if high >= len {
        warn!(sort_name, low, high, len, "rejected sort range");
        return Err(SortError::RangeOutOfBounds { high, len });
    }

    trace!(sort_name, low, high, len, "sorting range");
    Ok(())
}
