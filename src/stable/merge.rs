use tracing::warn;

use crate::bounds;
use crate::SortError;

sort_impl!("merge_sort");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case.
///
/// # Current implementation
///
/// Top-down merge sort. Each merge step copies the two sorted halves into temporary buffers and
/// interleaves them back, so it needs `T: Clone` and at most *O*(*n*) auxiliary memory at any
/// point in time. The buffers are dropped as soon as the merge step returns.
#[inline]
pub fn sort<T: Ord + Clone>(v: &mut [T]) {
    merge_sort(v);
}

/// Sorts the inclusive range `v[low..=high]`.
///
/// `low >= high` describes a range of at most one element and leaves `v` unchanged.
///
/// Returns [`SortError::RangeOutOfBounds`] if `high >= v.len()`.
pub fn sort_range<T: Ord + Clone>(v: &mut [T], low: usize, high: usize) -> Result<(), SortError> {
    bounds::check_range("merge_sort", low, high, v.len())?;

    if low < high {
        merge_sort(&mut v[low..=high]);
    }

    Ok(())
}

/// Merges the sorted runs `v[low..=mid]` and `v[mid + 1..=high]` into the sorted range
/// `v[low..=high]`. On equal elements the one from the left run goes first.
///
/// Both runs must already be sorted, otherwise the resulting order is unspecified but still a
/// permutation of the input.
///
/// Returns [`SortError::RangeOutOfBounds`] if `high >= v.len()` and [`SortError::InvalidSplit`]
/// unless `low <= mid <= high`.
pub fn merge<T: Ord + Clone>(
    v: &mut [T],
    low: usize,
    mid: usize,
    high: usize,
) -> Result<(), SortError> {
    bounds::check_range("merge", low, high, v.len())?;

    if !(low <= mid && mid <= high) {
        warn!(low, mid, high, "rejected merge split");
        return Err(SortError::InvalidSplit { low, mid, high });
    }

    merge_runs(&mut v[low..=high], mid - low + 1);
    Ok(())
}

fn merge_sort<T: Ord + Clone>(v: &mut [T]) {
    let len = v.len();
    if len < 2 {
        return;
    }

    // Left half is `v[..=mid]`, same split as `low + (high - low) / 2` on the inclusive range.
    let mid = (len - 1) / 2;
    let (left, right) = v.split_at_mut(mid + 1);
    merge_sort(left);
    merge_sort(right);

    merge_runs(v, mid + 1);
}

/// Merges the sorted runs `v[..left_len]` and `v[left_len..]`.
fn merge_runs<T: Ord + Clone>(v: &mut [T], left_len: usize) {
    let mut left = v[..left_len].to_vec().into_iter().peekable();
    let mut right = v[left_len..].to_vec().into_iter().peekable();

    for slot in v.iter_mut() {
        // Take from the right run only if it is strictly less, this keeps equal elements in
        // their original order. Once one run is exhausted the rest of the other is copied through.
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            (Some(_), None) => false,
            (None, _) => true,
        };

        let next = if take_right { right.next() } else { left.next() };

        match next {
            Some(elem) => *slot = elem,
            None => break,
        }
    }
}
