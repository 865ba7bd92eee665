use tracing::warn;

use crate::bounds;
use crate::SortError;

sort_impl!("quick_sort");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) on average.
///
/// # Current implementation
///
/// Classic quicksort that always picks the first element of a range as pivot. There is no pivot
/// sampling and no fallback, ascending, descending and all equal inputs take *O*(*n*^2) time.
/// Recursion only ever happens on the shorter side of a partition, the longer side is handled in
/// a loop, which bounds the stack depth to *O*(log(*n*)) even for those inputs.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    quicksort(v);
}

/// Sorts the inclusive range `v[low..=high]`.
///
/// `low >= high` describes a range of at most one element and leaves `v` unchanged.
///
/// Returns [`SortError::RangeOutOfBounds`] if `high >= v.len()`.
pub fn sort_range<T: Ord>(v: &mut [T], low: usize, high: usize) -> Result<(), SortError> {
    bounds::check_range("quick_sort", low, high, v.len())?;

    if low < high {
        quicksort(&mut v[low..=high]);
    }

    Ok(())
}

/// Partitions the inclusive range `v[low..=high]` around its first element `v[low]`.
///
/// Returns the final index `p` of the pivot. When the call returns every element in
/// `v[low..p]` is less or equal to the pivot and every element in `v[p + 1..=high]` is greater.
///
/// Returns [`SortError::RangeOutOfBounds`] if `high >= v.len()` and [`SortError::EmptyRange`] if
/// `low > high`, there is no pivot to pick in that case.
pub fn partition<T: Ord>(v: &mut [T], low: usize, high: usize) -> Result<usize, SortError> {
    bounds::check_range("partition", low, high, v.len())?;

    if low > high {
        warn!(low, high, "rejected empty partition range");
        return Err(SortError::EmptyRange { low, high });
    }

    Ok(low + partition_first(&mut v[low..=high]))
}

fn quicksort<T: Ord>(mut v: &mut [T]) {
    while v.len() > 1 {
        let pivot_pos = partition_first(v);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);
        let (_pivot, right) = right.split_at_mut(1);

        // The two sides are disjoint, sorting them in either order yields the same result.
        if left.len() < right.len() {
            quicksort(left);
            v = right;
        } else {
            quicksort(right);
            v = left;
        }
    }
}

/// Partitions `v` around `v[0]` and returns the final position of the pivot.
///
/// `v` must not be empty.
fn partition_first<T: Ord>(v: &mut [T]) -> usize {
    let high = v.len() - 1;
    let mut start = 1;
    let mut end = high;

    loop {
        // Find the first element greater than the pivot.
        while start <= high && v[start] <= v[0] {
            start += 1;
        }

        // Find the last element less or equal to the pivot. The pivot itself stops this scan at
        // index 0 at the latest.
        while v[end] > v[0] {
            end -= 1;
        }

        if start < end {
            v.swap(start, end);
        } else {
            // `v[1..=end]` is less or equal, `v[end + 1..]` greater than the pivot.
            v.swap(0, end);
            return end;
        }
    }
}
