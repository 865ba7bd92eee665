use crate::bounds;
use crate::SortError;

sort_impl!("selection_sort");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// *O*(*n*^2) comparisons in every case but at most *n* - 1 swaps.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    selection_sort(v);
}

/// Sorts the first `n` elements of `v`, leaving `v[n..]` untouched.
///
/// Returns [`SortError::CountOutOfBounds`] if `n > v.len()`.
pub fn sort_n<T: Ord>(v: &mut [T], n: usize) -> Result<(), SortError> {
    bounds::check_count("selection_sort", n, v.len())?;
    selection_sort(&mut v[..n]);
    Ok(())
}

fn selection_sort<T: Ord>(v: &mut [T]) {
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        // First occurrence of the minimum of the unsorted suffix.
        let mut min_pos = i;
        for j in (i + 1)..len {
            if v[j] < v[min_pos] {
                min_pos = j;
            }
        }

        if min_pos != i {
            v.swap(i, min_pos);
        }
    }
}
