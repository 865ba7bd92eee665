use crate::bounds;
use crate::SortError;

sort_impl!("bubble_sort");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n*^2) in every case,
/// there is no early exit for already sorted input.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 4, 1, 2];
///
/// textbook_sort_rs::stable::bubble::sort(&mut v);
/// assert!(v == [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    bubble_sort(v);
}

/// Sorts the first `n` elements of `v`, leaving `v[n..]` untouched.
///
/// Returns [`SortError::CountOutOfBounds`] if `n > v.len()`.
pub fn sort_n<T: Ord>(v: &mut [T], n: usize) -> Result<(), SortError> {
    bounds::check_count("bubble_sort", n, v.len())?;
    bubble_sort(&mut v[..n]);
    Ok(())
}

fn bubble_sort<T: Ord>(v: &mut [T]) {
    let len = v.len();

    // After pass `i` the `i` largest elements are in their final position, so every pass can stop
    // one pair earlier than the one before.
    for pass in 1..len {
        for j in 0..(len - pass) {
            // Strictly greater, equal neighbours are never swapped.
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
            }
        }
    }
}
