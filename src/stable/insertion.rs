use crate::bounds;
use crate::SortError;

sort_impl!("insertion_sort");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place and *O*(*n*^2)
/// worst-case. Already sorted input is handled in *O*(*n*).
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    insertion_sort(v);
}

/// Sorts the first `n` elements of `v`, leaving `v[n..]` untouched.
///
/// Returns [`SortError::CountOutOfBounds`] if `n > v.len()`.
pub fn sort_n<T: Ord>(v: &mut [T], n: usize) -> Result<(), SortError> {
    bounds::check_count("insertion_sort", n, v.len())?;
    insertion_sort(&mut v[..n]);
    Ok(())
}

fn insertion_sort<T: Ord>(v: &mut [T]) {
    // `v[..i]` is sorted at the start of every iteration.
    for i in 1..v.len() {
        // Find the gap for the key `v[i]`. Only elements strictly greater than the key are
        // shifted, so it lands behind all of its equals.
        let mut gap = i;
        while gap > 0 && v[gap - 1] > v[i] {
            gap -= 1;
        }

        // Shifts `v[gap..i]` one position right and moves the key into the gap.
        v[gap..=i].rotate_right(1);
    }
}
