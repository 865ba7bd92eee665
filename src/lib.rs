//! Textbook in-place sorts: bubble, insertion, merge, quick and selection sort.
//!
//! Every algorithm lives in its own module and offers a whole slice `sort` plus the count or
//! inclusive-range entry point of the classic formulation, which validates its arguments and
//! returns a [`SortError`] instead of reading out of bounds.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(v);
            }
        }
    };
}

mod bounds;
mod error;

pub mod stable;
pub mod unstable;

pub use error::SortError;
