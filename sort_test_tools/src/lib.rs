pub mod patterns;

// Re-exported so that the test instantiation macros work in crates that don't depend on paste.
pub use paste;

/// Uniform interface over the sort implementations so that the shared test suite and the
/// benchmarks can be instantiated once per implementation.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord + Clone;
}
