// First element pivot quicksort.
pub mod quick;

#[cfg(feature = "selection_sort")]
pub mod selection;
