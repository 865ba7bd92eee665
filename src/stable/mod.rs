// Adjacent compare and swap, exactly n - 1 passes.
pub mod bubble;

// Grows a sorted prefix by shifting.
pub mod insertion;

// Top-down merge sort with per merge buffers.
pub mod merge;
