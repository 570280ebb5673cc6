//! # Quick Sort
//!
//! Divide and conquer around a pivot. The pivot is always the middle element
//! of the current range, so runs are reproducible. Each range is split with a
//! three-way partition into `< pivot`, `== pivot` and `> pivot`; only the
//! outer two groups recurse.
//!
//! The equal group always contains the pivot itself, so every recursive range
//! is strictly smaller than its parent. All-equal, sorted and reverse-sorted
//! inputs therefore terminate, and the middle pivot keeps the sorted cases at
//! O(n log n).

mod code;
#[cfg(test)]
mod test;

pub use code::{quick_sort, quick_sort_observed};
