//! # Selection Sort
//!
//! For each position `i`, scan the rest of the array for the smallest element
//! and exchange it into place. After iteration `i` the prefix `0..=i` holds
//! the `i + 1` smallest elements in order.
//!
//! Ties resolve to the first occurrence (strict `<` when tracking the
//! minimum). O(n²) comparisons, at most n - 1 exchanges.

mod code;

pub use code::{selection_sort, selection_sort_observed};
