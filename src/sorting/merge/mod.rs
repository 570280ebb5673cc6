//! # Merge Sort
//!
//! Top-down divide and conquer. The left half takes the first `n / 2`
//! elements, both halves are sorted recursively, then merged by repeatedly
//! taking the smaller head. On ties the left head is taken first.
//!
//! O(n log n) time, one O(n) scratch buffer reused by every merge.

mod code;

pub use code::{merge_sort, merge_sort_observed};
