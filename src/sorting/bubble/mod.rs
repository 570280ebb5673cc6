//! # Bubble Sort
//!
//! Repeated passes over adjacent pairs, exchanging any pair that is out of
//! order. Each pass carries the largest remaining element to the end of the
//! unsorted prefix, so the sorted suffix grows by one per pass.
//!
//! A pass without a single exchange means the array is sorted and the loop
//! stops early. O(n²) time in the worst case, O(n) on sorted input.

mod code;

pub use code::{bubble_sort, bubble_sort_observed};
