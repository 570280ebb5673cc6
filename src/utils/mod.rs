//! Utility modules for the command-line front end.

pub mod parse;
pub mod tui;

pub use parse::{parse_array, parse_array_or_default, DEFAULT_ARRAY};
pub use tui::{StepCounts, TraceObserver};
