//! # Sort-Check
//!
//! Four classic comparison sorts (bubble, selection, merge, quick), a fixed
//! suite of small integer datasets, and a harness that verifies every
//! algorithm against the reference ascending order and reports pass/fail.

pub mod datasets;
pub mod error;
pub mod harness;
pub mod registry;
pub mod report;
pub mod sorting;
pub mod utils;

/// Re-export tui from utils for the binary
pub use utils::tui;

pub use error::{HarnessError, ParseError};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::datasets::{Dataset, DatasetSuite};
    pub use crate::harness::{run, HarnessConfig, Report, Status};
    pub use crate::registry::{Algorithm, AlgorithmEntry, Selection};
    pub use crate::report::{emit, ReportFormat};
    pub use crate::sorting::{Step, StepObserver};
}

#[cfg(test)]
mod tests {
    use crate::datasets::DatasetSuite;
    use crate::registry::registry;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let suite = DatasetSuite::standard();
        let algorithms = registry();

        println!("Verifying {} algorithms...", algorithms.len());

        for algo in algorithms {
            println!("Verifying algorithm: {}", algo.name);
            match algo.verify(&suite) {
                Ok(_) => println!("  ✅ Algorithm '{}' passed verification", algo.name),
                Err(e) => panic!(
                    "  ❌ Algorithm '{}' failed verification: {}",
                    algo.name,
                    e
                ),
            }
        }
    }
}
