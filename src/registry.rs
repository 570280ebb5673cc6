//! Algorithm registry.
//!
//! The set of algorithms is closed: [`Algorithm`] enumerates them and a
//! static table maps each one to its name, description and implementation.
//! Nothing is registered at runtime.

use std::fmt;
use std::str::FromStr;

use crate::datasets::DatasetSuite;
use crate::error::HarnessError;
use crate::sorting::{self, ObservedSortFn, SortFn, StepObserver};

/// One of the four sorting algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Bubble,
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    /// Every algorithm, in registry order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn entry(self) -> &'static AlgorithmEntry {
        &REGISTRY[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn description(self) -> &'static str {
        self.entry().description
    }

    /// Sort a copy of `input`
    pub fn sort(self, input: &[i64]) -> Vec<i64> {
        (self.entry().function)(input)
    }

    /// Sort a copy of `input`, reporting steps to `observer`
    pub fn sort_observed(self, input: &[i64], observer: &mut dyn StepObserver) -> Vec<i64> {
        (self.entry().observed)(input, observer)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find(s)
            .map(|entry| entry.algorithm)
            .ok_or_else(|| HarnessError::UnknownAlgorithm {
                name: s.to_string(),
                available: format!("{}, all", list_names().join(", ")),
            })
    }
}

/// A registry row: an algorithm and the functions implementing it
pub struct AlgorithmEntry {
    pub algorithm: Algorithm,
    /// Name used on the command line and in reports (e.g. "bubble")
    pub name: &'static str,
    pub description: &'static str,
    pub function: SortFn,
    pub observed: ObservedSortFn,
}

impl AlgorithmEntry {
    /// Check this entry against the reference order on every dataset of `suite`
    pub fn verify(&self, suite: &DatasetSuite) -> Result<(), String> {
        for dataset in suite.iter() {
            let output = (self.function)(dataset.values);
            let expected = dataset.expected();

            if output != expected {
                return Err(format!(
                    "Algorithm '{}' failed on dataset '{}': expected {:?}, got {:?}",
                    self.name, dataset.name, expected, output
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for AlgorithmEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmEntry")
            .field("algorithm", &self.algorithm)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// Indexed by `Algorithm as usize`; keep in declaration order.
static REGISTRY: [AlgorithmEntry; 4] = [
    AlgorithmEntry {
        algorithm: Algorithm::Bubble,
        name: "bubble",
        description: "Adjacent exchanges, early exit on a clean pass",
        function: sorting::bubble_sort,
        observed: sorting::bubble_sort_observed,
    },
    AlgorithmEntry {
        algorithm: Algorithm::Selection,
        name: "selection",
        description: "Select the minimum of the unsorted suffix each pass",
        function: sorting::selection_sort,
        observed: sorting::selection_sort_observed,
    },
    AlgorithmEntry {
        algorithm: Algorithm::Merge,
        name: "merge",
        description: "Top-down merge sort, left run wins ties",
        function: sorting::merge_sort,
        observed: sorting::merge_sort_observed,
    },
    AlgorithmEntry {
        algorithm: Algorithm::Quick,
        name: "quick",
        description: "Middle pivot, three-way partition",
        function: sorting::quick_sort,
        observed: sorting::quick_sort_observed,
    },
];

/// All registry entries, in registry order
pub fn registry() -> &'static [AlgorithmEntry] {
    &REGISTRY
}

/// Find an entry by name
pub fn find(name: &str) -> Option<&'static AlgorithmEntry> {
    REGISTRY.iter().find(|entry| entry.name == name)
}

/// List algorithm names
pub fn list_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|entry| entry.name).collect()
}

/// Which algorithms a run covers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    All,
    One(Algorithm),
}

impl Selection {
    /// Sentinel selecting every algorithm
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn algorithms(&self) -> Vec<Algorithm> {
        match self {
            Selection::All => Algorithm::ALL.to_vec(),
            Selection::One(algorithm) => vec![*algorithm],
        }
    }

    pub fn entries(&self) -> Vec<&'static AlgorithmEntry> {
        self.algorithms().into_iter().map(Algorithm::entry).collect()
    }
}

impl FromStr for Selection {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_SENTINEL {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::One)
        }
    }
}
