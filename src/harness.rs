//! Verification harness.
//!
//! Runs each selected algorithm on a private copy of every dataset, compares
//! the output element by element with the reference ascending order, and
//! collects one [`ResultRecord`] per pair into a [`Report`].

use log::{debug, info, warn};
use serde::Serialize;

use crate::datasets::{Dataset, DatasetSuite};
use crate::error::HarnessError;
use crate::registry::{AlgorithmEntry, Selection};
use crate::sorting::{NoopObserver, StepObserver};

/// Options for a harness run
#[derive(Clone, Debug, Default)]
pub struct HarnessConfig {
    /// Stop at the first failing dataset (default: false)
    pub fail_fast: bool,
}

/// Outcome of one algorithm on one dataset
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub dataset: &'static str,
    pub passed: bool,
}

/// Pass count for one algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    /// Number of datasets evaluated
    pub total: usize,
}

impl Summary {
    pub fn from_results(results: &[ResultRecord]) -> Self {
        Self {
            passed: results.iter().filter(|r| r.passed).count(),
            total: results.len(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// All records for one algorithm
#[derive(Clone, Debug, Serialize)]
pub struct AlgorithmReport {
    pub name: &'static str,
    pub results: Vec<ResultRecord>,
    pub summary: Summary,
}

impl AlgorithmReport {
    pub fn new(name: &'static str, results: Vec<ResultRecord>) -> Self {
        let summary = Summary::from_results(&results);
        Self {
            name,
            results,
            summary,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAIL")]
    Fail,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Fail => "FAIL",
        }
    }
}

/// Everything a harness run produced
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub algorithms: Vec<AlgorithmReport>,
    pub status: Status,
    /// True when fail-fast cut the run short
    #[serde(skip)]
    pub halted: bool,
}

impl Report {
    pub fn new(algorithms: Vec<AlgorithmReport>, halted: bool) -> Self {
        let status = if algorithms.iter().all(|a| a.summary.all_passed()) {
            Status::Ok
        } else {
            Status::Fail
        };

        Self {
            algorithms,
            status,
            halted,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Ok
    }

    /// 0 when every evaluated pair passed, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        match self.status {
            Status::Ok => 0,
            Status::Fail => 1,
        }
    }
}

/// Run the selected algorithms over `suite`
pub fn run(
    selection: Selection,
    suite: &DatasetSuite,
    config: &HarnessConfig,
) -> Result<Report, HarnessError> {
    run_entries(&selection.entries(), suite, config, &mut NoopObserver)
}

/// Like [`run`], reporting every algorithm step to `observer`
pub fn run_observed(
    selection: Selection,
    suite: &DatasetSuite,
    config: &HarnessConfig,
    observer: &mut dyn StepObserver,
) -> Result<Report, HarnessError> {
    run_entries(&selection.entries(), suite, config, observer)
}

/// Run arbitrary registry entries over `suite`.
///
/// Every (entry, dataset) pair is evaluated exactly once, in order. With
/// `fail_fast`, the run stops at the first failing pair and the current
/// entry's summary covers the datasets evaluated so far.
pub fn run_entries(
    entries: &[&AlgorithmEntry],
    suite: &DatasetSuite,
    config: &HarnessConfig,
    observer: &mut dyn StepObserver,
) -> Result<Report, HarnessError> {
    let mut algorithms = Vec::with_capacity(entries.len());
    let mut halted = false;

    for entry in entries {
        let mut results = Vec::with_capacity(suite.len());

        for dataset in suite.iter() {
            let record = check_pair(entry, dataset, observer)?;
            debug!(
                "{} on {}: {}",
                entry.name,
                dataset.name,
                if record.passed { "pass" } else { "FAIL" }
            );

            let failed = !record.passed;
            results.push(record);

            if failed && config.fail_fast {
                halted = true;
                break;
            }
        }

        let report = AlgorithmReport::new(entry.name, results);
        info!(
            "{}: {}/{} datasets passed",
            entry.name, report.summary.passed, report.summary.total
        );
        algorithms.push(report);

        if halted {
            warn!("fail-fast: stopping after first failure in {}", entry.name);
            break;
        }
    }

    Ok(Report::new(algorithms, halted))
}

fn check_pair(
    entry: &AlgorithmEntry,
    dataset: &Dataset,
    observer: &mut dyn StepObserver,
) -> Result<ResultRecord, HarnessError> {
    let input = dataset.to_vec();

    observer.begin(entry.name, dataset.name);
    let output = (entry.observed)(&input, observer);

    if output.len() != input.len() {
        return Err(HarnessError::InvariantViolation {
            algorithm: entry.name,
            dataset: dataset.name,
            expected: input.len(),
            actual: output.len(),
        });
    }

    let expected = dataset.expected();
    let mut as_multiset = output.clone();
    as_multiset.sort_unstable();
    if as_multiset != expected {
        return Err(HarnessError::MultisetChanged {
            algorithm: entry.name,
            dataset: dataset.name,
        });
    }

    Ok(ResultRecord {
        dataset: dataset.name,
        passed: output == expected,
    })
}

/// Result of sorting one ad-hoc array
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdhocOutcome {
    pub name: &'static str,
    pub output: Vec<i64>,
    pub passed: bool,
}

/// Sort a single caller-supplied array with each selected algorithm
pub fn run_adhoc(
    selection: Selection,
    input: &[i64],
    observer: &mut dyn StepObserver,
) -> Vec<AdhocOutcome> {
    let mut expected = input.to_vec();
    expected.sort_unstable();

    selection
        .algorithms()
        .into_iter()
        .map(|algorithm| {
            observer.begin(algorithm.name(), "input");
            let output = algorithm.sort_observed(input, observer);
            let passed = output == expected;
            AdhocOutcome {
                name: algorithm.name(),
                output,
                passed,
            }
        })
        .collect()
}
