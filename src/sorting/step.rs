//! Step events emitted while an algorithm runs.
//!
//! The sort functions report comparisons, swaps and pass boundaries through a
//! [`StepObserver`]. Observers only watch: nothing they do can change the
//! outcome of the sort. The plain `*_sort` functions use [`NoopObserver`].

use std::ops::Range;

/// What the algorithm just did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// Two elements (or an element and the pivot) were compared
    Compare,
    /// Two positions were exchanged
    Swap,
    /// A merged value was written back into the working array
    Write,
    /// One outer iteration finished (a bubble/selection pass, a merge, a partition)
    PassComplete,
    /// The array is fully sorted
    Finished,
}

/// How a single index is classified for display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Comparing,
    Swapping,
    Current,
    Minimum,
    Sorted,
}

/// Indices of interest at a given step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
    pub comparing: Option<(usize, usize)>,
    pub swapping: Option<(usize, usize)>,
    pub current: Option<usize>,
    pub minimum: Option<usize>,
    /// Positions already holding their final value
    pub sorted: Range<usize>,
}

impl Highlights {
    pub fn compare(a: usize, b: usize) -> Self {
        Self {
            comparing: Some((a, b)),
            ..Self::default()
        }
    }

    pub fn swap(a: usize, b: usize) -> Self {
        Self {
            swapping: Some((a, b)),
            ..Self::default()
        }
    }

    pub fn at(index: usize) -> Self {
        Self {
            current: Some(index),
            ..Self::default()
        }
    }

    pub fn with_current(mut self, index: usize) -> Self {
        self.current = Some(index);
        self
    }

    pub fn with_minimum(mut self, index: usize) -> Self {
        self.minimum = Some(index);
        self
    }

    pub fn with_sorted(mut self, range: Range<usize>) -> Self {
        self.sorted = range;
        self
    }

    /// Classify one index. Swapping wins over comparing, which wins over the
    /// tracked minimum, the current cursor and finally the sorted region.
    pub fn classify(&self, index: usize) -> Option<Mark> {
        let hit = |pair: Option<(usize, usize)>| pair.is_some_and(|(a, b)| a == index || b == index);

        if hit(self.swapping) {
            Some(Mark::Swapping)
        } else if hit(self.comparing) {
            Some(Mark::Comparing)
        } else if self.minimum == Some(index) {
            Some(Mark::Minimum)
        } else if self.current == Some(index) {
            Some(Mark::Current)
        } else if self.sorted.contains(&index) {
            Some(Mark::Sorted)
        } else {
            None
        }
    }
}

/// A snapshot of the working array at one step of an algorithm
#[derive(Clone, Debug)]
pub struct Step<'a> {
    pub kind: StepKind,
    pub array: &'a [i64],
    pub highlights: Highlights,
    /// Fraction of the work done, in `[0, 1]`
    pub progress: f64,
}

impl<'a> Step<'a> {
    pub fn new(kind: StepKind, array: &'a [i64], highlights: Highlights, progress: f64) -> Self {
        Self {
            kind,
            array,
            highlights,
            progress,
        }
    }

    /// Final step: every position is sorted
    pub fn finished(array: &'a [i64]) -> Self {
        Self::new(
            StepKind::Finished,
            array,
            Highlights::default().with_sorted(0..array.len()),
            1.0,
        )
    }
}

/// Receives step events from a running algorithm
pub trait StepObserver {
    /// Called before an algorithm starts on a named input
    fn begin(&mut self, _algorithm: &str, _dataset: &str) {}

    fn on_step(&mut self, step: &Step<'_>);
}

/// Observer that ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    #[inline(always)]
    fn on_step(&mut self, _step: &Step<'_>) {}
}

/// `done / total`, treating an empty amount of work as complete
pub(crate) fn fraction(done: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        done as f64 / total as f64
    }
}
