//! # Sorting algorithms
//!
//! Four textbook comparison sorts over `i64` sequences. Every function takes
//! the input by shared reference, sorts a private copy and returns it, so the
//! caller's data is never touched.
//!
//! Each algorithm comes in two forms:
//!
//! - `*_sort(&[i64]) -> Vec<i64>`: the plain transform
//! - `*_sort_observed(&[i64], &mut dyn StepObserver) -> Vec<i64>`: the same
//!   transform, reporting every comparison, swap and pass boundary
//!
//! None of the algorithms promise stability.

pub mod bubble;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod step;

pub use bubble::{bubble_sort, bubble_sort_observed};
pub use merge::{merge_sort, merge_sort_observed};
pub use quick::{quick_sort, quick_sort_observed};
pub use selection::{selection_sort, selection_sort_observed};
pub use step::{Highlights, Mark, NoopObserver, Step, StepKind, StepObserver};

/// Plain sort transform
pub type SortFn = fn(&[i64]) -> Vec<i64>;

/// Sort transform that reports its steps
pub type ObservedSortFn = fn(&[i64], &mut dyn StepObserver) -> Vec<i64>;

#[cfg(test)]
pub(crate) mod testing {
    //! Checks shared by the per-algorithm test modules.

    use super::{ObservedSortFn, SortFn, Step, StepKind, StepObserver};

    /// Records the kind, array state and progress of every step
    #[derive(Default)]
    pub struct RecordingObserver {
        pub steps: Vec<(StepKind, Vec<i64>, f64)>,
    }

    impl RecordingObserver {
        pub fn count(&self, kind: StepKind) -> usize {
            self.steps.iter().filter(|(k, _, _)| *k == kind).count()
        }
    }

    impl StepObserver for RecordingObserver {
        fn on_step(&mut self, step: &Step<'_>) {
            self.steps
                .push((step.kind, step.array.to_vec(), step.progress));
        }
    }

    pub fn assert_sorts(sort: SortFn, input: &[i64], expected: &[i64]) {
        let before = input.to_vec();
        let output = sort(input);
        assert_eq!(output, expected, "wrong output for {:?}", input);
        assert_eq!(input, before.as_slice(), "input was modified");
    }

    /// The fixed scenarios every algorithm must handle
    pub fn assert_standard_scenarios(sort: SortFn) {
        assert_sorts(sort, &[], &[]);
        assert_sorts(sort, &[42], &[42]);
        assert_sorts(sort, &[7, 7, 7, 7, 7], &[7, 7, 7, 7, 7]);
        assert_sorts(sort, &[2, 3, 2, 1, 3, 1], &[1, 1, 2, 2, 3, 3]);
        assert_sorts(
            sort,
            &[2147483647, -2147483648, 0, 999999999, -999999999],
            &[-2147483648, -999999999, 0, 999999999, 2147483647],
        );
        assert_sorts(sort, &[5, 4, 3, 2, 1], &[1, 2, 3, 4, 5]);
        assert_sorts(sort, &[i64::MAX, i64::MIN, 0], &[i64::MIN, 0, i64::MAX]);
    }

    /// Observing must not change the result, progress must never go
    /// backwards, and the last step must be `Finished` with the output.
    pub fn assert_observation_is_passive(plain: SortFn, observed: ObservedSortFn) {
        let inputs: [&[i64]; 5] = [
            &[],
            &[1],
            &[3, 1, 2, 3, 1, 2, 3, 1, 2],
            &[1, 100, 2, 99, 3, 98, 4, 97],
            &[0, 0, 0, -1, -1, -2, 0, -3],
        ];

        for input in inputs {
            let mut recorder = RecordingObserver::default();
            let output = observed(input, &mut recorder);
            assert_eq!(output, plain(input), "observed run differs for {:?}", input);

            let (last_kind, last_array, last_progress) =
                recorder.steps.last().expect("no steps recorded");
            assert_eq!(*last_kind, StepKind::Finished);
            assert_eq!(last_array, &output);
            assert_eq!(*last_progress, 1.0);

            for pair in recorder.steps.windows(2) {
                assert!(pair[0].2 <= pair[1].2, "progress went backwards on {:?}", input);
            }
        }
    }
}
