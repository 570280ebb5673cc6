use std::cmp::Ordering;

use crate::sorting::step::{fraction, Highlights, NoopObserver, Step, StepKind, StepObserver};

/// Sort a copy of `input` with quick sort.
pub fn quick_sort(input: &[i64]) -> Vec<i64> {
    quick_sort_observed(input, &mut NoopObserver)
}

/// Quick sort, reporting each element checked against the pivot, every
/// exchange, and the settled equal group after each partition.
pub fn quick_sort_observed(input: &[i64], observer: &mut dyn StepObserver) -> Vec<i64> {
    let mut arr = input.to_vec();
    let n = arr.len();

    let mut partitioner = Partitioner {
        settled: 0,
        total: n,
        observer,
    };
    partitioner.sort_range(&mut arr, 0, n);

    partitioner.observer.on_step(&Step::finished(&arr));
    arr
}

struct Partitioner<'o> {
    /// Elements known to be in their final position
    settled: usize,
    total: usize,
    observer: &'o mut dyn StepObserver,
}

impl Partitioner<'_> {
    /// Sort `arr[lo..hi]`
    fn sort_range(&mut self, arr: &mut [i64], lo: usize, hi: usize) {
        let len = hi - lo;
        if len <= 1 {
            self.settled += len;
            return;
        }

        let (lt, gt) = self.partition(arr, lo, hi);
        self.sort_range(arr, lo, lt);
        self.sort_range(arr, gt, hi);
    }

    /// Three-way partition of `arr[lo..hi]` around its middle element.
    ///
    /// Returns `(lt, gt)` such that `arr[lo..lt] < pivot`,
    /// `arr[lt..gt] == pivot` and `arr[gt..hi] > pivot`.
    fn partition(&mut self, arr: &mut [i64], lo: usize, hi: usize) -> (usize, usize) {
        let pivot = arr[lo + (hi - lo) / 2];
        let progress = fraction(self.settled, self.total);

        let (mut lt, mut i, mut gt) = (lo, lo, hi);
        while i < gt {
            self.observer.on_step(&Step::new(
                StepKind::Compare,
                arr,
                Highlights::at(i),
                progress,
            ));

            match arr[i].cmp(&pivot) {
                Ordering::Less => {
                    if lt != i {
                        arr.swap(lt, i);
                        self.emit_swap(arr, lt, i, progress);
                    }
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    if gt != i {
                        arr.swap(i, gt);
                        self.emit_swap(arr, i, gt, progress);
                    }
                }
                Ordering::Equal => i += 1,
            }
        }

        self.settled += gt - lt;
        self.observer.on_step(&Step::new(
            StepKind::PassComplete,
            arr,
            Highlights::default().with_sorted(lt..gt),
            fraction(self.settled, self.total),
        ));

        (lt, gt)
    }

    fn emit_swap(&mut self, arr: &[i64], a: usize, b: usize, progress: f64) {
        self.observer.on_step(&Step::new(
            StepKind::Swap,
            arr,
            Highlights::swap(a, b),
            progress,
        ));
    }
}
