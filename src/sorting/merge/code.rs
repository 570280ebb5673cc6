use crate::sorting::step::{fraction, Highlights, NoopObserver, Step, StepKind, StepObserver};

/// Sort a copy of `input` with merge sort.
pub fn merge_sort(input: &[i64]) -> Vec<i64> {
    merge_sort_observed(input, &mut NoopObserver)
}

/// Merge sort, reporting comparisons of run heads and every write-back.
pub fn merge_sort_observed(input: &[i64], observer: &mut dyn StepObserver) -> Vec<i64> {
    let mut arr = input.to_vec();
    let n = arr.len();

    let mut merger = Merger {
        buffer: Vec::with_capacity(n),
        merges_done: 0,
        // A top-down sort of n >= 1 elements performs exactly n - 1 merges
        merges_total: n.saturating_sub(1),
        observer,
    };
    merger.sort_range(&mut arr, 0, n);

    merger.observer.on_step(&Step::finished(&arr));
    arr
}

struct Merger<'o> {
    buffer: Vec<i64>,
    merges_done: usize,
    merges_total: usize,
    observer: &'o mut dyn StepObserver,
}

impl Merger<'_> {
    /// Sort `arr[lo..hi]`
    fn sort_range(&mut self, arr: &mut [i64], lo: usize, hi: usize) {
        if hi - lo <= 1 {
            return;
        }

        let mid = lo + (hi - lo) / 2;
        self.sort_range(arr, lo, mid);
        self.sort_range(arr, mid, hi);
        self.merge(arr, lo, mid, hi);
    }

    /// Merge the sorted runs `arr[lo..mid]` and `arr[mid..hi]`
    fn merge(&mut self, arr: &mut [i64], lo: usize, mid: usize, hi: usize) {
        let progress = fraction(self.merges_done, self.merges_total);
        self.buffer.clear();

        let (mut i, mut j) = (lo, mid);
        while i < mid && j < hi {
            self.observer.on_step(&Step::new(
                StepKind::Compare,
                arr,
                Highlights::compare(i, j),
                progress,
            ));

            if arr[j] < arr[i] {
                self.buffer.push(arr[j]);
                j += 1;
            } else {
                self.buffer.push(arr[i]);
                i += 1;
            }
        }
        self.buffer.extend_from_slice(&arr[i..mid]);
        self.buffer.extend_from_slice(&arr[j..hi]);

        for (offset, &value) in self.buffer.iter().enumerate() {
            arr[lo + offset] = value;
            self.observer.on_step(&Step::new(
                StepKind::Write,
                arr,
                Highlights::at(lo + offset),
                progress,
            ));
        }

        self.merges_done += 1;
        self.observer.on_step(&Step::new(
            StepKind::PassComplete,
            arr,
            Highlights::default(),
            fraction(self.merges_done, self.merges_total),
        ));
    }
}
