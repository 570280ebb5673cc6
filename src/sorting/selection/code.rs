use crate::sorting::step::{fraction, Highlights, NoopObserver, Step, StepKind, StepObserver};

/// Sort a copy of `input` with selection sort.
pub fn selection_sort(input: &[i64]) -> Vec<i64> {
    selection_sort_observed(input, &mut NoopObserver)
}

/// Selection sort, reporting each comparison against the tracked minimum.
pub fn selection_sort_observed(input: &[i64], observer: &mut dyn StepObserver) -> Vec<i64> {
    let mut arr = input.to_vec();
    let n = arr.len();

    for i in 0..n {
        let progress = fraction(i, n);
        let mut min_index = i;

        for j in (i + 1)..n {
            observer.on_step(&Step::new(
                StepKind::Compare,
                &arr,
                Highlights::compare(min_index, j)
                    .with_current(i)
                    .with_minimum(min_index)
                    .with_sorted(0..i),
                progress,
            ));

            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }

        if min_index != i {
            arr.swap(i, min_index);
            observer.on_step(&Step::new(
                StepKind::Swap,
                &arr,
                Highlights::swap(i, min_index).with_sorted(0..i),
                progress,
            ));
        }

        observer.on_step(&Step::new(
            StepKind::PassComplete,
            &arr,
            Highlights::at(i).with_sorted(0..i + 1),
            fraction(i + 1, n),
        ));
    }

    observer.on_step(&Step::finished(&arr));
    arr
}
