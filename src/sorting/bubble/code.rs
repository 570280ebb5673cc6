use crate::sorting::step::{fraction, Highlights, NoopObserver, Step, StepKind, StepObserver};

/// Sort a copy of `input` with bubble sort.
///
/// # Example
/// ```
/// use sort_check::sorting::bubble_sort;
///
/// assert_eq!(bubble_sort(&[5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
/// ```
pub fn bubble_sort(input: &[i64]) -> Vec<i64> {
    bubble_sort_observed(input, &mut NoopObserver)
}

/// Bubble sort, reporting each comparison, exchange and finished pass.
pub fn bubble_sort_observed(input: &[i64], observer: &mut dyn StepObserver) -> Vec<i64> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let passes = n.saturating_sub(1);

    for pass in 0..passes {
        // arr[boundary..] is already in its final place
        let boundary = n - pass;
        let progress = fraction(pass, passes);
        let mut swapped = false;

        for j in 0..boundary - 1 {
            observer.on_step(&Step::new(
                StepKind::Compare,
                &arr,
                Highlights::compare(j, j + 1).with_sorted(boundary..n),
                progress,
            ));

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                observer.on_step(&Step::new(
                    StepKind::Swap,
                    &arr,
                    Highlights::swap(j, j + 1).with_sorted(boundary..n),
                    progress,
                ));
            }
        }

        observer.on_step(&Step::new(
            StepKind::PassComplete,
            &arr,
            Highlights::default().with_sorted(boundary - 1..n),
            fraction(pass + 1, passes),
        ));

        if !swapped {
            break;
        }
    }

    observer.on_step(&Step::finished(&arr));
    arr
}
