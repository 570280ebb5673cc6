use super::*;
use crate::sorting::testing::{assert_observation_is_passive, assert_standard_scenarios, RecordingObserver};
use crate::sorting::StepKind;

#[test]
fn test_quick_scenarios() {
    assert_standard_scenarios(quick_sort);
}

#[test]
fn test_quick_observation() {
    assert_observation_is_passive(quick_sort, quick_sort_observed);
}

#[test]
fn test_quick_all_equal_is_one_partition() {
    let mut recorder = RecordingObserver::default();
    let output = quick_sort_observed(&[7, 7, 7, 7, 7], &mut recorder);

    assert_eq!(output, vec![7, 7, 7, 7, 7]);
    assert_eq!(recorder.count(StepKind::PassComplete), 1);
    assert_eq!(recorder.count(StepKind::Swap), 0);
}

#[test]
fn test_quick_two_values() {
    assert_eq!(
        quick_sort(&[1, 0, 1, 0, 1, 0, 1, 0]),
        vec![0, 0, 0, 0, 1, 1, 1, 1]
    );
}

#[test]
fn test_quick_deterministic() {
    let input = [12, -3, 7, 7, 0, -11, 25, 4, 4, -3];

    let mut first = RecordingObserver::default();
    let mut second = RecordingObserver::default();
    quick_sort_observed(&input, &mut first);
    quick_sort_observed(&input, &mut second);

    assert_eq!(first.steps, second.steps);
}

#[test]
fn test_quick_large_sorted_and_reverse() {
    // Middle pivot keeps recursion shallow on presorted data
    let sorted: Vec<i64> = (0..10_000).collect();
    let reverse: Vec<i64> = sorted.iter().rev().copied().collect();

    assert_eq!(quick_sort(&sorted), sorted);
    assert_eq!(quick_sort(&reverse), sorted);
}
