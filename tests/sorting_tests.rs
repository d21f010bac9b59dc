// Integration tests for the step sequences

use sortty::sorts::{Algorithm, StepOutcome, Stepper};

const ALGORITHMS: [Algorithm; 4] = [
    Algorithm::Bubble,
    Algorithm::Insertion,
    Algorithm::Selection,
    Algorithm::Merge,
];

/// Resume a stepper to exhaustion, checking every reported highlight index
/// stays in range. Returns the number of suspensions.
fn run_to_exhaustion(stepper: &mut dyn Stepper, values: &mut Vec<u32>) -> usize {
    let mut steps = 0;
    // Generous cap: no algorithm here needs more than ~4 n^2 suspensions.
    for _ in 0..100_000 {
        match stepper.step(values) {
            StepOutcome::Step(highlights) => {
                steps += 1;
                for &index in highlights.keys() {
                    assert!(index < values.len(), "highlight index {} out of range", index);
                }
            }
            StepOutcome::Done => return steps,
        }
    }
    panic!("stepper did not terminate");
}

fn sorted_copy(values: &[u32], ascending: bool) -> Vec<u32> {
    let mut expected = values.to_vec();
    if ascending {
        expected.sort();
    } else {
        expected.sort_by(|a, b| b.cmp(a));
    }
    expected
}

#[test]
fn test_all_algorithms_sort_both_directions() {
    let inputs: [&[u32]; 5] = [
        &[5, 3, 4, 1, 2],
        &[9, 1, 8, 1, 7, 3, 3, 10, 2],
        &[7],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
    ];

    for algorithm in ALGORITHMS {
        for input in inputs {
            for ascending in [true, false] {
                let mut values = input.to_vec();
                let mut stepper = algorithm.stepper(values.len(), ascending);
                run_to_exhaustion(stepper.as_mut(), &mut values);
                assert_eq!(
                    values,
                    sorted_copy(input, ascending),
                    "{:?} failed on {:?} (ascending={})",
                    algorithm,
                    input,
                    ascending
                );
            }
        }
    }
}

#[test]
fn test_exhausted_stepper_stays_done() {
    for algorithm in ALGORITHMS {
        let mut values = vec![4, 2, 9, 1];
        let mut stepper = algorithm.stepper(values.len(), true);
        run_to_exhaustion(stepper.as_mut(), &mut values);

        let snapshot = values.clone();
        for _ in 0..3 {
            assert_eq!(stepper.step(&mut values), StepOutcome::Done);
            assert_eq!(values, snapshot, "{:?} mutated after exhaustion", algorithm);
        }
    }
}

#[test]
fn test_each_step_mutates_a_bounded_number_of_slots() {
    for algorithm in ALGORITHMS {
        // Swap-based steps touch at most two slots, merge writeback one.
        let limit = match algorithm {
            Algorithm::Merge => 1,
            _ => 2,
        };

        let mut values = vec![13, 2, 11, 7, 5, 3, 17, 1];
        let mut stepper = algorithm.stepper(values.len(), true);
        for _ in 0..100_000 {
            let before = values.clone();
            match stepper.step(&mut values) {
                StepOutcome::Step(_) => {
                    let changed = before
                        .iter()
                        .zip(values.iter())
                        .filter(|(a, b)| a != b)
                        .count();
                    assert!(
                        changed <= limit,
                        "{:?} changed {} slots in one step",
                        algorithm,
                        changed
                    );
                }
                StepOutcome::Done => break,
            }
        }
    }
}

#[test]
fn test_bubble_suspends_once_per_swap() {
    // [5,3,4,1,2] has 8 inversions, and bubble sort performs exactly one
    // suspension per swap.
    let mut values = vec![5, 3, 4, 1, 2];
    let mut stepper = Algorithm::Bubble.stepper(values.len(), true);
    let steps = run_to_exhaustion(stepper.as_mut(), &mut values);
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
    assert_eq!(steps, 8);
}

#[test]
fn test_bubble_sorted_input_suspends_never() {
    let mut values = vec![1, 2, 3, 4, 5];
    let mut stepper = Algorithm::Bubble.stepper(values.len(), true);
    assert_eq!(run_to_exhaustion(stepper.as_mut(), &mut values), 0);
}

#[test]
fn test_insertion_sorted_input_suspends_never() {
    let mut values = vec![1, 2, 3, 4, 5];
    let mut stepper = Algorithm::Insertion.stepper(values.len(), true);
    assert_eq!(run_to_exhaustion(stepper.as_mut(), &mut values), 0);
}

#[test]
fn test_selection_descending_scenario() {
    let mut values = vec![5, 3, 4, 1, 2];
    let mut stepper = Algorithm::Selection.stepper(values.len(), false);
    let steps = run_to_exhaustion(stepper.as_mut(), &mut values);
    assert_eq!(values, vec![5, 4, 3, 2, 1]);
    // One suspension per inner comparison: n(n-1)/2 for n = 5.
    assert_eq!(steps, 10);
}

#[test]
fn test_selection_suspends_on_every_comparison() {
    // Count is input-independent, including already-sorted input.
    let mut values = vec![1, 2, 3, 4, 5, 6];
    let mut stepper = Algorithm::Selection.stepper(values.len(), true);
    assert_eq!(run_to_exhaustion(stepper.as_mut(), &mut values), 15);
}

#[test]
fn test_merge_single_element_suspends_once_untouched() {
    let mut values = vec![42];
    let mut stepper = Algorithm::Merge.stepper(values.len(), true);

    // The lone leaf node contributes only its trailing suspension, with no
    // highlights and no array access.
    match stepper.step(&mut values) {
        StepOutcome::Step(highlights) => assert!(highlights.is_empty()),
        StepOutcome::Done => panic!("expected one trailing suspension"),
    }
    assert_eq!(values, vec![42]);
    assert_eq!(stepper.step(&mut values), StepOutcome::Done);
}

#[test]
fn test_merge_two_element_trace() {
    // For [2,1] ascending: two leaf pauses, a paired compare, a paired
    // drain of the leftover left element, two writeback placements, and
    // the root's trailing pause.
    let mut values = vec![2, 1];
    let mut stepper = Algorithm::Merge.stepper(values.len(), true);
    let steps = run_to_exhaustion(stepper.as_mut(), &mut values);
    assert_eq!(values, vec![1, 2]);
    assert_eq!(steps, 9);
}

#[test]
fn test_single_element_terminates_cleanly_everywhere() {
    for algorithm in ALGORITHMS {
        let mut values = vec![9];
        let mut stepper = algorithm.stepper(values.len(), true);
        let steps = run_to_exhaustion(stepper.as_mut(), &mut values);
        assert!(steps <= 1, "{:?} suspended {} times on length 1", algorithm, steps);
        assert_eq!(values, vec![9]);
    }
}

#[test]
fn test_duplicates_preserve_multiset() {
    for algorithm in ALGORITHMS {
        let input = vec![3, 3, 3, 1, 1, 2, 2, 2, 2];
        let mut values = input.clone();
        let mut stepper = algorithm.stepper(values.len(), true);
        run_to_exhaustion(stepper.as_mut(), &mut values);

        let mut expected = input.clone();
        expected.sort();
        assert_eq!(values, expected, "{:?} lost elements", algorithm);
    }
}
