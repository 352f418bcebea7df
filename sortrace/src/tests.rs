use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + ((self.next_u64() >> 16) % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_values(&mut self, len: usize, max_value: u32) -> Vec<u32> {
        (0..len)
            .map(|_| self.gen_range_u64(1, max_value as u64 + 1) as u32)
            .collect()
    }
}

fn run_all(algorithm: Algorithm, input: &[u32]) -> Vec<TraceStep> {
    Run::new(algorithm, input).unwrap().collect()
}

fn kinds<T>(steps: &[TraceStep<T>]) -> Vec<StepKind> {
    steps.iter().map(|s| s.kind).collect()
}

fn sorted_copy(input: &[u32]) -> Vec<u32> {
    let mut v = input.to_vec();
    v.sort_unstable();
    v
}

fn has_inversion(input: &[u32]) -> bool {
    input.windows(2).any(|w| w[0] > w[1])
}

fn check_trace(algorithm: Algorithm, input: &[u32], steps: &[TraceStep]) {
    let last = steps.last().unwrap();
    assert_eq!(last.kind, StepKind::Done, "{algorithm}: last step must be Done");
    assert_eq!(last.values, sorted_copy(input), "{algorithm}: input={input:?}");
    assert!(last.highlight.is_empty());

    let done_count = steps.iter().filter(|s| s.is_done()).count();
    assert_eq!(done_count, 1, "{algorithm}: exactly one Done step");

    let mut prev = 0u64;
    for s in steps {
        assert_eq!(s.values.len(), input.len(), "{algorithm}: length changed");
        assert!(s.comparisons >= prev, "{algorithm}: comparisons went down");
        prev = s.comparisons;
        for i in s.highlight.indices() {
            assert!(i < input.len(), "{algorithm}: highlight {i} out of bounds");
        }
    }

    if has_inversion(input) {
        assert!(last.comparisons > 0, "{algorithm}: no comparison counted");
        assert!(steps.iter().any(|s| s.kind.is_mutation()));
    }
}

#[test]
fn empty_and_singleton_emit_a_single_done_step() {
    for algorithm in Algorithm::ALL {
        for input in [vec![], vec![5u32]] {
            let steps = run_all(algorithm, &input);
            assert_eq!(steps.len(), 1, "{algorithm}");
            assert_eq!(steps[0].kind, StepKind::Done);
            assert_eq!(steps[0].comparisons, 0);
            assert_eq!(steps[0].values, input);
            assert!(steps[0].highlight.is_empty());
        }
    }
}

#[test]
fn bubble_sorts_reference_input_with_full_comparison_count() {
    let steps = run_all(Algorithm::Bubble, &[5, 3, 8, 1]);
    let last = steps.last().unwrap();
    assert_eq!(last.values, vec![1, 3, 5, 8]);
    assert_eq!(last.comparisons, 6);

    // 6 comparisons, 4 inversions, 1 Done.
    assert_eq!(steps.len(), 11);
    assert_eq!(
        steps.iter().filter(|s| s.kind == StepKind::Swap).count(),
        4
    );

    // Compare steps show the pre-decision state.
    assert_eq!(steps[0].kind, StepKind::Compare);
    assert_eq!(steps[0].values, vec![5, 3, 8, 1]);
    assert_eq!(steps[0].highlight, Highlight::pair(0, 1));
    assert_eq!(steps[0].comparisons, 1);
    assert_eq!(steps[1].kind, StepKind::Swap);
    assert_eq!(steps[1].values, vec![3, 5, 8, 1]);
    assert_eq!(steps[1].comparisons, 1);
}

#[test]
fn bubble_does_not_exit_early_on_sorted_input() {
    let steps = run_all(Algorithm::Bubble, &[1, 2, 3, 4, 5]);
    assert_eq!(steps.last().unwrap().comparisons, 10);
    assert!(steps.iter().all(|s| s.kind != StepKind::Swap));
}

#[test]
fn selection_swaps_once_per_pass_when_needed() {
    let steps = run_all(Algorithm::Selection, &[3, 1, 2]);
    use StepKind::*;
    assert_eq!(kinds(&steps), vec![Compare, Compare, Swap, Compare, Swap, Done]);
    assert_eq!(steps[0].highlight, Highlight::pair(0, 1).with_pivot(0));
    assert_eq!(steps[1].highlight, Highlight::pair(1, 2).with_pivot(0));
    assert_eq!(steps[2].values, vec![1, 3, 2]);
    assert_eq!(steps[2].highlight, Highlight::pair(1, 0));
    assert_eq!(steps[4].values, vec![1, 2, 3]);
    assert_eq!(steps[5].comparisons, 3);
}

#[test]
fn insertion_stops_at_first_non_inversion() {
    let steps = run_all(Algorithm::Insertion, &[1, 2, 3, 4]);
    assert_eq!(steps.last().unwrap().comparisons, 3);
    assert_eq!(steps.len(), 4);

    let steps = run_all(Algorithm::Insertion, &[4, 3, 2, 1]);
    assert_eq!(steps.last().unwrap().comparisons, 6);
    let first_swap = steps.iter().find(|s| s.kind == StepKind::Swap).unwrap();
    assert_eq!(first_swap.values, vec![3, 4, 2, 1]);
    assert_eq!(first_swap.highlight, Highlight::pair(0, 1).with_pivot(1));
}

#[derive(Clone, Copy, Debug)]
struct Tagged {
    key: u32,
    tag: char,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fn tagged(pairs: &[(u32, char)]) -> Vec<Tagged> {
    pairs.iter().map(|&(key, tag)| Tagged { key, tag }).collect()
}

fn tags(values: &[Tagged]) -> Vec<char> {
    values.iter().map(|t| t.tag).collect()
}

#[test]
fn insertion_preserves_order_of_equal_elements() {
    let input = tagged(&[(2, 'a'), (2, 'b'), (1, 'c')]);
    let last = Run::insertion(&input).last().unwrap();
    assert_eq!(
        last.values.iter().map(|t| t.key).collect::<Vec<_>>(),
        vec![1, 2, 2]
    );
    assert_eq!(tags(&last.values), vec!['c', 'a', 'b']);
}

#[test]
fn stable_algorithms_preserve_order_on_random_ties() {
    let mut rng = Lcg::new(7);
    for _ in 0..30 {
        let len = rng.gen_range_usize(2, 40);
        let input: Vec<Tagged> = (0..len)
            .map(|i| Tagged {
                key: rng.gen_range_u64(0, 5) as u32,
                tag: char::from(b'!' + i as u8),
            })
            .collect();

        let mut expected = input.clone();
        expected.sort(); // std's sort is stable.

        for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_stable()) {
            let last = Run::comparison(algorithm, &input, RunOptions::default())
                .unwrap()
                .last()
                .unwrap();
            assert_eq!(tags(&last.values), tags(&expected), "{algorithm}");
        }
    }
}

#[test]
fn quick_partitions_around_last_element() {
    let steps = run_all(Algorithm::Quick, &[3, 1, 2]);
    use StepKind::*;
    assert_eq!(kinds(&steps), vec![Compare, Compare, Swap, Swap, Done]);
    assert_eq!(steps[0].highlight, Highlight::pair(0, 0).with_pivot(2));
    assert_eq!(steps[2].values, vec![1, 3, 2]);
    assert_eq!(steps[2].highlight, Highlight::pair(0, 1).with_pivot(2));
    // Pivot placement: the pivot lands on index 1.
    assert_eq!(steps[3].values, vec![1, 2, 3]);
    assert_eq!(steps[3].highlight, Highlight::pair(1, 2).with_pivot(1));
    assert_eq!(steps[4].comparisons, 2);
}

#[test]
fn merge_emits_a_write_for_every_merged_slot() {
    let steps = run_all(Algorithm::Merge, &[2, 1]);
    use StepKind::*;
    assert_eq!(kinds(&steps), vec![Compare, Overwrite, Overwrite, Done]);
    assert_eq!(steps[0].highlight, Highlight::pair(0, 1));
    assert_eq!(steps[1].values, vec![1, 1]);
    assert_eq!(steps[1].highlight, Highlight::single(0));
    assert_eq!(steps[2].values, vec![1, 2]);
    assert_eq!(steps[3].comparisons, 1);

    // Every slot of every merge is written once: n * ceil(log2 n) writes for n = 8.
    let steps = run_all(Algorithm::Merge, &[8, 7, 6, 5, 4, 3, 2, 1]);
    let writes = steps.iter().filter(|s| s.kind == Overwrite).count();
    assert_eq!(writes, 24);
}

#[test]
fn heap_builds_then_extracts() {
    let steps = run_all(Algorithm::Heap, &[1, 2, 3]);
    use StepKind::*;
    assert_eq!(
        kinds(&steps),
        vec![Compare, Compare, Swap, Swap, Compare, Swap, Swap, Done]
    );
    // Heapified.
    assert_eq!(steps[2].values, vec![3, 2, 1]);
    assert_eq!(steps[2].highlight, Highlight::pair(0, 2));
    // Root moved to the end.
    assert_eq!(steps[3].values, vec![1, 2, 3]);
    assert_eq!(steps[3].highlight, Highlight::pair(0, 2));
    assert_eq!(steps[7].comparisons, 3);
}

#[test]
fn shell_shifts_then_places_held_element() {
    let steps = run_all(Algorithm::Shell, &[3, 1, 2]);
    use StepKind::*;
    assert_eq!(
        kinds(&steps),
        vec![Compare, Overwrite, Overwrite, Compare, Overwrite, Compare, Overwrite, Done]
    );
    // Mid-shift snapshot holds a duplicate until the held value is placed.
    assert_eq!(steps[1].values, vec![3, 3, 2]);
    assert_eq!(steps[2].values, vec![1, 3, 2]);
    assert_eq!(steps[2].highlight, Highlight::single(0).with_pivot(1));
    assert_eq!(steps[7].values, vec![1, 2, 3]);
    assert_eq!(steps[7].comparisons, 3);
}

#[test]
fn shell_uses_halving_gaps() {
    // n = 4: gap 2 compares (0,2) and (1,3) first.
    let steps = run_all(Algorithm::Shell, &[4, 3, 2, 1]);
    assert_eq!(steps[0].highlight, Highlight::pair(0, 2).with_pivot(2));
}

#[test]
fn counting_tallies_then_places() {
    let steps = run_all(Algorithm::Counting, &[3, 1, 2]);
    use StepKind::*;
    assert_eq!(
        kinds(&steps),
        vec![Compare, Compare, Compare, Overwrite, Overwrite, Overwrite, Done]
    );
    assert_eq!(steps[2].comparisons, 3);
    assert_eq!(steps[3].values, vec![3, 2, 2]);
    assert_eq!(steps[3].highlight, Highlight::single(1));
    assert_eq!(steps[5].values, vec![1, 2, 3]);
    // No comparisons during placement.
    assert_eq!(steps[6].comparisons, 3);
}

#[test]
fn counting_handles_negative_keys() {
    let input = [3i64, -7, 0, -7, 12, 5];
    let last = Run::counting(&input).unwrap().last().unwrap();
    assert_eq!(last.values, vec![-7, -7, 0, 3, 5, 12]);
}

#[test]
fn counting_rejects_oversized_range_before_any_step() {
    let err = Run::counting(&[0u32, u32::MAX]).unwrap_err();
    assert_eq!(
        err,
        SortError::CountingRangeTooLarge {
            range: 1u128 << 32,
            limit: DEFAULT_MAX_COUNTING_RANGE,
        }
    );

    let err = Run::new(Algorithm::Counting, &[i64::MIN, i64::MAX]).unwrap_err();
    assert!(matches!(
        err,
        SortError::CountingRangeTooLarge { range, .. } if range == 1u128 << 64
    ));

    let options = RunOptions::new().with_max_counting_range(10);
    assert!(Run::counting_with_options(&[1u32, 10], options).is_ok());
    assert!(Run::counting_with_options(&[1u32, 11], options).is_err());

    // Short inputs are already sorted and skip the range check.
    assert!(Run::counting(&[u32::MAX]).is_ok());
}

#[test]
fn comparison_constructor_rejects_counting() {
    assert!(Run::comparison(Algorithm::Counting, &[2u32, 1], RunOptions::default()).is_none());
    assert!(Run::comparison(Algorithm::Heap, &[2u32, 1], RunOptions::default()).is_some());
}

#[test]
fn every_algorithm_sorts_random_inputs() {
    let mut rng = Lcg::new(42);
    for round in 0..60 {
        let len = rng.gen_range_usize(0, 48);
        let max_value = if round % 3 == 0 { 4 } else { 100_000 };
        let input = rng.gen_values(len, max_value);
        for algorithm in Algorithm::ALL {
            let steps = run_all(algorithm, &input);
            check_trace(algorithm, &input, &steps);
        }
    }
}

#[test]
fn reversed_and_constant_inputs_sort() {
    let reversed: Vec<u32> = (0..33).rev().collect();
    let constant = vec![9u32; 17];
    for algorithm in Algorithm::ALL {
        check_trace(algorithm, &reversed, &run_all(algorithm, &reversed));
        check_trace(algorithm, &constant, &run_all(algorithm, &constant));
    }
}

#[test]
fn runs_are_deterministic() {
    let mut rng = Lcg::new(3);
    let input = rng.gen_values(25, 50);
    for algorithm in Algorithm::ALL {
        assert_eq!(
            run_all(algorithm, &input),
            run_all(algorithm, &input),
            "{algorithm}"
        );
    }
}

#[test]
fn input_is_not_mutated() {
    let input = vec![4u32, 2, 9, 1];
    let snapshot = input.clone();
    for algorithm in Algorithm::ALL {
        let _ = run_all(algorithm, &input);
    }
    assert_eq!(input, snapshot);
}

#[test]
fn cancellation_stops_before_the_next_step() {
    let input: Vec<u32> = (0..20).rev().collect();
    for algorithm in Algorithm::ALL {
        let full = run_all(algorithm, &input).len();
        for k in [1usize, 2, 5, full - 1] {
            let token = CancelToken::new();
            let mut run = Run::new(algorithm, &input)
                .unwrap()
                .with_cancel(token.clone());
            let mut seen = Vec::new();
            for _ in 0..k - 1 {
                seen.push(run.next().unwrap());
            }
            token.cancel();
            assert!(run.next().is_none(), "{algorithm}: step after cancel");
            assert!(run.next().is_none());
            assert!(run.is_cancelled());
            assert!(!run.is_finished());
            assert_eq!(run.steps_emitted(), k - 1);
            assert!(seen.iter().all(|s| !s.is_done()));
        }
    }
}

#[test]
fn cancelling_before_the_first_step_yields_nothing() {
    let token = CancelToken::new();
    token.cancel();
    let mut run = Run::bubble(&[2u32, 1]).with_cancel(token);
    assert_eq!(run.size_hint(), (0, None));
    assert!(run.next().is_none());
    assert!(run.is_cancelled());
}

#[test]
fn direct_cancel_discards_the_run() {
    let mut run = Run::heap(&[5u32, 4, 3, 2, 1]);
    assert!(run.next().is_some());
    run.cancel();
    assert!(run.next().is_none());
    assert!(run.is_cancelled());
    assert_eq!(run.len(), 5);
}

#[test]
fn finished_run_stays_finished() {
    let mut run = Run::quick(&[2u32, 1]);
    let steps: Vec<_> = run.by_ref().collect();
    assert!(steps.last().unwrap().is_done());
    assert!(run.is_finished());
    assert!(run.next().is_none());
    assert_eq!(run.size_hint(), (0, Some(0)));
    // Cancelling after completion does not change the outcome.
    run.cancel();
    assert!(run.is_finished());
}

#[test]
fn compare_steps_can_be_filtered_without_changing_counts() {
    let input = [9u32, 4, 7, 1, 8, 2];
    for algorithm in Algorithm::ALL {
        let all = run_all(algorithm, &input);
        let options = RunOptions::new().with_compare_steps(false);
        let muts: Vec<_> = Run::with_options(algorithm, &input, options)
            .unwrap()
            .collect();

        assert!(muts.iter().all(|s| s.kind != StepKind::Compare), "{algorithm}");
        assert_eq!(
            muts.len(),
            all.iter().filter(|s| s.kind != StepKind::Compare).count()
        );
        assert_eq!(
            muts.last().unwrap().comparisons,
            all.last().unwrap().comparisons
        );
    }
}

#[test]
fn step_counter_and_comparisons_track_progress() {
    let mut run = Run::selection(&[3u32, 2, 1]);
    assert_eq!(run.comparisons(), 0);
    let first = run.next().unwrap();
    assert_eq!(run.comparisons(), first.comparisons);
    assert_eq!(run.steps_emitted(), 1);
    let rest = run.by_ref().count();
    assert_eq!(run.steps_emitted(), rest + 1);
}

#[test]
fn algorithm_names_round_trip() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
    }
    assert_eq!("Quick".parse::<Algorithm>(), Ok(Algorithm::Quick));
    assert_eq!("merge-sort".parse::<Algorithm>(), Ok(Algorithm::Merge));
    assert_eq!("HEAP_SORT".parse::<Algorithm>(), Ok(Algorithm::Heap));
    assert_eq!(" shell sort ".parse::<Algorithm>(), Ok(Algorithm::Shell));

    let err = "bogo".parse::<Algorithm>().unwrap_err();
    assert_eq!(err.name(), "bogo");
    assert!(err.to_string().contains("bogo"));
}

#[test]
fn highlight_helpers() {
    let h = Highlight::pair(3, 4).with_pivot(9);
    assert_eq!(h.indices().collect::<Vec<_>>(), vec![9, 3, 4]);
    assert!(h.contains(4));
    assert!(!h.contains(5));
    assert!(Highlight::NONE.is_empty());
    assert_eq!(Highlight::single(2).indices().count(), 1);
}

#[test]
fn cancel_token_clones_share_state() {
    let a = CancelToken::new();
    let b = a.clone();
    assert!(a.same_as(&b));
    assert!(!CancelToken::new().same_as(&a));
    b.cancel();
    assert!(a.is_cancelled());
}
