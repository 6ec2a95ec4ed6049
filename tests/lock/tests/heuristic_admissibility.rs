//! Heuristic locks: admissibility and consistency against BFS ground truth.

use isotope_kernel::heuristic::estimate;
use isotope_kernel::moves::successors;
use lock_tests::{fixtures, reference};

#[test]
fn estimate_never_exceeds_true_remaining_moves() {
    for fixture in [
        fixtures::spread_pair(),
        fixtures::matched_pair(),
        fixtures::two_pairs_three_floors(),
    ] {
        for state in reference::reachable_states(&fixture) {
            let Some(true_distance) = reference::shortest_to_goal(&state) else {
                continue;
            };
            assert!(
                estimate(&state) <= true_distance,
                "inadmissible estimate {} > {true_distance} at {state:?}",
                estimate(&state)
            );
        }
    }
}

#[test]
fn estimate_is_consistent_across_every_reachable_move() {
    for fixture in [fixtures::spread_pair(), fixtures::two_pairs_three_floors()] {
        for state in reference::reachable_states(&fixture) {
            let h = estimate(&state);
            for next in successors(&state) {
                assert!(
                    h <= estimate(&next) + 1,
                    "triangle inequality violated: h({state:?}) = {h}, \
                     h(successor) = {}",
                    estimate(&next)
                );
            }
        }
    }
}

#[test]
fn estimate_is_zero_exactly_at_item_completion() {
    for state in reference::reachable_states(&fixtures::two_pairs_three_floors()) {
        let all_on_top = (0..state.top_floor()).all(|floor| state.items_on(floor) == 0);
        assert_eq!(estimate(&state) == 0, all_on_top);
    }
}
