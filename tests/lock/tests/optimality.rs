//! A* path length equals brute-force BFS shortest path.

use isotope_search::solve::solve;
use lock_tests::{fixtures, reference};

#[test]
fn astar_matches_bfs_on_every_fixture() {
    for name in fixtures::ALL_FIXTURES {
        let initial = fixtures::by_name(name).unwrap();
        let result = solve(&initial).unwrap();
        let bfs = reference::shortest_to_goal(&initial);

        assert_eq!(
            result.moves().map(|m| u32::try_from(m).unwrap()),
            bfs,
            "A* and BFS disagree on fixture {name}"
        );
    }
}

#[test]
fn astar_is_optimal_from_every_reachable_state() {
    // Exhaustive pairwise check on a small instance: solve from each state
    // reachable from the two-pair fixture and compare against BFS.
    let initial = fixtures::two_pairs_three_floors();
    for state in reference::reachable_states(&initial) {
        let result = solve(&state).unwrap();
        let bfs = reference::shortest_to_goal(&state);
        assert_eq!(
            result.moves().map(|m| u32::try_from(m).unwrap()),
            bfs,
            "A* and BFS disagree from {state:?}"
        );
    }
}
