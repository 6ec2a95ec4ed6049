//! Brute-force breadth-first reference solver.
//!
//! Deliberately naive: no heuristic, no priority queue. On small instances
//! it is the ground truth the A* driver is locked against.

use std::collections::{HashMap, HashSet, VecDeque};

use isotope_kernel::moves::successors;
use isotope_kernel::state::State;

/// Shortest move count from `start` to the goal, or `None` if unreachable.
#[must_use]
pub fn shortest_to_goal(start: &State) -> Option<u32> {
    if start.is_goal() {
        return Some(0);
    }
    let mut distance: HashMap<State, u32> = HashMap::new();
    let mut queue: VecDeque<State> = VecDeque::new();
    distance.insert(start.clone(), 0);
    queue.push_back(start.clone());

    while let Some(state) = queue.pop_front() {
        let d = distance[&state];
        for next in successors(&state) {
            if distance.contains_key(&next) {
                continue;
            }
            if next.is_goal() {
                return Some(d + 1);
            }
            distance.insert(next.clone(), d + 1);
            queue.push_back(next);
        }
    }
    None
}

/// Every state reachable from `start` through legal moves, `start`
/// included.
#[must_use]
pub fn reachable_states(start: &State) -> Vec<State> {
    let mut seen: HashSet<State> = HashSet::new();
    let mut queue: VecDeque<State> = VecDeque::new();
    seen.insert(start.clone());
    queue.push_back(start.clone());

    let mut out = Vec::new();
    while let Some(state) = queue.pop_front() {
        out.push(state.clone());
        for next in successors(&state) {
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    out
}
