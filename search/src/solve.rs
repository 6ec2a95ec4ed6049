//! Solve entry point and A* expansion loop.

use std::collections::HashMap;

use isotope_kernel::heuristic::estimate;
use isotope_kernel::moves::successors;
use isotope_kernel::state::State;

use crate::error::SolveError;
use crate::frontier::BestFirstFrontier;
use crate::node::Node;

/// Terminal result of a search.
///
/// `Unsolvable` is a normal outcome, not an error: the frontier was
/// exhausted without reaching the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A minimum-length move sequence was found. `path[0]` is the initial
    /// state, the last element is the goal state, and `path.len() - 1` is
    /// the minimum number of moves.
    Solved { path: Vec<State> },
    /// No legal move sequence reaches the goal.
    Unsolvable,
}

/// Counters accumulated over one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Nodes popped and expanded (stale pops excluded).
    pub expansions: u64,
    /// Successor states pushed onto the frontier.
    pub nodes_generated: u64,
    /// Successors discarded because a path at least as cheap was already
    /// known.
    pub duplicates_suppressed: u64,
    /// High-water mark of the frontier size.
    pub frontier_high_water: u64,
}

/// Result of a solve execution: the outcome plus run counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub outcome: Outcome,
    pub metrics: SearchMetrics,
}

impl SolveResult {
    /// Returns `true` if a goal was reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved { .. })
    }

    /// The minimum move count, if solved.
    #[must_use]
    pub fn moves(&self) -> Option<usize> {
        match &self.outcome {
            Outcome::Solved { path } => Some(path.len() - 1),
            Outcome::Unsolvable => None,
        }
    }
}

/// Run A* from `initial` until the goal is reached or the frontier is
/// exhausted.
///
/// The frontier is ordered by `g + h` with insertion-order tie-breaking, so
/// a run is deterministic end to end. `best_cost` and `predecessor` are
/// plain maps keyed by `State` with explicit absent semantics; the goal
/// test happens on pop, which together with the consistent heuristic makes
/// the returned path minimal.
///
/// # Errors
///
/// Returns [`SolveError::Precondition`] if `initial` fails validation. No
/// search work is performed in that case.
pub fn solve(initial: &State) -> Result<SolveResult, SolveError> {
    initial.validate()?;

    let mut metrics = SearchMetrics::default();

    // Already at the goal: answer without consulting the move generator.
    if initial.is_goal() {
        return Ok(SolveResult {
            outcome: Outcome::Solved {
                path: vec![initial.clone()],
            },
            metrics,
        });
    }

    let mut frontier = BestFirstFrontier::new();
    let mut best_cost: HashMap<State, u32> = HashMap::new();
    let mut predecessor: HashMap<State, State> = HashMap::new();
    let mut creation_order: u64 = 0;

    best_cost.insert(initial.clone(), 0);
    frontier.push(Node {
        state: initial.clone(),
        g_cost: 0,
        h_cost: estimate(initial),
        creation_order,
    });
    creation_order += 1;

    while let Some(current) = frontier.pop() {
        // Stale entry: a cheaper path to this state was recorded after the
        // entry was pushed. The cheaper copy is (or was) on the frontier.
        if best_cost
            .get(&current.state)
            .is_some_and(|&known| known < current.g_cost)
        {
            continue;
        }

        if current.state.is_goal() {
            metrics.frontier_high_water = frontier.high_water();
            return Ok(SolveResult {
                outcome: Outcome::Solved {
                    path: reconstruct_path(&predecessor, current.state),
                },
                metrics,
            });
        }

        metrics.expansions += 1;

        for neighbor in successors(&current.state) {
            let tentative_cost = current.g_cost + 1;
            if best_cost
                .get(&neighbor)
                .is_some_and(|&known| known <= tentative_cost)
            {
                metrics.duplicates_suppressed += 1;
                continue;
            }

            let h_cost = estimate(&neighbor);
            best_cost.insert(neighbor.clone(), tentative_cost);
            predecessor.insert(neighbor.clone(), current.state.clone());
            frontier.push(Node {
                state: neighbor,
                g_cost: tentative_cost,
                h_cost,
                creation_order,
            });
            creation_order += 1;
            metrics.nodes_generated += 1;
        }
    }

    metrics.frontier_high_water = frontier.high_water();
    Ok(SolveResult {
        outcome: Outcome::Unsolvable,
        metrics,
    })
}

/// Walk predecessor links from the goal back to the initial state, then
/// reverse.
fn reconstruct_path(predecessor: &HashMap<State, State>, goal: State) -> Vec<State> {
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(state) = cursor {
        cursor = predecessor.get(&state).cloned();
        path.push(state);
    }
    path.reverse();
    path
}
