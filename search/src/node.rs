//! Frontier node and ordering key.

use isotope_kernel::state::State;

/// An entry awaiting expansion on the frontier.
///
/// Ordering for frontier extraction uses `(f_cost, creation_order)` where
/// `f_cost = g_cost + h_cost`. Lower is better; ties are broken by older
/// creation order, so equal-priority entries pop in insertion order and a
/// run is reproducible end to end.
#[derive(Debug, Clone)]
pub struct Node {
    /// Full immutable state at this node.
    pub state: State,
    /// Cumulative path cost (moves from the initial state).
    pub g_cost: u32,
    /// Admissible estimate of the remaining moves.
    pub h_cost: u32,
    /// Global push counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl Node {
    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> u32 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, creation_order)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u32,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&Node> for FrontierKey {
    fn from(node: &Node) -> Self {
        Self {
            f_cost: node.f_cost(),
            creation_order: node.creation_order,
        }
    }
}
