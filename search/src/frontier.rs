//! Best-first frontier over a binary heap.
//!
//! Visited accounting lives with the driver's `best_cost` map (keyed by
//! `State`), not here: a cost map allows a later, cheaper path to replace
//! an earlier one, which a first-seen-wins set would forbid.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, Node};

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: Node,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier with high-water tracking.
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    /// Push a node onto the frontier.
    pub fn push(&mut self, node: Node) {
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(&node)),
            node,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best (lowest `f_cost`, then oldest) node from the frontier.
    #[must_use]
    pub fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|e| e.node)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
