//! `State`: the two-plane count carrier for a puzzle configuration.
//!
//! # Layout
//!
//! Two flattened count planes, one per item category, each indexed
//! `[floor * kind_count + kind]`:
//!
//! - Generator plane: `floor_count * kind_count` bytes (count per slot)
//! - Microchip plane: `floor_count * kind_count` bytes (count per slot)
//!
//! Storing counts instead of labeled singletons canonicalizes the state:
//! items of identical `(kind, category)` are interchangeable, so move
//! sequences that merely permute them produce equal `State` values. It also
//! makes conservation structural — a count vector cannot place one item on
//! two floors.
//!
//! # Equality semantics
//!
//! `State` derives `Eq` and `Hash` over all fields (dimensions, agent
//! floor, both planes). This is the key used for cost and predecessor maps
//! during search; [`State::identity_bytes`] serializes the same fields for
//! content fingerprinting.

use crate::item::{Category, Item, Kind};

/// Validation failure for an externally constructed initial state.
///
/// These are precondition violations: they surface before a search begins
/// and are never tolerated mid-search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A world needs at least one floor.
    NoFloors,
    /// Kind indices are plane-addressed through `u8`.
    TooManyKinds { kind_count: usize },
    /// The agent must stand on an existing floor.
    AgentFloorOutOfRange {
        agent_floor: usize,
        floor_count: usize,
    },
    /// A count plane does not match `floor_count * kind_count`.
    PlaneLengthMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFloors => write!(f, "state has no floors"),
            Self::TooManyKinds { kind_count } => {
                write!(f, "kind count {kind_count} exceeds plane addressing limit 255")
            }
            Self::AgentFloorOutOfRange {
                agent_floor,
                floor_count,
            } => {
                write!(
                    f,
                    "agent floor {agent_floor} out of range for {floor_count} floors"
                )
            }
            Self::PlaneLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "count plane holds {actual} slots, expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for StateError {}

/// An immutable snapshot of the puzzle: agent floor plus per-floor item
/// counts.
///
/// Constructed once (by the external parser or a fixture builder) and never
/// mutated during search; successors are built by copy-and-edit in
/// [`crate::moves`]. `floor_count` and `kind_count` are fixed for the life
/// of a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    floor_count: usize,
    kind_count: usize,
    agent_floor: usize,
    /// Generator plane: flattened `[floor_count * kind_count]` counts.
    generators: Vec<u8>,
    /// Microchip plane: flattened `[floor_count * kind_count]` counts.
    microchips: Vec<u8>,
}

impl State {
    /// Create an empty state with the agent on floor 0.
    #[must_use]
    pub fn new(floor_count: usize, kind_count: usize) -> Self {
        let total = floor_count * kind_count;
        Self {
            floor_count,
            kind_count,
            agent_floor: 0,
            generators: vec![0; total],
            microchips: vec![0; total],
        }
    }

    /// Assemble a state from raw parts, validating preconditions.
    ///
    /// This is the entry point for external collaborators (e.g. an input
    /// parser) that build their own planes.
    ///
    /// # Errors
    ///
    /// Returns the first [`StateError`] violated by the parts.
    pub fn from_parts(
        floor_count: usize,
        kind_count: usize,
        agent_floor: usize,
        generators: Vec<u8>,
        microchips: Vec<u8>,
    ) -> Result<Self, StateError> {
        let state = Self {
            floor_count,
            kind_count,
            agent_floor,
            generators,
            microchips,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check the structural preconditions of this state.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`StateError`]. A `State` built through
    /// [`State::new`] and [`State::place`] always passes.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.floor_count == 0 {
            return Err(StateError::NoFloors);
        }
        if self.kind_count > usize::from(u8::MAX) {
            return Err(StateError::TooManyKinds {
                kind_count: self.kind_count,
            });
        }
        if self.agent_floor >= self.floor_count {
            return Err(StateError::AgentFloorOutOfRange {
                agent_floor: self.agent_floor,
                floor_count: self.floor_count,
            });
        }
        let expected = self.floor_count * self.kind_count;
        for plane in [&self.generators, &self.microchips] {
            if plane.len() != expected {
                return Err(StateError::PlaneLengthMismatch {
                    expected,
                    actual: plane.len(),
                });
            }
        }
        Ok(())
    }

    /// Number of floors.
    #[must_use]
    pub const fn floor_count(&self) -> usize {
        self.floor_count
    }

    /// Number of item kinds.
    #[must_use]
    pub const fn kind_count(&self) -> usize {
        self.kind_count
    }

    /// The floor the agent (and elevator) currently occupies.
    #[must_use]
    pub const fn agent_floor(&self) -> usize {
        self.agent_floor
    }

    /// The topmost floor index. `floor_count` must be at least 1.
    #[must_use]
    pub const fn top_floor(&self) -> usize {
        self.floor_count - 1
    }

    /// Move the agent without touching any items.
    pub fn set_agent_floor(&mut self, floor: usize) {
        self.agent_floor = floor;
    }

    /// Iterate over all kind indices of this state.
    #[allow(clippy::cast_possible_truncation)] // kind_count <= 255, validated
    pub fn kinds(&self) -> impl Iterator<Item = Kind> {
        (0..self.kind_count).map(|k| Kind::new(k as u8))
    }

    fn slot(&self, floor: usize, kind: Kind) -> usize {
        floor * self.kind_count + kind.index()
    }

    /// Count of Generators of `kind` on `floor`. Panics if out of bounds.
    #[must_use]
    pub fn generator_count(&self, floor: usize, kind: Kind) -> u8 {
        self.generators[self.slot(floor, kind)]
    }

    /// Count of Microchips of `kind` on `floor`. Panics if out of bounds.
    #[must_use]
    pub fn microchip_count(&self, floor: usize, kind: Kind) -> u8 {
        self.microchips[self.slot(floor, kind)]
    }

    /// Count of copies of `item` on `floor`. Panics if out of bounds.
    #[must_use]
    pub fn count(&self, floor: usize, item: Item) -> u8 {
        match item.category {
            Category::Generator => self.generator_count(floor, item.kind),
            Category::Microchip => self.microchip_count(floor, item.kind),
        }
    }

    /// Total number of items resting on `floor`.
    #[must_use]
    pub fn items_on(&self, floor: usize) -> u32 {
        let start = floor * self.kind_count;
        let end = start + self.kind_count;
        let generators: u32 = self.generators[start..end]
            .iter()
            .map(|&c| u32::from(c))
            .sum();
        let microchips: u32 = self.microchips[start..end]
            .iter()
            .map(|&c| u32::from(c))
            .sum();
        generators + microchips
    }

    /// Total number of items in the world.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        (0..self.floor_count).map(|f| self.items_on(f)).sum()
    }

    /// Add one copy of `item` to `floor`.
    ///
    /// # Panics
    ///
    /// Panics if `floor` or `item.kind` is out of range, or the slot count
    /// would overflow.
    pub fn place(&mut self, floor: usize, item: Item) {
        assert!(
            floor < self.floor_count,
            "floor {floor} out of range for {} floors",
            self.floor_count
        );
        assert!(
            item.kind.index() < self.kind_count,
            "kind {} out of range for {} kinds",
            item.kind.index(),
            self.kind_count
        );
        let slot = self.slot(floor, item.kind);
        let plane = match item.category {
            Category::Generator => &mut self.generators,
            Category::Microchip => &mut self.microchips,
        };
        plane[slot] = plane[slot]
            .checked_add(1)
            .unwrap_or_else(|| panic!("slot count overflow on floor {floor}"));
    }

    /// Remove one copy of `item` from `floor`.
    ///
    /// # Panics
    ///
    /// Panics if no copy is present — callers enumerate from counts, so a
    /// missing copy is a contract violation.
    pub(crate) fn take(&mut self, floor: usize, item: Item) {
        let slot = self.slot(floor, item.kind);
        let plane = match item.category {
            Category::Generator => &mut self.generators,
            Category::Microchip => &mut self.microchips,
        };
        assert!(
            plane[slot] > 0,
            "no {item:?} on floor {floor} to take"
        );
        plane[slot] -= 1;
    }

    /// True iff the agent and every item rest on the topmost floor.
    ///
    /// A 1-floor world is immediately the goal: there is nowhere else for
    /// anything to be.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.agent_floor == self.top_floor()
            && (0..self.top_floor()).all(|floor| self.items_on(floor) == 0)
    }

    /// Deterministic byte serialization of the full state.
    ///
    /// Layout: `floor_count`, `kind_count`, `agent_floor` as u64 LE,
    /// followed by the generator plane and the microchip plane. Used for
    /// content-addressed fingerprints; equal states produce equal bytes.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut buf =
            Vec::with_capacity(24 + self.generators.len() + self.microchips.len());
        buf.extend_from_slice(&(self.floor_count as u64).to_le_bytes());
        buf.extend_from_slice(&(self.kind_count as u64).to_le_bytes());
        buf.extend_from_slice(&(self.agent_floor as u64).to_le_bytes());
        buf.extend_from_slice(&self.generators);
        buf.extend_from_slice(&self.microchips);
        buf
    }
}
