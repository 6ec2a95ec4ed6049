//! Successor enumeration: carry one or two items to an adjacent floor.
//!
//! Cargo choices are multisets over `(kind, category)`: a pair of
//! interchangeable items is one choice, never two. Candidates that violate
//! the legality invariant are filtered out before they are yielded, so the
//! search driver never re-validates.

use crate::item::Item;
use crate::legality::is_legal;
use crate::state::State;

/// What the agent carries on one elevator trip: one item, optionally a
/// second. Unordered — `{a, b}` and `{b, a}` are the same cargo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cargo {
    pub first: Item,
    pub second: Option<Item>,
}

impl Cargo {
    /// A single-item trip.
    #[must_use]
    pub const fn single(item: Item) -> Self {
        Self {
            first: item,
            second: None,
        }
    }

    /// A two-item trip.
    #[must_use]
    pub const fn pair(first: Item, second: Item) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }
}

/// Enumerate the legal successors of `state`.
///
/// Yields every state reachable by moving a size-1 or size-2 cargo from the
/// agent's floor to an adjacent floor, minus those failing the legality
/// invariant. The empty cargo is never a move: every successor changes the
/// item partition. The yield order is deterministic for a given state but
/// carries no meaning — ranking is the driver's job.
///
/// # Panics
///
/// Panics if `state.agent_floor()` is out of range. That is a contract
/// violation: validated initial states and generated successors always
/// keep the agent on an existing floor.
#[must_use]
pub fn successors(state: &State) -> Successors<'_> {
    assert!(
        state.agent_floor() < state.floor_count(),
        "agent floor {} out of range for {} floors",
        state.agent_floor(),
        state.floor_count()
    );

    let floor = state.agent_floor();

    // Distinct item types present on the agent's floor, with multiplicity.
    let mut present: Vec<(Item, u8)> = Vec::new();
    for kind in state.kinds() {
        let generators = state.generator_count(floor, kind);
        if generators > 0 {
            present.push((Item::generator(kind), generators));
        }
        let microchips = state.microchip_count(floor, kind);
        if microchips > 0 {
            present.push((Item::microchip(kind), microchips));
        }
    }

    // All size-1 and size-2 multisets. Index ordering i <= j makes each
    // unordered pair a single choice; i == j needs two copies.
    let mut cargos: Vec<Cargo> = Vec::with_capacity(present.len() * (present.len() + 3) / 2);
    for (i, &(first, first_count)) in present.iter().enumerate() {
        cargos.push(Cargo::single(first));
        for &(second, _) in &present[i + 1..] {
            cargos.push(Cargo::pair(first, second));
        }
        if first_count >= 2 {
            cargos.push(Cargo::pair(first, first));
        }
    }

    let below = floor.checked_sub(1);
    let above = if floor + 1 < state.floor_count() {
        Some(floor + 1)
    } else {
        None
    };

    Successors {
        base: state,
        cargos,
        destinations: [below, above],
        cargo_index: 0,
        destination_index: 0,
    }
}

/// Apply a cargo trip to `state`, producing the candidate successor.
///
/// The result is not legality-checked; [`successors`] filters.
#[must_use]
pub fn apply_cargo(state: &State, cargo: Cargo, destination: usize) -> State {
    let source = state.agent_floor();
    let mut next = state.clone();
    next.take(source, cargo.first);
    next.place(destination, cargo.first);
    if let Some(second) = cargo.second {
        next.take(source, second);
        next.place(destination, second);
    }
    next.set_agent_floor(destination);
    next
}

/// Lazy iterator over the legal successors of a state.
///
/// Finite and restartable: [`successors`] precomputes only the cargo list;
/// candidate states are built and filtered one at a time, keeping memory
/// bounded during wide branching.
pub struct Successors<'a> {
    base: &'a State,
    cargos: Vec<Cargo>,
    destinations: [Option<usize>; 2],
    cargo_index: usize,
    destination_index: usize,
}

impl Iterator for Successors<'_> {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        while self.cargo_index < self.cargos.len() {
            while self.destination_index < self.destinations.len() {
                let destination = self.destinations[self.destination_index];
                self.destination_index += 1;
                if let Some(destination) = destination {
                    let candidate =
                        apply_cargo(self.base, self.cargos[self.cargo_index], destination);
                    if is_legal(&candidate) {
                        return Some(candidate);
                    }
                }
            }
            self.destination_index = 0;
            self.cargo_index += 1;
        }
        None
    }
}
