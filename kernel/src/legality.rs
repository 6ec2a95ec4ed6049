//! The legality invariant: no unshielded Microchip next to a Generator.

use crate::state::State;

/// True iff `floor` holds no unshielded, mismatched Microchip.
///
/// A floor is illegal iff it holds at least one Generator AND at least one
/// Microchip whose kind has no Generator on the same floor. A floor without
/// Generators is always legal, as is an empty floor.
#[must_use]
pub fn floor_is_legal(state: &State, floor: usize) -> bool {
    let any_generator = state
        .kinds()
        .any(|kind| state.generator_count(floor, kind) > 0);
    if !any_generator {
        return true;
    }
    state.kinds().all(|kind| {
        state.microchip_count(floor, kind) == 0 || state.generator_count(floor, kind) > 0
    })
}

/// True iff no floor of `state` is illegal.
///
/// Pure and total; `O(floors * kinds)`.
#[must_use]
pub fn is_legal(state: &State) -> bool {
    (0..state.floor_count()).all(|floor| floor_is_legal(state, floor))
}
