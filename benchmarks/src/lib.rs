//! Shared helpers for isotope benchmark suites.

#![forbid(unsafe_code)]

use isotope_kernel::item::{Item, Kind};
use isotope_kernel::state::State;

/// The classic two-kind instance (11-move minimum): the end-to-end solve
/// workload.
#[must_use]
pub fn classic_two_kind() -> State {
    let hydrogen = Kind::new(0);
    let lithium = Kind::new(1);
    let mut state = State::new(4, 2);
    state.place(0, Item::microchip(hydrogen));
    state.place(0, Item::microchip(lithium));
    state.place(1, Item::generator(hydrogen));
    state.place(2, Item::generator(lithium));
    state
}

/// An instance with `kind_count` matched pairs on the agent's floor: the
/// cargo fan-out workload for the successor enumeration benchmark.
#[must_use]
pub fn wide_floor(kind_count: u8) -> State {
    let mut state = State::new(4, usize::from(kind_count));
    for k in 0..kind_count {
        state.place(1, Item::generator(Kind::new(k)));
        state.place(1, Item::microchip(Kind::new(k)));
    }
    state.set_agent_floor(1);
    state
}
