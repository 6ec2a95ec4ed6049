//! Named puzzle fixtures shared by the lock tests and the fixture binary.

use isotope_kernel::item::{Item, Kind};
use isotope_kernel::state::State;

pub const HYDROGEN: Kind = Kind::new(0);
pub const LITHIUM: Kind = Kind::new(1);

/// The classic two-kind instance.
///
/// Floor 0: hydrogen chip, lithium chip; floor 1: hydrogen generator;
/// floor 2: lithium generator; floor 3: empty. Agent at floor 0.
/// Minimum solution: exactly 11 moves.
#[must_use]
pub fn classic_two_kind() -> State {
    let mut state = State::new(4, 2);
    state.place(0, Item::microchip(HYDROGEN));
    state.place(0, Item::microchip(LITHIUM));
    state.place(1, Item::generator(HYDROGEN));
    state.place(2, Item::generator(LITHIUM));
    state
}

/// The classic instance minus the hydrogen generator.
///
/// The hydrogen chip has no matching generator anywhere, so it can never
/// share the goal floor with the lithium generator: provably unsolvable.
#[must_use]
pub fn missing_generator() -> State {
    let mut state = State::new(4, 2);
    state.place(0, Item::microchip(HYDROGEN));
    state.place(0, Item::microchip(LITHIUM));
    state.place(2, Item::generator(LITHIUM));
    state
}

/// One matched pair, two floors: solvable in a single trip.
#[must_use]
pub fn matched_pair() -> State {
    let mut state = State::new(2, 1);
    state.place(0, Item::generator(HYDROGEN));
    state.place(0, Item::microchip(HYDROGEN));
    state
}

/// One matched pair spread over three floors.
#[must_use]
pub fn spread_pair() -> State {
    let mut state = State::new(3, 1);
    state.place(0, Item::microchip(HYDROGEN));
    state.place(1, Item::generator(HYDROGEN));
    state
}

/// Two matched pairs over three floors.
#[must_use]
pub fn two_pairs_three_floors() -> State {
    let mut state = State::new(3, 2);
    state.place(0, Item::generator(HYDROGEN));
    state.place(0, Item::microchip(HYDROGEN));
    state.place(1, Item::generator(LITHIUM));
    state.place(1, Item::microchip(LITHIUM));
    state
}

/// A 1-floor world holding items: immediately the goal.
#[must_use]
pub fn one_floor() -> State {
    let mut state = State::new(1, 2);
    state.place(0, Item::generator(HYDROGEN));
    state.place(0, Item::microchip(LITHIUM));
    state
}

/// A chip stranded below a foreign generator in a two-floor world:
/// no legal move exists at all.
#[must_use]
pub fn stranded_chip() -> State {
    let mut state = State::new(2, 2);
    state.place(0, Item::microchip(LITHIUM));
    state.place(1, Item::generator(HYDROGEN));
    state
}

/// Look up a fixture by name (used by the `solve_fixture` binary).
#[must_use]
pub fn by_name(name: &str) -> Option<State> {
    match name {
        "classic_two_kind" => Some(classic_two_kind()),
        "missing_generator" => Some(missing_generator()),
        "matched_pair" => Some(matched_pair()),
        "spread_pair" => Some(spread_pair()),
        "two_pairs_three_floors" => Some(two_pairs_three_floors()),
        "one_floor" => Some(one_floor()),
        "stranded_chip" => Some(stranded_chip()),
        _ => None,
    }
}

/// Every fixture name accepted by [`by_name`].
pub const ALL_FIXTURES: [&str; 7] = [
    "classic_two_kind",
    "missing_generator",
    "matched_pair",
    "spread_pair",
    "two_pairs_three_floors",
    "one_floor",
    "stranded_chip",
];
