//! Isotope Kernel: the pure domain model of the items-between-floors puzzle.
//!
//! An agent operates an elevator between the floors of a facility. Every
//! item on a floor is either a Generator or a Microchip of some kind; a
//! Microchip is safe next to foreign Generators only when its own matching
//! Generator shares the floor. The kernel models states, the legality
//! invariant, successor enumeration, and the admissible distance heuristic.
//! It knows nothing about search bookkeeping — that lives in
//! `isotope-search`.
//!
//! # Module Dependency Direction
//!
//! `item` ← `state` ← { `legality`, `heuristic` } ← `moves`
//!
//! One-way only. No cycles. `moves` consumes the legality predicate to
//! filter candidates; nothing in the kernel performs search.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod heuristic;
pub mod item;
pub mod legality;
pub mod moves;
pub mod state;
