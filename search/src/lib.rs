//! Isotope Search: deterministic A* over legal puzzle configurations.
//!
//! This crate provides the search layer for the items-between-floors
//! engine. It depends only on `isotope_kernel`.
//!
//! # Crate dependency graph
//!
//! ```text
//! isotope_kernel  ←  isotope_search  ←  lock-tests / benchmarks
//! (pure domain)      (frontier, driver)  (fixtures, locks, benches)
//! ```
//!
//! # Key types
//!
//! - [`solve::solve`] — the A* entry point
//! - [`solve::Outcome`] — `Solved { path }` or `Unsolvable`
//! - [`node::Node`] — frontier node with deterministic ordering
//! - [`frontier::BestFirstFrontier`] — min-priority frontier
//! - [`report::SolveReport`] — canonical JSON solve artifact
//! - [`error::SolveError`] — pre-flight failures (and nothing else)

#![forbid(unsafe_code)]

pub mod error;
pub mod fingerprint;
pub mod frontier;
pub mod node;
pub mod report;
pub mod solve;
