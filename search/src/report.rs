//! Canonical solve report artifact.
//!
//! A `SolveReport` binds the root state fingerprint, the outcome, the move
//! count, the per-state fingerprints of the path, and the run metrics into
//! one JSON artifact. Serialization is canonical — sorted keys, compact,
//! integers only — so equal solves produce byte-identical reports and equal
//! digests, in-process or across processes.

use isotope_kernel::state::State;
use serde_json::{json, Value};

use crate::fingerprint::{canonical_hash, state_fingerprint, ContentHash, DOMAIN_REPORT};
use crate::solve::{Outcome, SolveResult};

/// Deterministic summary of one solve run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Fingerprint of the initial state.
    pub root_state_fingerprint: ContentHash,
    /// `"solved"` or `"unsolvable"`.
    pub outcome: &'static str,
    /// Minimum move count; `None` when unsolvable.
    pub moves: Option<u64>,
    /// Fingerprint of every state along the path, initial state first.
    pub path_fingerprints: Vec<ContentHash>,
    /// Run counters, copied from [`crate::solve::SearchMetrics`].
    pub expansions: u64,
    pub nodes_generated: u64,
    pub duplicates_suppressed: u64,
    pub frontier_high_water: u64,
}

impl SolveReport {
    /// Build a report from a solve run.
    #[must_use]
    pub fn build(initial: &State, result: &SolveResult) -> Self {
        let (outcome, moves, path_fingerprints) = match &result.outcome {
            Outcome::Solved { path } => (
                "solved",
                Some((path.len() - 1) as u64),
                path.iter().map(state_fingerprint).collect(),
            ),
            Outcome::Unsolvable => ("unsolvable", None, Vec::new()),
        };
        Self {
            root_state_fingerprint: state_fingerprint(initial),
            outcome,
            moves,
            path_fingerprints,
            expansions: result.metrics.expansions,
            nodes_generated: result.metrics.nodes_generated,
            duplicates_suppressed: result.metrics.duplicates_suppressed,
            frontier_high_water: result.metrics.frontier_high_water,
        }
    }

    /// The report as a JSON value with deterministic key order.
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "root_state_fingerprint": self.root_state_fingerprint.as_str(),
            "outcome": self.outcome,
            "moves": self.moves,
            "path_fingerprints": self
                .path_fingerprints
                .iter()
                .map(ContentHash::as_str)
                .collect::<Vec<_>>(),
            "metrics": {
                "expansions": self.expansions,
                "nodes_generated": self.nodes_generated,
                "duplicates_suppressed": self.duplicates_suppressed,
                "frontier_high_water": self.frontier_high_water,
            },
        })
    }

    /// Canonical bytes: compact JSON with lexicographically sorted keys
    /// (the default `serde_json` map ordering).
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failure.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_value())
    }

    /// Content digest of the canonical bytes under [`DOMAIN_REPORT`].
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failure.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        Ok(canonical_hash(DOMAIN_REPORT, &self.canonical_bytes()?))
    }
}
