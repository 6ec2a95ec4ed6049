//! Canonical content hashing with domain separation.
//!
//! Algorithm: SHA-256 for all V1 artifacts. Each domain prefix is
//! null-terminated; exactly one place defines canonical hashing.

use isotope_kernel::state::State;
use sha2::{Digest, Sha256};

/// Domain prefix for state identity fingerprints.
pub const DOMAIN_STATE: &[u8] = b"ISOTOPE::STATE::V1\0";

/// Domain prefix for solve report digests.
/// Distinct from [`DOMAIN_STATE`] to prevent cross-domain collisions.
pub const DOMAIN_REPORT: &[u8] = b"ISOTOPE::REPORT::V1\0";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
///
/// Invariant: the inner string always contains exactly one `:` separator,
/// with non-empty substrings on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    /// Full string in `"algorithm:hex_digest"` format.
    full: String,
    /// Byte offset of the `:` separator.
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the format is invalid (missing colon, empty
    /// algorithm, or empty digest).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full string representation (`"algorithm:hex_digest"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Result format: `"sha256:<lowercase_hex>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hasher.finalize();
    ContentHash {
        full: format!("sha256:{}", hex::encode(digest)),
        colon: "sha256".len(),
    }
}

/// Fingerprint a state's identity bytes under [`DOMAIN_STATE`].
#[must_use]
pub fn state_fingerprint(state: &State) -> ContentHash {
    canonical_hash(DOMAIN_STATE, &state.identity_bytes())
}
