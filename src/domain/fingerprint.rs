//! Artifact content fingerprinting.
//!
//! The remote service reports a `CodeSha256` for the deployed artifact: the
//! SHA-256 digest of the zip bytes, standard-base64 encoded. Producing the
//! byte-identical encoding locally lets the deploy path skip the upload when
//! the strings compare equal.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

/// Compute the base64-encoded SHA-256 digest of `bytes`.
///
/// Deterministic and pure — same input, same string, every call.
#[must_use]
pub fn fingerprint(bytes: &[u8]) -> String {
    STANDARD.encode(Sha256::digest(bytes))
}

// ── Unit tests ───────────────────────────────────────────────────────────────
