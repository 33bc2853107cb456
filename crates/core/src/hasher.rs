// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Password hashing capability seam

use thiserror::Error;

/// Catastrophic failure inside the hashing capability
#[derive(Debug, Error)]
#[error("hashing failed: {0}")]
pub struct HashError(pub String);

/// Hashes passwords and verifies them against stored digests
///
/// `hash` fails only on internal error. `compare` never fails: a
/// malformed digest is simply a mismatch.
pub trait Hasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, HashError>;
    fn compare(&self, password: &str, digest: &str) -> bool;
}
