// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bearer tokens and token minting

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// An opaque bearer credential, issued once at registration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Token {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Mints fresh globally-unique tokens
pub trait TokenGen: Send + Sync {
    fn mint(&self) -> Token;
}

/// UUID-based token generator for production use (128-bit random)
#[derive(Clone, Default)]
pub struct UuidTokenGen;

impl TokenGen for UuidTokenGen {
    fn mint(&self) -> Token {
        Token(uuid::Uuid::new_v4().to_string())
    }
}

/// Sequential token generator for testing
#[derive(Clone)]
pub struct SequentialTokenGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialTokenGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialTokenGen {
    fn default() -> Self {
        Self::new("token")
    }
}

impl TokenGen for SequentialTokenGen {
    fn mint(&self) -> Token {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Token(format!("{}-{}", self.prefix, n))
    }
}
