// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store bootstrap configuration

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from parsing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Where the backing file lives
///
/// Absence of the file is not an error; it is treated as an empty
/// identity set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the append-only database file
    pub db_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("ident.db.jsonl"),
        }
    }
}

impl StoreConfig {
    /// Parse from TOML, e.g. `db_path = "/var/lib/ident/users.jsonl"`
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}
