// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only durable log of user records
//!
//! One JSON line per record with an embedded CRC32 checksum. Every append
//! is fsync'd before returning; replay stops at the first line that fails
//! to parse or verify, so a crash mid-append never loses prior records.

use ident_core::UserRecord;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur in durable-log operations
#[derive(Debug, Error)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only record storage
///
/// Calls are serialized by the indexed store, which is the single writer;
/// implementations hold no lock of their own.
pub trait RecordLog: Send + Sync {
    /// Replay every complete record in append order
    ///
    /// A missing backing file is an empty record set, not an error.
    fn read_all(&mut self) -> Result<Vec<UserRecord>, LogError>;

    /// Append one record; it must be visible to every later `read_all`
    /// once this returns
    fn append(&mut self, record: &UserRecord) -> Result<(), LogError>;
}

/// A single line in the log file
#[derive(Debug, Serialize, Deserialize)]
struct LogLine {
    record: UserRecord,
    /// CRC32 of the serialized record
    checksum: u32,
}

impl LogLine {
    fn new(record: &UserRecord) -> Result<Self, LogError> {
        Ok(Self {
            checksum: checksum_of(record)?,
            record: record.clone(),
        })
    }

    fn verify(&self) -> bool {
        checksum_of(&self.record).is_ok_and(|sum| sum == self.checksum)
    }
}

fn checksum_of(record: &UserRecord) -> Result<u32, LogError> {
    let json = serde_json::to_string(record)?;
    Ok(crc32fast::hash(json.as_bytes()))
}

/// File-backed log, one record per line
pub struct UserLog {
    path: PathBuf,
    file: File,
}

impl UserLog {
    /// Open or create the backing file at the given path
    pub fn open(path: &Path) -> Result<Self, LogError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Get the path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordLog for UserLog {
    fn read_all(&mut self) -> Result<Vec<UserRecord>, LogError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let parsed: LogLine = match serde_json::from_str(&line) {
                Ok(p) => p,
                Err(_) => {
                    // Truncated write from a crash mid-append; everything
                    // before this line is intact.
                    warn!(line = number + 1, "stopping replay at unparseable log line");
                    break;
                }
            };
            if !parsed.verify() {
                warn!(line = number + 1, "stopping replay at checksum mismatch");
                break;
            }

            records.push(parsed.record);
        }

        Ok(records)
    }

    fn append(&mut self, record: &UserRecord) -> Result<(), LogError> {
        let line = serde_json::to_string(&LogLine::new(record)?)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;

        // Critical: sync to ensure durability before returning
        self.file.sync_all()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
