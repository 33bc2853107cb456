// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory dual index over the durable log
//!
//! The single source of truth for identity lookups and creation: O(n)
//! replay at startup buys O(1) steady-state lookups. The schema is light
//! enough that holding every record in memory is cheap — 50 MB of RAM
//! covers well over 100 000 users.

use crate::config::StoreConfig;
use crate::log::{LogError, RecordLog, UserLog};
use ident_core::{Token, UserRecord};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from indexed-store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not replay user log: {0}")]
    LogUnreadable(#[source] LogError),
    #[error("could not append to user log: {0}")]
    WriteFailed(#[source] LogError),
    #[error("username already registered: {0}")]
    UsernameTaken(String),
}

/// Lookup miss for a username or token
///
/// Recoverable by the caller; never a system fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not found")]
pub struct NotFound;

struct StoreInner<L> {
    log: L,
    /// Records in creation order. Both maps key into this vec by position
    /// (a stable surrogate — records are never removed or reordered), not
    /// by reference.
    users: Vec<UserRecord>,
    by_username: HashMap<String, usize>,
    by_token: HashMap<String, usize>,
    next_id: u64,
}

/// Persistent in-memory store of user records
///
/// Every mutation goes through the log before it is acknowledged. The
/// indexes, the record sequence, and the id counter all live behind one
/// read/write lock, so the entire append-then-index sequence is a single
/// critical section and lookups can run concurrently with each other.
pub struct UserStore<L: RecordLog = UserLog> {
    inner: RwLock<StoreInner<L>>,
}

impl UserStore<UserLog> {
    /// Open the log at `path` and rebuild the indexes from it
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let log = UserLog::open(path).map_err(StoreError::LogUnreadable)?;
        Self::with_log(log)
    }

    /// Open the store described by a bootstrap config
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::open(&config.db_path)
    }
}

impl<L: RecordLog> UserStore<L> {
    /// Build a store over an already-opened log
    ///
    /// Fails with `LogUnreadable` if replay fails; no partially built
    /// store is ever returned.
    pub fn with_log(mut log: L) -> Result<Self, StoreError> {
        let users = log.read_all().map_err(StoreError::LogUnreadable)?;

        let mut by_username = HashMap::with_capacity(users.len());
        let mut by_token = HashMap::with_capacity(users.len());
        let mut max_id = 0;
        for (position, user) in users.iter().enumerate() {
            by_username.insert(user.username.clone(), position);
            by_token.insert(user.token.as_str().to_string(), position);
            max_id = max_id.max(user.id);
        }

        info!(records = users.len(), "rebuilt user indexes from log");

        Ok(Self {
            inner: RwLock::new(StoreInner {
                log,
                users,
                by_username,
                by_token,
                next_id: max_id + 1,
            }),
        })
    }

    /// O(1) membership check against the username index
    pub fn exists(&self, username: &str) -> bool {
        self.read().by_username.contains_key(username)
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().users.is_empty()
    }

    pub fn find_by_username(&self, username: &str) -> Result<UserRecord, NotFound> {
        let inner = self.read();
        match inner.by_username.get(username) {
            Some(&position) => inner.users.get(position).cloned().ok_or(NotFound),
            None => {
                debug!(username, "username lookup miss");
                Err(NotFound)
            }
        }
    }

    pub fn find_by_token(&self, token: &str) -> Result<UserRecord, NotFound> {
        let inner = self.read();
        match inner.by_token.get(token) {
            Some(&position) => inner.users.get(position).cloned().ok_or(NotFound),
            None => {
                debug!("token lookup miss");
                Err(NotFound)
            }
        }
    }

    /// Create a record: allocate the next id, append durably, then index
    ///
    /// The whole sequence runs under the write lock, so two concurrent
    /// creates can neither observe the same id nor both win the same
    /// username. If the append fails, in-memory state is left completely
    /// unchanged and the error is reported as `WriteFailed`.
    ///
    /// Returns an owned copy of the stored record, so callers cannot
    /// mutate index-owned state.
    pub fn create_user(
        &self,
        username: &str,
        password_digest: &str,
        token: Token,
    ) -> Result<UserRecord, StoreError> {
        let mut inner = self.write();

        if inner.by_username.contains_key(username) {
            return Err(StoreError::UsernameTaken(username.to_string()));
        }

        let record = UserRecord {
            id: inner.next_id,
            username: username.to_string(),
            password_digest: password_digest.to_string(),
            token,
        };

        // Commit point: the append must fully succeed before any index
        // mutation begins.
        inner.log.append(&record).map_err(StoreError::WriteFailed)?;

        let position = inner.users.len();
        inner.by_username.insert(record.username.clone(), position);
        inner
            .by_token
            .insert(record.token.as_str().to_string(), position);
        inner.users.push(record.clone());
        inner.next_id += 1;

        Ok(record)
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner<L>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner<L>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
