// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ident-storage: durable log and indexed store for identity records
//!
//! The append-only log is the source of truth; the in-memory indexes are
//! a cache rebuilt by replaying it at startup.

pub mod config;
pub mod log;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use log::{LogError, RecordLog, UserLog};
pub use store::{NotFound, StoreError, UserStore};
