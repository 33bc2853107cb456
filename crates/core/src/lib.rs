// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ident-core: entities and capability seams for the identity store
//!
//! This crate provides:
//! - The persisted `UserRecord` entity and its public `User` projection
//! - Transient values exchanged with clients (`AuthCredentials`)
//! - Capability traits for password hashing and token minting

pub mod credentials;
pub mod hasher;
pub mod token;
pub mod user;

// Re-exports
pub use credentials::AuthCredentials;
pub use hasher::{HashError, Hasher};
pub use token::{SequentialTokenGen, Token, TokenGen, UuidTokenGen};
pub use user::{User, UserRecord};
