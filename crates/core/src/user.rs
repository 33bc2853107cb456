// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User entities

use crate::token::Token;
use serde::{Deserialize, Serialize};

/// A user record as persisted in the durable log
///
/// Records are immutable once created: the store assigns `id`, and the
/// username and token never change afterwards. The digest is an opaque
/// output of the hashing capability, never a plaintext password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    pub password_digest: String,
    pub token: Token,
}

/// Public projection of a user, safe to hand to delivery layers
///
/// Carries neither the digest nor the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
}

impl From<&UserRecord> for User {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username.clone(),
        }
    }
}
