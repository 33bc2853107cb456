// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bearer-token resolution for delivery-layer middleware
//!
//! Middleware extracts the raw token from the request and calls
//! `resolve`; on success it attaches the returned projection to the
//! request's processing context. A missing token and an unknown token
//! are distinct failures so the delivery layer can report them apart.

use crate::error::AuthError;
use ident_core::User;
use ident_storage::{RecordLog, UserLog, UserStore};
use std::sync::Arc;
use tracing::debug;

/// Resolves bearer tokens to identities on every authenticated request
pub struct TokenResolver<L: RecordLog = UserLog> {
    store: Arc<UserStore<L>>,
}

impl<L: RecordLog> TokenResolver<L> {
    pub fn new(store: Arc<UserStore<L>>) -> Self {
        Self { store }
    }

    /// Resolve a raw bearer token to the identity's public projection
    pub fn resolve(&self, raw: Option<&str>) -> Result<User, AuthError> {
        let token = match raw {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AuthError::TokenRequired),
        };
        match self.store.find_by_token(token) {
            Ok(record) => Ok(User::from(&record)),
            Err(_) => {
                debug!("rejecting request with unknown token");
                Err(AuthError::TokenInvalid)
            }
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
