// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registration and login business rules

use crate::error::AuthError;
use crate::username::is_valid_username;
use ident_core::{AuthCredentials, Hasher, Token, TokenGen, User};
use ident_storage::{RecordLog, StoreError, UserLog, UserStore};
use std::sync::Arc;
use tracing::info;

/// Called once per successful registration with the new identity's public
/// projection. Runs synchronously after the record is committed.
pub type RegisterHook = Box<dyn Fn(&User) + Send + Sync>;

/// The credential service: registration and login on top of the indexed
/// store and an injected hashing capability.
///
/// Never retries internally; whether a failed registration is retried is
/// the caller's decision.
pub struct AuthService<H, T, L: RecordLog = UserLog> {
    store: Arc<UserStore<L>>,
    hasher: H,
    token_gen: T,
    on_register: Option<RegisterHook>,
}

impl<H, T, L> AuthService<H, T, L>
where
    H: Hasher,
    T: TokenGen,
    L: RecordLog,
{
    pub fn new(store: Arc<UserStore<L>>, hasher: H, token_gen: T) -> Self {
        Self {
            store,
            hasher,
            token_gen,
            on_register: None,
        }
    }

    /// Install a hook invoked after each successful registration
    pub fn with_register_hook(mut self, hook: RegisterHook) -> Self {
        self.on_register = Some(hook);
        self
    }

    /// Create an account and issue its bearer token
    pub fn register(&self, credentials: &AuthCredentials) -> Result<Token, AuthError> {
        if !is_valid_username(&credentials.username) {
            return Err(AuthError::InvalidUsername);
        }
        // Fast-path rejection; the store re-checks under its write lock,
        // which is what actually closes the race between two concurrent
        // registrations for the same username.
        if self.store.exists(&credentials.username) {
            return Err(AuthError::UsernameTaken);
        }

        let digest = self
            .hasher
            .hash(&credentials.password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let token = self.token_gen.mint();

        let record = match self
            .store
            .create_user(&credentials.username, &digest, token)
        {
            Ok(record) => record,
            Err(StoreError::UsernameTaken(_)) => return Err(AuthError::UsernameTaken),
            Err(e) => return Err(AuthError::Internal(e.to_string())),
        };

        info!(username = %record.username, id = record.id, "registered new user");

        // The record is committed at this point; the hook cannot undo it.
        if let Some(hook) = &self.on_register {
            hook(&User::from(&record));
        }

        Ok(record.token)
    }

    /// Exchange valid credentials for the stored bearer token
    ///
    /// An unknown username and a wrong password are indistinguishable to
    /// the caller, so login reveals nothing about which accounts exist.
    /// Login never rotates the token.
    pub fn login(&self, credentials: &AuthCredentials) -> Result<Token, AuthError> {
        let Ok(user) = self.store.find_by_username(&credentials.username) else {
            return Err(AuthError::InvalidCredentials);
        };
        if !self
            .hasher
            .compare(&credentials.password, &user.password_digest)
        {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(user.token)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
