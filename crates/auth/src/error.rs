// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client-facing error taxonomy for the credential service

use thiserror::Error;

/// Errors surfaced by the credential service and token resolver
///
/// Client-facing variants carry a stable machine-readable code for the
/// delivery layer; `Internal` must be mapped to a generic failure there
/// without leaking detail to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("usernames can only contain latin characters, digits and underscores, cannot start with an underscore, and cannot be longer than 20 characters")]
    InvalidUsername,
    #[error("a user with that username already exists")]
    UsernameTaken,
    #[error("login failed: username and password don't match")]
    InvalidCredentials,
    #[error("accessing this resource requires authentication credentials")]
    TokenRequired,
    #[error("the auth token provided is invalid")]
    TokenInvalid,
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable code for wire serialization
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidUsername => "username-invalid",
            AuthError::UsernameTaken => "username-taken",
            AuthError::InvalidCredentials => "invalid-credentials",
            AuthError::TokenRequired => "token-required",
            AuthError::TokenInvalid => "token-invalid",
            AuthError::Internal(_) => "internal",
        }
    }

    /// True for errors the delivery layer may surface verbatim
    pub fn is_client_facing(&self) -> bool {
        !matches!(self, AuthError::Internal(_))
    }
}
