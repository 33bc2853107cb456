// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Username validation rules

/// Longest allowed username, in bytes
pub const MAX_USERNAME_LENGTH: usize = 20;

/// A username is valid iff it is 1 to 20 characters of `[A-Za-z0-9_]`
/// and does not start with an underscore.
pub fn is_valid_username(username: &str) -> bool {
    if username.is_empty() || username.len() > MAX_USERNAME_LENGTH {
        return false;
    }
    if username.starts_with('_') {
        return false;
    }
    username
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
#[path = "username_tests.rs"]
mod tests;
