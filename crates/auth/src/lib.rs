// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ident-auth: registration, login, and bearer-token resolution

mod error;
mod hasher;
mod resolver;
mod service;
mod username;

pub use error::AuthError;
pub use hasher::Argon2Hasher;
pub use resolver::TokenResolver;
pub use service::{AuthService, RegisterHook};
pub use username::{is_valid_username, MAX_USERNAME_LENGTH};
