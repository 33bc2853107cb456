// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Login correctness against the real argon2 hasher

use crate::prelude::*;
use ident_auth::{Argon2Hasher, AuthError, AuthService};
use ident_core::{AuthCredentials, UuidTokenGen};

#[test]
fn login_returns_the_token_issued_at_registration() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir.path().join("users.jsonl"));
    let service = AuthService::new(store, Argon2Hasher, UuidTokenGen);

    let registered = service
        .register(&AuthCredentials::new("alice_1", "p"))
        .unwrap();
    let logged_in = service
        .login(&AuthCredentials::new("alice_1", "p"))
        .unwrap();
    assert_eq!(logged_in, registered);
}

#[test]
fn wrong_password_and_unknown_username_fail_identically() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir.path().join("users.jsonl"));
    let service = AuthService::new(store, Argon2Hasher, UuidTokenGen);

    service
        .register(&AuthCredentials::new("alice_1", "p"))
        .unwrap();

    assert_eq!(
        service
            .login(&AuthCredentials::new("alice_1", "wrong"))
            .unwrap_err(),
        AuthError::InvalidCredentials
    );
    assert_eq!(
        service
            .login(&AuthCredentials::new("nobody", "p"))
            .unwrap_err(),
        AuthError::InvalidCredentials
    );
}

#[test]
fn login_works_after_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.jsonl");

    let registered = {
        let service = AuthService::new(open_store(&path), Argon2Hasher, UuidTokenGen);
        service
            .register(&AuthCredentials::new("alice_1", "p"))
            .unwrap()
    };

    let service = AuthService::new(open_store(&path), Argon2Hasher, UuidTokenGen);
    let logged_in = service
        .login(&AuthCredentials::new("alice_1", "p"))
        .unwrap();
    assert_eq!(logged_in, registered);
}
