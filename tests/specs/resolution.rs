// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token resolution: the contract consumed by auth middleware

use crate::prelude::*;
use ident_auth::{AuthError, TokenResolver};
use ident_core::AuthCredentials;

#[test]
fn issued_token_resolves_to_the_public_projection() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir.path().join("users.jsonl"));
    let service = service_over(store.clone());

    let token = service.register(&AuthCredentials::new("bob", "p")).unwrap();

    let resolver = TokenResolver::new(store);
    let user = resolver.resolve(Some(token.as_str())).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "bob");
}

#[test]
fn any_other_string_is_rejected_as_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir.path().join("users.jsonl"));
    let service = service_over(store.clone());
    service.register(&AuthCredentials::new("bob", "p")).unwrap();

    let resolver = TokenResolver::new(store);
    assert_eq!(
        resolver.resolve(Some("made-up-token")).unwrap_err(),
        AuthError::TokenInvalid
    );
}

#[test]
fn a_missing_token_is_rejected_as_required() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = TokenResolver::new(open_store(&dir.path().join("users.jsonl")));

    assert_eq!(resolver.resolve(None).unwrap_err(), AuthError::TokenRequired);
}
