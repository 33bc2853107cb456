// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durability round-trip: a re-initialized store reproduces every lookup

use crate::prelude::*;
use ident_core::AuthCredentials;

#[test]
fn reopened_store_reproduces_all_lookups() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.jsonl");

    let before = {
        let store = open_store(&path);
        let service = service_over(store.clone());
        let mut created = Vec::new();
        for i in 0..50 {
            let username = format!("user_{i}");
            service
                .register(&AuthCredentials::new(username.clone(), "p"))
                .unwrap();
            created.push(store.find_by_username(&username).unwrap());
        }
        created
    };

    // Fresh process: rebuild everything from the log alone
    let store = open_store(&path);
    assert_eq!(store.len(), 50);
    for record in &before {
        assert_eq!(&store.find_by_username(&record.username).unwrap(), record);
        assert_eq!(&store.find_by_token(record.token.as_str()).unwrap(), record);
    }
}
