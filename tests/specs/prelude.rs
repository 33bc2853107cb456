// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the behavioral specs

use ident_auth::AuthService;
use ident_core::{HashError, Hasher, UuidTokenGen};
use ident_storage::UserStore;
use std::path::Path;
use std::sync::Arc;

/// Reversible stand-in for the real hasher, fast enough for the bulk
/// properties (argon2 is deliberately slow)
pub struct StubHasher;

impl Hasher for StubHasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    fn compare(&self, password: &str, digest: &str) -> bool {
        digest == format!("hashed:{password}")
    }
}

/// Open (or reopen) the store backing `path`
pub fn open_store(path: &Path) -> Arc<UserStore> {
    Arc::new(UserStore::open(path).unwrap())
}

/// A credential service over an already-open store
pub fn service_over(store: Arc<UserStore>) -> AuthService<StubHasher, UuidTokenGen> {
    AuthService::new(store, StubHasher, UuidTokenGen)
}

/// A credential service over the store backing `path`
pub fn open_service(path: &Path) -> AuthService<StubHasher, UuidTokenGen> {
    service_over(open_store(path))
}
