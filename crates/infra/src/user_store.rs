use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::anyhow;

use keygate_auth::{LookupError, Role, UserLookup, UserRecord, hash_password};
use keygate_core::UserId;

/// In-memory user store keyed by username.
///
/// Intended for tests/dev. A production deployment implements [`UserLookup`]
/// over its own persistence.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user, hashing the plaintext password on the way in.
    ///
    /// Replaces any existing record under the same username.
    pub fn seed_user(
        &self,
        username: impl Into<String>,
        password: &str,
        role: Role,
    ) -> anyhow::Result<UserId> {
        let username = username.into();
        let record = UserRecord {
            id: UserId::new(),
            username: username.clone(),
            password_hash: hash_password(password)?,
            role,
        };
        let id = record.id;

        let mut users = self.users.write().map_err(|_| anyhow!("lock poisoned"))?;
        users.insert(username, record);
        Ok(id)
    }
}

impl UserLookup for InMemoryUserStore {
    fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, LookupError> {
        let users = self
            .users
            .read()
            .map_err(|_| LookupError("lock poisoned".to_string()))?;
        Ok(users.get(username).cloned())
    }
}
