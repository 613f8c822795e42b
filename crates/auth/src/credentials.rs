//! Credential verification against an injected user store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use keygate_core::UserId;

use crate::{Role, password};

/// A username/password pair as submitted at login.
///
/// Ephemeral: never persisted and never logged (the `Debug` impl redacts the
/// password).
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A stored user as the core sees it.
///
/// Lifecycle (creation, role changes, deletion) is owned entirely by the
/// external store; the core only reads records during verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    /// PHC-format Argon2id hash. Never a plaintext password.
    pub password_hash: String,
    pub role: Role,
}

/// Store-side failure surfaced by a [`UserLookup`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("user store error: {0}")]
pub struct LookupError(pub String);

/// Lookup capability injected into credential verification.
///
/// Implemented by the real store or a stub; the core treats it as a single
/// call returning a record or a not-found signal.
pub trait UserLookup {
    fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, LookupError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// Unknown username and wrong password collapse to this one value so a
    /// caller cannot learn which half was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] LookupError),
}

/// Validate a username/password pair against the injected store.
///
/// Pure function of (credentials, store): read-only store access, no other
/// side effects. Empty username or password fails closed with the same
/// uniform error as a bad login.
pub fn verify_credentials(
    credentials: &Credentials,
    store: &impl UserLookup,
) -> Result<UserRecord, CredentialError> {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return Err(CredentialError::InvalidCredentials);
    }

    match store.find_by_username(&credentials.username)? {
        Some(record) if password::verify_password(&credentials.password, &record.password_hash) => {
            Ok(record)
        }
        Some(_) => Err(CredentialError::InvalidCredentials),
        None => {
            // Keep the unknown-username path in the same timing class as a
            // failed hash comparison.
            password::burn_verification(&credentials.password);
            Err(CredentialError::InvalidCredentials)
        }
    }
}
