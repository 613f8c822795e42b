use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Token claims model (transport-agnostic).
///
/// This is the fact set embedded in every issued token: who, what role, when
/// issued, when it expires. Claims are immutable once created; re-authorization
/// always derives fresh claims from a fresh login.
///
/// The shape is fixed: decoding rejects payloads with missing or mistyped
/// fields rather than defaulting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token was issued for.
    pub sub: String,

    /// Role granted at issue time. Stale after a role change until re-login.
    pub role: Role,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    /// Build claims for `sub` valid from `now` for `ttl`.
    ///
    /// `ttl` is a required, caller-supplied duration. There is deliberately
    /// no default that could be forgotten.
    pub fn new(sub: impl Into<String>, role: Role, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: sub.into(),
            role,
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    /// A token is expired at the instant `now == expires_at`, not one past it.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
