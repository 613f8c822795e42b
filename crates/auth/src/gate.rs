//! Authorization gate: token verification composed with the role registry.
//!
//! The gate is the only surface the embedding application consults on a
//! protected request. All token failure detail is collapsed to
//! `Unauthenticated` here; the distinction between expired, malformed, and
//! bad-signature tokens exists only in internal logs, never in the decision
//! a caller can observe.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::claims::Claims;
use crate::codec::{TokenCodec, TokenError};
use crate::credentials::{CredentialError, Credentials, UserLookup, verify_credentials};
use crate::permissions::Permission;
use crate::registry::RolePermissionRegistry;

/// Externally visible denial category.
///
/// Callers map `Unauthenticated` to a 401-class response and `Forbidden` to a
/// 403-class response; that mapping is the transport layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Token absent, malformed, forged, or expired.
    Unauthenticated,
    /// Token valid, role lacks the required permission.
    Forbidden,
}

/// Outcome of an authorization check.
///
/// When allowed, the verified claims ride along so callers can identify the
/// subject without decoding the token a second time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationDecision {
    pub allowed: bool,
    pub reason: Option<DenialReason>,
    pub claims: Option<Claims>,
}

impl AuthorizationDecision {
    pub fn allow(claims: Claims) -> Self {
        Self {
            allowed: true,
            reason: None,
            claims: Some(claims),
        }
    }

    pub fn deny(reason: DenialReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            claims: None,
        }
    }
}

/// Login failure: bad credentials or a token that could not be issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Composes the token codec and the role-permission registry.
///
/// Stateless per call: each decision is a pure function of (token, now) and
/// the gate's immutable configuration, so concurrent use needs no locks.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    codec: TokenCodec,
    registry: RolePermissionRegistry,
}

impl AuthorizationGate {
    pub fn new(codec: TokenCodec, registry: RolePermissionRegistry) -> Self {
        Self { codec, registry }
    }

    /// Decide whether `token` grants `required` at time `now`.
    ///
    /// Terminal per request: no retry paths. Failure reasons are deliberately
    /// coarse; see the module docs.
    pub fn authorize(
        &self,
        token: &str,
        required: &Permission,
        now: DateTime<Utc>,
    ) -> AuthorizationDecision {
        let claims = match self.codec.verify(token, now) {
            Ok(claims) => claims,
            Err(e) => {
                // Internal logs keep the precise failure kind.
                tracing::debug!(error = %e, "token verification failed");
                return AuthorizationDecision::deny(DenialReason::Unauthenticated);
            }
        };

        if self.registry.grants(&claims.role, required) {
            AuthorizationDecision::allow(claims)
        } else {
            tracing::debug!(
                role = %claims.role,
                permission = %required,
                "role does not grant required permission"
            );
            AuthorizationDecision::deny(DenialReason::Forbidden)
        }
    }

    /// Verify credentials against `store` and issue a token for the record's
    /// role, valid from `now` for `ttl`.
    pub fn login(
        &self,
        credentials: &Credentials,
        store: &impl UserLookup,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, LoginError> {
        let record = verify_credentials(credentials, store)?;
        let token = self.codec.issue(record.username, record.role, now, ttl)?;
        Ok(token)
    }
}
