//! Token encoding and verification.
//!
//! Wire format: `base64url(claims JSON) + "." + base64url(HMAC-SHA256 tag)`.
//! The tag is computed over the *encoded* payload segment, so verification
//! never touches claim content before the signature has been checked.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

use crate::{Claims, Role};

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token cannot be split into its structural parts, or its payload
    /// does not decode into well-formed claims.
    #[error("malformed token")]
    Malformed,

    /// The integrity tag does not match the payload.
    #[error("token signature mismatch")]
    BadSignature,

    /// `expires_at` has passed.
    #[error("token has expired")]
    Expired,

    /// The signing secret was rejected by the MAC implementation.
    #[error("signing key rejected")]
    KeyRejected,
}

/// Signs claims into tokens and verifies tokens back into claims.
///
/// The secret is injected once at construction and never mutated, so a single
/// codec is safe to share across any number of concurrent callers.
#[derive(Clone)]
pub struct TokenCodec {
    secret: Vec<u8>,
}

impl TokenCodec {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a token for `sub` with `role`, valid from `now` for `ttl`.
    ///
    /// `ttl` is required. Callers own the TTL policy; the codec has no default.
    pub fn issue(
        &self,
        sub: impl Into<String>,
        role: Role,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.encode(&Claims::new(sub, role, now, ttl))
    }

    /// Encode fully-formed claims into a signed token string.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let payload = serde_json::to_vec(claims).map_err(|e| {
            tracing::error!(error = %e, "failed to serialize claims");
            TokenError::Malformed
        })?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload);

        let mut mac = self.keyed_mac()?;
        mac.update(payload_b64.as_bytes());
        let tag_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{payload_b64}.{tag_b64}"))
    }

    /// Verify a token and return its claims.
    ///
    /// Check order is fixed: structure, signature, payload shape, time window,
    /// expiry. The signature gate comes before any decoding of claim content,
    /// so a forged token learns nothing about claim structure.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let (payload_b64, tag_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;
        if payload_b64.is_empty() || tag_b64.is_empty() {
            return Err(TokenError::Malformed);
        }
        let tag = URL_SAFE_NO_PAD
            .decode(tag_b64)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = self.keyed_mac()?;
        mac.update(payload_b64.as_bytes());
        // Constant-time comparison.
        mac.verify_slice(&tag)
            .map_err(|_| TokenError::BadSignature)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Malformed)?;
        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if claims.expires_at <= claims.issued_at {
            return Err(TokenError::Malformed);
        }
        if claims.is_expired(now) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn keyed_mac(&self) -> Result<HmacSha256, TokenError> {
        HmacSha256::new_from_slice(&self.secret).map_err(|e| {
            tracing::error!(error = %e, "failed to create HMAC key");
            TokenError::KeyRejected
        })
    }
}

impl core::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // The secret never appears in logs.
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}
