//! `keygate-auth` — pure authentication/authorization core (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and storage: it consumes
//! already-parsed credentials and token strings and produces typed results.
//! Transport concerns (header/cookie extraction, status-code mapping) belong
//! to the embedding application.

pub mod claims;
pub mod codec;
pub mod credentials;
pub mod gate;
pub mod password;
pub mod permissions;
pub mod registry;
pub mod roles;

pub use claims::Claims;
pub use codec::{TokenCodec, TokenError};
pub use credentials::{
    Credentials, CredentialError, LookupError, UserLookup, UserRecord, verify_credentials,
};
pub use gate::{AuthorizationDecision, AuthorizationGate, DenialReason, LoginError};
pub use password::{PasswordError, hash_password, verify_password};
pub use permissions::Permission;
pub use registry::RolePermissionRegistry;
pub use roles::Role;
