//! Password hashing and verification (Argon2id, PHC string format).

use std::sync::LazyLock;

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password hashing failed")]
    Hash,
}

/// Hash a plaintext password into a PHC-format string (random salt).
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::Hash)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// An unparseable stored hash verifies as false (fail-closed), never as an
/// error the caller could distinguish.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

// Hash of a fixed throwaway value, computed once per process.
static DECOY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("keygate.decoy").unwrap_or_default());

/// Burn one verification's worth of work without verifying anything.
///
/// Called on the unknown-username path so that lookups for existing and
/// non-existing users stay in the same timing class.
pub(crate) fn burn_verification(password: &str) {
    let _ = verify_password(password, &DECOY_HASH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_accepts_correct_password() {
        let hash = hash_password("s3cret").unwrap();
        assert!(verify_password("s3cret", &hash));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("s3cret").unwrap();
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_stored_hash_fails_closed() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }
}
