//! Password hashing
//!
//! Argon2id with per-password random salts, stored as PHC strings.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{LedgerError, LedgerResult};

/// Hash a password into a PHC string suitable for storage.
pub fn hash_password(password: &str) -> LedgerResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| LedgerError::Crypto(e.to_string()))
}

/// Verify a password against a stored PHC string.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash itself
/// cannot be parsed.
pub fn verify_password(password: &str, stored_hash: &str) -> LedgerResult<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| LedgerError::Crypto(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("secret123").expect("hash");
        assert!(verify_password("secret123", &hash).expect("verify"));
        assert!(!verify_password("secret124", &hash).expect("verify"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("secret123").expect("hash");
        let b = hash_password("secret123").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_stored_hash_is_an_error() {
        assert!(verify_password("secret123", "not-a-phc-string").is_err());
    }
}
