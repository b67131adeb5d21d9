//! # Password hashing and verification: Argon2id
//!
//! - [`hash_password`] hashes with a fresh [`OsRng`] salt and the default Argon2id
//!   parameters and returns a PHC-format string (`$argon2id$v=19$...`). Operators
//!   put the output in `ADMIN_PASSWORD_HASH`.
//! - [`verify_password`] checks a plaintext against a PHC string: `Ok(true)` on a
//!   match, `Ok(false)` on a mismatch, `Err` if the stored hash is malformed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::ApiError;

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Config(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| ApiError::Config(format!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("9gogetters9").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("9gogetters9", &hash).unwrap());
        assert!(!verify_password("9GoGetters9", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("anything", "plaintext-not-a-hash").is_err());
    }
}
