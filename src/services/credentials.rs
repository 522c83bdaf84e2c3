//! Password hashing for the mock credential store
//!
//! Hashes are scrypt PHC strings. Hashing is CPU bound, so async callers run
//! it on the blocking pool.

use scrypt::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Params, Scrypt,
};
use crate::utils::errors::{YogaBookError, Result};

fn params(log_n: u8) -> Result<Params> {
    Params::new(log_n, 8, 1, Params::RECOMMENDED_LEN)
        .map_err(|e| YogaBookError::Config(format!("Invalid scrypt parameters: {}", e)))
}

/// Hash a password with the given cost
pub fn hash_password(password: &str, log_n: u8) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Scrypt
        .hash_password_customized(password.as_bytes(), None, None, params(log_n)?, &salt)
        .map_err(|e| YogaBookError::Authentication(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a password against a stored hash
pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(hash) => Scrypt.verify_password(password.as_bytes(), &hash).is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is malformed");
            false
        }
    }
}

/// Hash on the blocking pool
pub async fn hash_password_async(password: String, log_n: u8) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password, log_n))
        .await
        .map_err(|e| YogaBookError::Authentication(format!("Password hashing task failed: {}", e)))?
}

/// Verify on the blocking pool
pub async fn verify_password_async(password: String, stored: String) -> bool {
    tokio::task::spawn_blocking(move || verify_password(&password, &stored))
        .await
        .unwrap_or(false)
}
