use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::Error;

/// Hashes a password with argon2id and returns the PHC string.
///
/// Hashing runs on the blocking thread pool so it does not stall the async workers.
pub async fn hash_password(password: &str) -> Result<String, Error> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(|e| Error::PasswordHashError(e.to_string()))?
}

/// Checks a password against a stored PHC string on the blocking thread pool.
///
/// A stored hash that cannot be parsed never verifies.
///
/// # Returns
/// - `Ok(bool)` - Whether the password matches
/// - `Err(Error::PasswordHashError)` - The verification task did not complete
pub async fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
    let password = password.to_owned();
    let stored_hash = stored_hash.to_owned();

    tokio::task::spawn_blocking(move || verify_blocking(&password, &stored_hash))
        .await
        .map_err(|e| Error::PasswordHashError(e.to_string()))
}

fn hash_blocking(password: &str) -> Result<String, Error> {
    let salt = SaltString::encode_b64(uuid::Uuid::new_v4().as_bytes())
        .map_err(|e| Error::PasswordHashError(e.to_string()))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHashError(e.to_string()))?;

    Ok(hash.to_string())
}

fn verify_blocking(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::warn!("Stored password hash could not be parsed");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
