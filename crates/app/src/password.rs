//! Password hashing with argon2id and a random per-user salt.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};

use holocron_domain::error::HolocronError;

use crate::ports::PasswordHash;

/// Hash `password` into a PHC string suitable for storage.
///
/// # Errors
///
/// Returns [`HolocronError::Internal`] if the hasher rejects its parameters.
pub fn hash(password: &str) -> Result<PasswordHash, HolocronError> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| HolocronError::Internal(Box::new(err)))?;
    Ok(PasswordHash(hashed.to_string()))
}

/// Run [`hash`] on the blocking thread pool.
///
/// # Errors
///
/// Returns [`HolocronError::Internal`] if hashing fails or the blocking task
/// panics.
pub async fn hash_blocking(password: String) -> Result<PasswordHash, HolocronError> {
    tokio::task::spawn_blocking(move || hash(&password))
        .await
        .map_err(|err| HolocronError::Internal(Box::new(err)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::PasswordVerifier;

    #[test]
    fn should_produce_verifiable_argon2id_hash() {
        let stored = hash("use-the-force").unwrap();
        assert!(stored.0.starts_with("$argon2id$"));

        let parsed = argon2::PasswordHash::new(&stored.0).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"use-the-force", &parsed)
                .is_ok()
        );
        assert!(
            Argon2::default()
                .verify_password(b"wrong", &parsed)
                .is_err()
        );
    }

    #[tokio::test]
    async fn should_keep_runtime_responsive_while_hashing() {
        let hashing = hash_blocking("use-the-force".to_string());
        tokio::pin!(hashing);

        let mut ticks = 0u32;
        let stored = loop {
            tokio::select! {
                biased;
                result = &mut hashing => break result.unwrap(),
                () = tokio::task::yield_now() => ticks += 1,
            }
        };

        assert!(stored.0.starts_with("$argon2id$"));
        assert!(ticks > 0);
    }

    #[test]
    fn should_salt_each_hash_differently() {
        assert_ne!(hash("same").unwrap(), hash("same").unwrap());
    }
}
