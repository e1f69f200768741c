// src/auth/password.rs
// DOCUMENTATION: Password hashing and verification
// PURPOSE: Argon2id hashing for stored user credentials

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params, Version,
};
use once_cell::sync::Lazy;

use crate::errors::HbnbError;

static ARGON2: Lazy<Argon2<'static>> = Lazy::new(|| {
    let params = Params::new(64 * 1024, 3, 4, None).expect("argon2 params");
    Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params)
});

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(plain: &str) -> Result<String, HbnbError> {
    let salt = SaltString::generate(&mut OsRng);
    ARGON2
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            log::error!("Failed to hash password: {}", e);
            HbnbError::InternalError
        })
}

/// Check a plaintext password against a stored hash
pub fn verify_password(plain: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => ARGON2.verify_password(plain.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("s3cret").unwrap();
        assert_ne!(hash, "s3cret");
        assert!(verify_password("s3cret", &hash));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("s3cret").unwrap();
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_malformed_hash_rejected() {
        assert!(!verify_password("s3cret", "not-a-phc-string"));
    }
}
