//! Credential hashing. Passwords are stored as salted argon2id hashes;
//! verification parses the stored PHC string and compares.

use crate::error::MedialertError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password with a fresh random salt.
pub fn hash(plaintext: &str) -> Result<String, MedialertError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plaintext.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC hash string. A hash
/// that fails to parse counts as a non-match rather than a server error,
/// so a corrupt row cannot distinguish itself from a wrong password.
pub fn verify(plaintext: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hashed = hash("pw").unwrap();
        assert!(hashed.starts_with("$argon2id$"));
        assert!(verify("pw", &hashed));
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hashed = hash("pw").unwrap();
        assert!(!verify("not-pw", &hashed));
    }

    #[test]
    fn malformed_stored_hash_is_a_non_match() {
        assert!(!verify("pw", "plaintext-from-a-legacy-row"));
    }

    #[test]
    fn salts_differ_between_hashes() {
        assert_ne!(hash("pw").unwrap(), hash("pw").unwrap());
    }
}
