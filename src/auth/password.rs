use crate::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hashes a plaintext password with a random salt. Two calls with the same
/// input produce different hashes; callers must not assume determinism.
/// A hashing failure surfaces as `InternalServerError` through the
/// `From<bcrypt::BcryptError>` conversion on `AppError`.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Checks a plaintext attempt against a stored hash. A malformed stored
/// hash counts as a failed verification rather than an error, so a corrupt
/// row cannot be told apart from a wrong password by the caller.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    match verify(password, hashed_password) {
        Ok(matches) => Ok(matches),
        Err(e) => {
            log::warn!("stored password hash failed to parse: {}", e);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing_and_verification() {
        let password = "rahasia123";
        let hashed = hash_password(password).unwrap();

        assert!(verify_password(password, &hashed).unwrap());
        assert!(!verify_password("wrong_password1", &hashed).unwrap());
    }

    #[test]
    fn test_hashing_is_salted() {
        let password = "rahasia123";
        let first = hash_password(password).unwrap();
        let second = hash_password(password).unwrap();
        assert_ne!(first, second);
        assert!(verify_password(password, &first).unwrap());
        assert!(verify_password(password, &second).unwrap());
    }

    #[test]
    fn test_verify_with_malformed_hash_is_false() {
        assert!(!verify_password("rahasia123", "not-a-bcrypt-hash").unwrap());
        assert!(!verify_password("rahasia123", "").unwrap());
    }
}
