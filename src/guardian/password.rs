use crate::guardian::error::AuthError;

/// bcrypt work factor, existing user records were hashed at cost 10 so
/// this must stay verification-compatible
pub const COST: u32 = 10;

/// Derive a salted bcrypt hash for storage
/// # Errors
/// Return error if hashing fails
pub fn hash(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, COST)
        .map_err(|e| AuthError::Internal(format!("Error hashing password: {e}")))
}

/// Verify a submitted password against a stored hash
/// # Errors
/// Return error if the stored hash is malformed
pub fn verify(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash)
        .map_err(|e| AuthError::Internal(format!("Error verifying password: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hashed = hash("secret1").unwrap();

        assert!(hashed.starts_with("$2"));
        assert!(verify("secret1", &hashed).unwrap());
        assert!(!verify("wrong", &hashed).unwrap());
    }

    #[test]
    fn test_hash_uses_configured_cost() {
        let hashed = hash("secret1").unwrap();
        assert!(hashed.contains("$10$"));
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash("secret1").unwrap();
        let second = hash("secret1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify("secret1", "not-a-bcrypt-hash").is_err());
    }
}
