use crate::guardian::{error::AuthError, store::User};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use utoipa::ToSchema;
use uuid::Uuid;

/// The claim handed back after a successful authentication, this is what
/// the session token embeds and what `/user/me` reports.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl Claims {
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.sub,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Sign a session token carrying the identity claim
/// # Errors
/// Return error if signing fails
pub fn issue(identity: &Identity, secret: &SecretString, ttl: i64) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: identity.id,
        name: identity.name.clone(),
        email: identity.email.clone(),
        iat: now,
        exp: now + ttl,
        jti: Ulid::new().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("Error signing session token: {e}")))
}

/// Verify a session token and return its claims. Expiry is checked as part
/// of validation.
/// # Errors
/// Return error if the token is invalid or expired
pub fn verify(token: &str, secret: &SecretString) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::Unauthorized("Invalid or expired session token.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    fn secret() -> SecretString {
        SecretString::from("sekret".to_string())
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let identity = identity();
        let token = issue(&identity, &secret(), 3600).unwrap();

        let claims = verify(&token, &secret()).unwrap();

        assert_eq!(claims.identity(), identity);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = issue(&identity(), &secret(), 3600).unwrap();

        let other = SecretString::from("other".to_string());
        assert!(verify(&token, &other).is_err());
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let token = issue(&identity(), &secret(), 3600).unwrap();

        let mut tampered = token.clone();
        tampered.pop();

        assert!(verify(&tampered, &secret()).is_err());
        assert!(verify("not.a.token", &secret()).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // Past the default validation leeway
        let token = issue(&identity(), &secret(), -120).unwrap();

        assert!(verify(&token, &secret()).is_err());
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let identity = identity();
        let first = issue(&identity, &secret(), 3600).unwrap();
        let second = issue(&identity, &secret(), 3600).unwrap();

        let first = verify(&first, &secret()).unwrap();
        let second = verify(&second, &secret()).unwrap();

        assert_ne!(first.jti, second.jti);
    }
}
