use crate::cli::globals::GlobalArgs;
use crate::guardian::{error::AuthError, password, session::{self, Identity}, store};
use axum::{extract::Extension, response::Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::{error, info, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserLogin {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[utoipa::path(
    post,
    path = "/user/login",
    request_body = UserLogin,
    responses(
        (status = 200, description = "Authentication successful, session token issued", content_type = "application/json"),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "Invalid email or password"),
    ),
    tag = "user"
)]
#[instrument(skip(pool, globals, payload))]
pub async fn login(
    pool: Extension<PgPool>,
    globals: Extension<GlobalArgs>,
    payload: Option<Json<UserLogin>>,
) -> Result<Json<Value>, AuthError> {
    let credentials: UserLogin = match payload {
        Some(Json(payload)) => payload,
        None => return Err(AuthError::Validation("Missing payload".to_string())),
    };

    let email = credentials.email.trim().to_lowercase();
    let password = credentials.password.as_str();

    if email.is_empty() || password.is_empty() {
        return Err(AuthError::Validation(
            "Email and password are required.".to_string(),
        ));
    }

    let identity = authorize(&pool, &email, password).await?;

    let token = session::issue(&identity, &globals.session_secret, globals.session_ttl)?;

    info!(user_id = %identity.id, "User authenticated");

    Ok(Json(json!({
        "token": token,
        "token_type": "Bearer",
        "expires_in": globals.session_ttl,
        "user": identity,
    })))
}

/// Credential check, everything that is not a clean match collapses into
/// the same `InvalidCredentials` so a caller cannot probe which emails are
/// registered
pub(crate) async fn authorize(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    let user = match store::find_by_email(pool, email).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(AuthError::InvalidCredentials),
        Err(e) => {
            error!("Error fetching user: {:?}", e);
            return Err(AuthError::InvalidCredentials);
        }
    };

    match password::verify(password, &user.password_hash) {
        Ok(true) => Ok(Identity::from(user)),
        Ok(false) => Err(AuthError::InvalidCredentials),
        Err(e) => {
            error!("Error verifying password: {:?}", e);
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn register_alice(pool: &PgPool) -> Identity {
        let password_hash = password::hash("secret1").unwrap();
        let user = store::insert(pool, "Alice", "a@x.com", &password_hash).await.unwrap();

        Identity::from(user)
    }

    #[sqlx::test]
    async fn test_register_then_authorize_round_trip(pool: PgPool) {
        let registered = register_alice(&pool).await;

        let identity = authorize(&pool, "a@x.com", "secret1").await.unwrap();

        assert_eq!(identity, registered);
        assert_eq!(identity.name, "Alice");
        assert_eq!(identity.email, "a@x.com");
    }

    #[sqlx::test]
    async fn test_wrong_password_is_rejected(pool: PgPool) {
        register_alice(&pool).await;

        let err = authorize(&pool, "a@x.com", "wrong").await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[sqlx::test]
    async fn test_unknown_email_is_indistinguishable_from_wrong_password(pool: PgPool) {
        register_alice(&pool).await;

        let unknown = authorize(&pool, "nobody@x.com", "secret1").await.unwrap_err();
        let wrong = authorize(&pool, "a@x.com", "wrong").await.unwrap_err();

        // Both surface the same failure, a caller cannot probe which
        // emails are registered
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }
}
