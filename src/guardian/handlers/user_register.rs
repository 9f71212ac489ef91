use crate::guardian::{error::AuthError, handlers::valid_email, password, store};
use axum::{extract::Extension, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::{error, info, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserRegister {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[utoipa::path(
    post,
    path = "/user/register",
    request_body = UserRegister,
    responses(
        (status = 201, description = "Registration successful", content_type = "application/json"),
        (status = 400, description = "Missing fields or user with this email already exists"),
        (status = 500, description = "Store failure"),
    ),
    tag = "user"
)]
#[instrument(skip(pool, payload))]
pub async fn register(
    pool: Extension<PgPool>,
    payload: Option<Json<UserRegister>>,
) -> Result<(StatusCode, Json<Value>), AuthError> {
    let user: UserRegister = match payload {
        Some(Json(payload)) => payload,
        None => return Err(AuthError::Validation("Missing payload".to_string())),
    };

    let name = user.name.trim();
    let email = user.email.trim().to_lowercase();
    let password = user.password.as_str();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AuthError::Validation(
            "Name, email, and password are required.".to_string(),
        ));
    }

    if !valid_email(&email) {
        return Err(AuthError::Validation(
            "A valid email address is required.".to_string(),
        ));
    }

    // check if user exists
    if store::find_by_email(&pool, &email).await?.is_some() {
        error!("User already exists");
        return Err(AuthError::Conflict(
            "User with this email already exists.".to_string(),
        ));
    }

    let password_hash = password::hash(password)?;

    // The unique index still backs this up if a concurrent registration
    // slipped past the lookup above
    let user = store::insert(&pool, name, &email, &password_hash).await?;

    info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully." })),
    ))
}
