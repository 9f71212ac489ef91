use crate::cli::globals::GlobalArgs;
use crate::guardian::{error::AuthError, session};
use axum::{
    extract::Extension,
    http::{header::AUTHORIZATION, HeaderMap},
    response::Json,
};
use tracing::instrument;

/// Pull the bearer token out of the Authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[utoipa::path(
    get,
    path = "/user/me",
    responses(
        (status = 200, description = "Identity claim for the presented session token", body = session::Identity, content_type = "application/json"),
        (status = 401, description = "Missing or invalid session token"),
    ),
    tag = "user"
)]
// The dashboard greets from this endpoint instead of trusting anything the
// client cached locally
#[instrument(skip(globals, headers))]
pub async fn me(
    globals: Extension<GlobalArgs>,
    headers: HeaderMap,
) -> Result<Json<session::Identity>, AuthError> {
    let token = bearer_token(&headers).ok_or_else(|| {
        AuthError::Unauthorized("Missing or invalid authorization header.".to_string())
    })?;

    let claims = session::verify(token, &globals.session_secret)?;

    Ok(Json(claims.identity()))
}
