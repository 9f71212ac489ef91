use crate::guardian::error::AuthError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// A row in the users table. The password column only ever holds a bcrypt
/// hash, the plaintext never reaches the store.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Exact-match lookup by email
/// # Errors
/// Return error if the query fails
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, AuthError> {
    let query = "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );

    let user = sqlx::query_as::<_, User>(query)
        .bind(email)
        .fetch_optional(pool)
        .instrument(span)
        .await?;

    Ok(user)
}

/// Insert a new user, the store assigns the id. A unique-violation on the
/// email index is reported as a conflict so concurrent duplicate
/// registrations lose cleanly.
/// # Errors
/// Return error if the insert fails
pub async fn insert(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, AuthError> {
    let query = "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) \
                 RETURNING id, name, email, password_hash, created_at";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );

    sqlx::query_as::<_, User>(query)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .instrument(span)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AuthError::Conflict(
                        "User with this email already exists.".to_string(),
                    );
                }
            }
            AuthError::Database(e)
        })
}
