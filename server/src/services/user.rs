//! User records.
//!
//! Users are keyed by a unique, normalized email. Identity providers upsert
//! through [`upsert_user`]; nothing else in the server writes this table.

use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Profile fields accepted from an identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

/// Display name for a user, falling back to the email's local part.
#[must_use]
pub fn display_name(name: &str, email: &str) -> String {
    let trimmed = name.trim();
    if !trimmed.is_empty() {
        return trimmed.to_owned();
    }
    email.split('@').next().unwrap_or(email).to_owned()
}

/// Insert or refresh a user by email. Returns the user's UUID.
pub async fn upsert_user(pool: &PgPool, user: &NewUser) -> Result<Uuid, sqlx::Error> {
    let row = sqlx::query(
        r"INSERT INTO users (name, email, image)
          VALUES ($1, $2, $3)
          ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name, image = COALESCE(EXCLUDED.image, users.image)
          RETURNING id",
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.image)
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
