//! Project records owned by users.
//!
//! A user owns zero or more projects. Listing is always scoped to the owner;
//! there is no cross-user read path here even for `is_public` projects.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

const PROJECT_COLUMNS: &str = r#"id, name, description, user_id,
    to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
    to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at,
    tags, is_public, thumbnail"#;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("project name is required")]
    MissingName,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// A stored project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub user_id: Uuid,
    pub created_at: String,
    pub updated_at: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub thumbnail: Option<String>,
}

/// Request body for creating a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Trim fields and drop blank optional values and tags. Tag order is kept;
/// repeated tags keep their first position.
///
/// # Errors
///
/// Returns [`ProjectError::MissingName`] if the name is blank.
pub fn normalize_new_project(input: NewProject) -> Result<NewProject, ProjectError> {
    let name = input.name.trim().to_owned();
    if name.is_empty() {
        return Err(ProjectError::MissingName);
    }

    let mut tags: Vec<String> = Vec::with_capacity(input.tags.len());
    for tag in input.tags {
        let tag = tag.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_owned());
        }
    }

    Ok(NewProject {
        name,
        description: non_blank(input.description),
        tags,
        is_public: input.is_public,
        thumbnail: non_blank(input.thumbnail),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn project_from_row(row: &PgRow) -> Project {
    Project {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        user_id: row.get("user_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        tags: row.get("tags"),
        is_public: row.get("is_public"),
        thumbnail: row.get("thumbnail"),
    }
}

/// Create a project owned by `user_id`.
///
/// # Errors
///
/// Returns a validation error for a blank name, or a database error.
pub async fn create_project(pool: &PgPool, user_id: Uuid, input: NewProject) -> Result<Project, ProjectError> {
    let input = normalize_new_project(input)?;
    let sql = format!(
        "INSERT INTO projects (name, description, user_id, tags, is_public, thumbnail)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {PROJECT_COLUMNS}"
    );
    let row = sqlx::query(&sql)
        .bind(&input.name)
        .bind(&input.description)
        .bind(user_id)
        .bind(&input.tags)
        .bind(input.is_public)
        .bind(&input.thumbnail)
        .fetch_one(pool)
        .await?;
    Ok(project_from_row(&row))
}

/// List projects owned by `user_id`, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_projects(pool: &PgPool, user_id: Uuid) -> Result<Vec<Project>, ProjectError> {
    let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE user_id = $1 ORDER BY created_at DESC, id");
    let rows = sqlx::query(&sql).bind(user_id).fetch_all(pool).await?;
    Ok(rows.iter().map(project_from_row).collect())
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
