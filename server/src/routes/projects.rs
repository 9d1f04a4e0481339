//! Project routes for the signed-in user.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use super::auth::AuthUser;
use crate::services::project::{self, NewProject, Project, ProjectError};
use crate::state::AppState;

pub(crate) fn project_error_to_status(err: &ProjectError) -> StatusCode {
    match err {
        ProjectError::MissingName => StatusCode::BAD_REQUEST,
        ProjectError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_and_map(err: ProjectError) -> StatusCode {
    let status = project_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "project request failed");
    }
    status
}

/// `GET /api/projects`: projects owned by the caller, newest first.
pub async fn list_projects(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<Project>>, StatusCode> {
    let projects = project::list_projects(&state.pool, auth.user.id)
        .await
        .map_err(log_and_map)?;
    Ok(Json(projects))
}

/// `POST /api/projects`: create a project owned by the caller.
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewProject>,
) -> Result<(StatusCode, Json<Project>), StatusCode> {
    let created = project::create_project(&state.pool, auth.user.id, body)
        .await
        .map_err(log_and_map)?;
    tracing::info!(project_id = %created.id, user_id = %auth.user.id, "project created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;
