//! Project-list state for the dashboard.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::Project;

/// Dashboard project list backed by `GET /api/projects`.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProjectsState {
    /// Apply a finished fetch.
    pub fn finish(&mut self, result: Result<Vec<Project>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }
}

/// Short visibility + tag summary shown on a project card.
#[must_use]
pub fn project_meta(project: &Project) -> String {
    let visibility = if project.is_public { "Public" } else { "Private" };
    match project.tags.len() {
        0 => visibility.to_owned(),
        1 => format!("{visibility} · 1 tag"),
        n => format!("{visibility} · {n} tags"),
    }
}
