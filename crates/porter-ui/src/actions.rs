//! API calls made by porter-ui.
//!
//! These run on the background executor; they block on HTTP and must never
//! be called from a render path.

use porter_core::api::{self, UserProjects};
use porter_core::{ApiError, Project, ProjectsApi};

/// Resolve the user if needed and list their projects.
pub fn fetch_projects(
    api: &dyn ProjectsApi,
    user_id: Option<u64>,
) -> Result<UserProjects, ApiError> {
    tracing::info!(event = "ui.fetch_projects.started", user_id = ?user_id);

    let result = api::load_user_projects(api, user_id);
    match &result {
        Ok(loaded) => tracing::info!(
            event = "ui.fetch_projects.completed",
            user_id = loaded.user_id,
            count = loaded.projects.len()
        ),
        Err(e) => tracing::warn!(event = "ui.fetch_projects.failed", error = %e),
    }
    result
}

/// Create a project with the given name.
///
/// Returns the created project on success, or an error message suitable for
/// the dialog on failure.
pub fn create_project(api: &dyn ProjectsApi, name: &str) -> Result<Project, String> {
    let name = name.trim();
    tracing::info!(event = "ui.create_project.started", name = name);

    if name.is_empty() {
        tracing::warn!(
            event = "ui.create_dialog.validation_failed",
            reason = "empty project name"
        );
        return Err("Project name cannot be empty".to_string());
    }

    match api.create_project(name) {
        Ok(project) => {
            tracing::info!(
                event = "ui.create_project.completed",
                project_id = project.id,
                name = %project.name
            );
            Ok(project)
        }
        Err(e) => {
            tracing::error!(event = "ui.create_project.failed", name = name, error = %e);
            Err(e.to_string())
        }
    }
}
