//! Porter API access.
//!
//! [`ProjectsApi`] is the seam the CLI, the dashboard and tests program
//! against. [`HttpApiClient`] is the production implementation.

pub mod errors;
pub mod http;
pub mod traits;
pub mod types;

pub use errors::ApiError;
pub use http::HttpApiClient;
pub use traits::ProjectsApi;
pub use types::{AuthUser, CreateProjectBody, UserProjects};

/// Resolve the user (if not already known) and list their projects.
///
/// The dashboard knows the user id once the login check has run; before
/// that, the id is looked up via [`ProjectsApi::auth_check`].
pub fn load_user_projects(
    api: &dyn ProjectsApi,
    user_id: Option<u64>,
) -> Result<UserProjects, ApiError> {
    let user_id = match user_id {
        Some(id) => id,
        None => api.auth_check()?.id,
    };

    let projects = api.list_user_projects(user_id)?;

    tracing::info!(
        event = "core.api.user_projects_loaded",
        user_id = user_id,
        count = projects.len()
    );

    Ok(UserProjects { user_id, projects })
}
