use crate::api::errors::ApiError;
use crate::api::types::AuthUser;
use crate::types::{Cluster, Project};

/// Operations the Porter API exposes for projects.
///
/// Implementations are blocking; the dashboard runs them on a background
/// executor.
pub trait ProjectsApi: Send + Sync {
    /// Verify the session and return the logged-in user.
    fn auth_check(&self) -> Result<AuthUser, ApiError>;

    /// List projects the user belongs to, in server order.
    fn list_user_projects(&self, user_id: u64) -> Result<Vec<Project>, ApiError>;

    /// Create a project with the authenticated user as admin.
    fn create_project(&self, name: &str) -> Result<Project, ApiError>;

    /// Delete a project, returning the deleted project.
    fn delete_project(&self, project_id: u64) -> Result<Project, ApiError>;

    /// List clusters linked to a project.
    fn list_project_clusters(&self, project_id: u64) -> Result<Vec<Cluster>, ApiError>;
}
