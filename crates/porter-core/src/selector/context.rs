use crate::types::Project;

/// Application state the project selector reads and requests changes to.
///
/// The selector never owns the current project; it only asks the context to
/// change it.
pub trait ProjectContext {
    /// Id of the logged-in user, once known.
    fn user_id(&self) -> Option<u64>;

    /// The project the rest of the dashboard is scoped to.
    fn current_project(&self) -> Option<&Project>;

    fn set_current_project(&mut self, project: Project);

    /// Clear the current project (e.g. it no longer exists server-side).
    fn clear_current_project(&mut self);

    fn open_modal(&mut self, request: ModalRequest);
}

/// Modals the selector can ask the application to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalRequest {
    CreateProject(CreateProjectRequest),
}

/// Parameters for the create-project modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateProjectRequest {
    /// Keep the modal open after a successful create.
    pub keep_open: bool,
    /// Re-run the project fetch after a successful create.
    pub refresh_projects: bool,
}

impl Default for CreateProjectRequest {
    fn default() -> Self {
        Self {
            keep_open: false,
            refresh_projects: true,
        }
    }
}
