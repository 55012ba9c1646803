use porter_core::{CreateProjectRequest, ModalRequest, Project, ProjectContext, ProjectSelector};

use super::dialog::DialogState;

/// Main application state.
///
/// Owns the current project and the dialog. The project selector reaches it
/// only through [`ProjectContext`].
pub struct AppState {
    /// Project the dashboard is scoped to.
    current_project: Option<Project>,

    /// Logged-in user, once resolved.
    user_id: Option<u64>,

    /// Current dialog state (mutually exclusive - only one dialog can be open).
    dialog: DialogState,

    /// A dialog submission is in flight.
    dialog_loading: bool,
}

impl AppState {
    pub fn new(user_id: Option<u64>) -> Self {
        Self {
            current_project: None,
            user_id,
            dialog: DialogState::None,
            dialog_loading: false,
        }
    }

    pub fn set_user_id(&mut self, user_id: u64) {
        self.user_id = Some(user_id);
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut DialogState {
        &mut self.dialog
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::None;
    }

    /// Show an error inside the open dialog. No-op when no dialog is open.
    pub fn set_dialog_error(&mut self, message: String) {
        match &mut self.dialog {
            DialogState::CreateProject { error, .. } => *error = Some(message),
            DialogState::None => {
                tracing::warn!(
                    event = "ui.dialog.error_without_dialog",
                    error = %message
                );
            }
        }
    }

    /// Empty the create form for another entry, keeping the dialog open.
    pub fn reset_create_form(&mut self) {
        if let DialogState::CreateProject { form, error, .. } = &mut self.dialog {
            form.name.clear();
            *error = None;
        }
    }

    pub fn is_dialog_loading(&self) -> bool {
        self.dialog_loading
    }

    pub fn set_dialog_loading(&mut self) {
        self.dialog_loading = true;
    }

    pub fn clear_dialog_loading(&mut self) {
        self.dialog_loading = false;
    }

    /// Handle a successful create from the dialog.
    ///
    /// The new project is not made current here. The selector picks it on the
    /// next successful fetch that lists it. Returns whether to refresh.
    pub fn project_created(
        &mut self,
        selector: &mut ProjectSelector,
        project: &Project,
        request: CreateProjectRequest,
    ) -> bool {
        tracing::info!(
            event = "ui.create_submit.completed",
            project_id = project.id,
            name = %project.name
        );

        selector.prefer_project(project.id);
        if request.keep_open {
            self.reset_create_form();
        } else {
            self.close_dialog();
        }

        request.refresh_projects
    }
}

impl ProjectContext for AppState {
    fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    fn current_project(&self) -> Option<&Project> {
        self.current_project.as_ref()
    }

    fn set_current_project(&mut self, project: Project) {
        tracing::info!(
            event = "ui.project.current_changed",
            project_id = project.id,
            name = %project.name
        );
        self.current_project = Some(project);
    }

    fn clear_current_project(&mut self) {
        tracing::info!(event = "ui.project.current_cleared");
        self.current_project = None;
    }

    fn open_modal(&mut self, request: ModalRequest) {
        match request {
            ModalRequest::CreateProject(request) => {
                tracing::info!(event = "ui.create_dialog.opened");
                self.dialog = DialogState::open_create_project(request);
            }
        }
    }
}
