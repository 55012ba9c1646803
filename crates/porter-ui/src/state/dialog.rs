use porter_core::CreateProjectRequest;

/// Dialog state for the application.
///
/// Only one dialog can be open at a time.
#[derive(Clone, Debug, Default)]
pub enum DialogState {
    /// No dialog is open.
    #[default]
    None,
    /// Create project dialog is open.
    CreateProject {
        form: CreateProjectForm,
        error: Option<String>,
        /// What to do after a successful create.
        request: CreateProjectRequest,
    },
}

impl DialogState {
    pub fn is_create_project(&self) -> bool {
        matches!(self, DialogState::CreateProject { .. })
    }

    /// Open the create project dialog with an empty form.
    pub fn open_create_project(request: CreateProjectRequest) -> Self {
        DialogState::CreateProject {
            form: CreateProjectForm::default(),
            error: None,
            request,
        }
    }
}

/// Form state for creating a project.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateProjectForm {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert!(!DialogState::default().is_create_project());
    }

    #[test]
    fn test_open_create_project_starts_empty() {
        let request = CreateProjectRequest {
            keep_open: true,
            refresh_projects: false,
        };
        let dialog = DialogState::open_create_project(request);

        match dialog {
            DialogState::CreateProject {
                form,
                error,
                request: opened_with,
            } => {
                assert!(form.name.is_empty());
                assert!(error.is_none());
                assert_eq!(opened_with, request);
            }
            DialogState::None => panic!("Expected CreateProject dialog"),
        }
    }
}
