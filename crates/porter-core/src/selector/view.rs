use crate::types::Project;

/// What the project section should render.
#[derive(Debug, PartialEq)]
pub enum SelectorView<'a> {
    /// No current project: show the "Create a Project" call-to-action.
    Initialize { error: Option<&'a str> },
    /// Show the current project with an optional dropdown.
    Selector {
        current: &'a Project,
        expanded: bool,
        /// Listed projects in server order. Empty unless `expanded`.
        options: Vec<ProjectOption<'a>>,
        error: Option<&'a str>,
    },
}

/// One row of the dropdown.
#[derive(Debug, PartialEq)]
pub struct ProjectOption<'a> {
    pub index: usize,
    pub project: &'a Project,
    /// Row is the current project.
    pub selected: bool,
}

impl SelectorView<'_> {
    pub fn is_initialize(&self) -> bool {
        matches!(self, SelectorView::Initialize { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SelectorView::Initialize { error } | SelectorView::Selector { error, .. } => *error,
        }
    }
}
