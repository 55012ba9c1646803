//! View components for porter-ui.
//!
//! - `main_view` - Root view: sidebar, main pane and dialogs
//! - `project_section` - Project selector in the sidebar
//! - `create_project_dialog` - Modal dialog for creating a project

pub mod create_project_dialog;
pub mod main_view;
pub mod project_section;

pub use main_view::MainView;
