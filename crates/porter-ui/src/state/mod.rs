//! Application state for porter-ui.
//!
//! `AppState` is the application-level context the project selector talks
//! to; `DialogState` tracks the single open modal.

pub mod app_state;
pub mod dialog;

pub use app_state::AppState;
pub use dialog::DialogState;
