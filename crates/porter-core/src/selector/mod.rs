//! Project list fetch-and-select lifecycle.
//!
//! [`ProjectSelector`] owns the fetched project list and the dropdown
//! expansion flag. Everything it does not own (the current project, the
//! modal subsystem, the user id) is reached through an injected
//! [`ProjectContext`].

pub mod context;
pub mod errors;
pub mod state;
pub mod view;

pub use context::{CreateProjectRequest, ModalRequest, ProjectContext};
pub use errors::SelectorError;
pub use state::{FetchOutcome, FetchTicket, ProjectSelector, SelectionChange};
pub use view::{ProjectOption, SelectorView};
