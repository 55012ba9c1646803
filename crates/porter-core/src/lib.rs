//! porter-core: Core library for the Porter dashboard and CLI
//!
//! This library provides the shared data shapes, the Porter API client and
//! the project selection lifecycle. It is used by both the CLI and UI.
//!
//! # Main Entry Points
//!
//! - [`types`] - Wire shapes returned by the Porter API
//! - [`api`] - `ProjectsApi` trait and its HTTP implementation
//! - [`selector`] - Project list fetch-and-select state machine
//! - [`config`] - Configuration management

pub mod api;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod selector;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use api::{ApiError, AuthUser, HttpApiClient, ProjectsApi};
pub use config::PorterConfig;
pub use errors::{PorterError, PorterResult};
pub use selector::{
    CreateProjectRequest, FetchOutcome, FetchTicket, ModalRequest, ProjectContext,
    ProjectSelector, SelectionChange, SelectorError, SelectorView,
};
pub use types::{Cluster, Project, Role};

// Re-export logging initialization
pub use logging::init_logging;
