//! Wire shapes returned by the Porter API.
//!
//! These types carry no behavior beyond small accessors. Field names follow
//! the JSON the server produces, so some structs rename their fields to the
//! server's PascalCase or camelCase keys.

pub mod chart;
pub mod cluster;
pub mod form;
pub mod graph;
pub mod project;
pub mod repo;
pub mod storage;

pub use chart::{Chart, ChartInfo, ChartMetadata, ChartSource};
pub use cluster::Cluster;
pub use form::{DefaultValue, FormElement, FormSettings, FormYaml, PorterChart, Section};
pub use graph::{Edge, Node, Resource};
pub use project::{Project, Role};
pub use repo::{FileEntry, Repo};
pub use storage::StorageType;
