use serde::{Deserialize, Serialize};

/// A project is the top-level workspace grouping in Porter.
///
/// Projects own roles and downstream resources (clusters, charts). They are
/// created server-side; clients only read and select them. Identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// A user's role within a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    pub id: u64,
    pub kind: String,
    pub user_id: u64,
    pub project_id: u64,
}

impl Project {
    /// Create a project with no roles.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            roles: Vec::new(),
        }
    }

    /// Uppercased first character of the name, used for the project icon.
    ///
    /// Returns `"?"` when the name is empty.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Same project identity, regardless of name or roles.
    pub fn same_as(&self, other: &Project) -> bool {
        self.id == other.id
    }
}
