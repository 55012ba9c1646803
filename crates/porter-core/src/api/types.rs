use serde::{Deserialize, Serialize};

use crate::types::Project;

/// User returned by the login check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub id: u64,
    #[serde(default)]
    pub email: String,
}

/// Request body for `POST /api/projects`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateProjectBody {
    pub name: String,
}

/// Projects of a user together with the resolved user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProjects {
    pub user_id: u64,
    pub projects: Vec<Project>,
}
