//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! host = "http://localhost:8080"
//! token = "secret"
//! timeout_secs = 10
//!
//! [project]
//! id = 3
//!
//! [user]
//! id = 1
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Every field is optional in the file so that a project config can override
/// only what it sets. Use the accessors to read resolved values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PorterConfig {
    /// API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Currently selected project
    #[serde(default)]
    pub project: ProjectConfig,

    /// Authenticated user, when known ahead of the login check
    #[serde(default)]
    pub user: UserConfig,
}

/// Porter API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the Porter instance (without the `/api` suffix).
    /// Default: `http://localhost:8080`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Request timeout in seconds.
    /// Default: 10 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl ApiConfig {
    /// Resolved host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host
            .as_deref()
            .unwrap_or(super::defaults::DEFAULT_HOST)
    }

    /// Resolved request timeout.
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(
            self.timeout_secs
                .unwrap_or_else(super::defaults::default_timeout_secs),
        )
    }
}

impl PorterConfig {
    /// Id of the current project, if one has been set.
    pub fn project_id(&self) -> Option<u64> {
        self.project.id
    }
}
