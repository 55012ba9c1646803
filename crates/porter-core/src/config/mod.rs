//! # Configuration System
//!
//! Hierarchical TOML configuration for the Porter CLI and dashboard.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.porter/config.toml` (global user preferences)
//! 3. **Project config** - `./.porter/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.porter/config.toml
//! [api]
//! host = "https://dashboard.getporter.dev"
//! token = "..."
//!
//! [project]
//! id = 3
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use porter_core::config::PorterConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PorterConfig::load_hierarchy()?;
//!     println!("API host: {}", config.api.host());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{ApiConfig, PorterConfig, ProjectConfig, UserConfig};
pub use validation::validate_config;

use crate::errors::ConfigError;

impl PorterConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
