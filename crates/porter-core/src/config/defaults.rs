//! Default values for configuration fields.

/// Host used when no config file sets one.
pub const DEFAULT_HOST: &str = "http://localhost:8080";

/// Returns the default request timeout in seconds (10s).
///
/// Long enough for a cold API instance, short enough that the CLI does not
/// appear hung on an unreachable host.
pub fn default_timeout_secs() -> u64 {
    10
}

/// Directory name under `$HOME` (and under the working directory for
/// project-level overrides) holding Porter config.
pub const CONFIG_DIR_NAME: &str = ".porter";

pub const CONFIG_FILE_NAME: &str = "config.toml";
