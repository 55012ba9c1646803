use crate::config::types::PorterConfig;
use crate::errors::ConfigError;

/// Validate a resolved configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` when the host is not an
/// http(s) URL or the timeout is zero.
pub fn validate_config(config: &PorterConfig) -> Result<(), ConfigError> {
    let host = config.api.host();
    if !(host.starts_with("http://") || host.starts_with("https://")) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "api.host '{}' must start with http:// or https://",
                host
            ),
        });
    }

    if config.api.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "api.timeout_secs must be greater than 0".to_string(),
        });
    }

    if let Some(token) = &config.api.token
        && token.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "api.token is set but empty".to_string(),
        });
    }

    Ok(())
}
