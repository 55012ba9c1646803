//! Configuration loading, merging and saving.
//!
//! Missing config files are not errors. Unreadable or unparsable files are.

use crate::config::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::config::types::{ApiConfig, PorterConfig, ProjectConfig, UserConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.porter/config.toml`)
/// 3. Project config (`./.porter/config.toml`)
///
/// # Errors
///
/// Returns an error if a present file cannot be read or parsed, or if the
/// merged result fails validation.
pub fn load_hierarchy() -> Result<PorterConfig, ConfigError> {
    let mut config = PorterConfig::default();

    match user_config_path() {
        Ok(path) => {
            if let Some(user_config) = load_config_file(&path)? {
                config = merge_configs(config, user_config);
            }
        }
        Err(e) => {
            tracing::warn!(
                event = "core.config.user_config_skipped",
                error = %e
            );
        }
    }

    if let Some(path) = project_config_path()
        && let Some(project_config) = load_config_file(&path)?
    {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    tracing::debug!(
        event = "core.config.loaded",
        host = config.api.host(),
        project_id = ?config.project.id
    );

    Ok(config)
}

/// Path of the user config file (`~/.porter/config.toml`).
pub fn user_config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn project_config_path() -> Option<PathBuf> {
    match std::env::current_dir() {
        Ok(dir) => Some(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)),
        Err(e) => {
            tracing::warn!(
                event = "core.config.current_dir_unavailable",
                error = %e
            );
            None
        }
    }
}

/// Load a configuration file, returning `None` if it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<PorterConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::IoError {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Write a configuration file, creating its parent directory if needed.
pub fn save_config_file(path: &Path, config: &PorterConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::IoError {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError {
        message: e.to_string(),
    })?;

    fs::write(path, content).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!(event = "core.config.saved", path = %path.display());

    Ok(())
}

/// Store `project_id` as the current project in the config file that
/// decides it, returning that file's path.
///
/// See [`set_project_id_in`] for which file is chosen.
pub fn set_current_project_id(project_id: u64) -> Result<PathBuf, ConfigError> {
    let user_path = user_config_path()?;
    set_project_id_in(&user_path, project_config_path().as_deref(), project_id)
}

/// Remove `project_id` as the current project from every config file in the
/// hierarchy that names it, returning the files that were rewritten.
pub fn clear_current_project_id(project_id: u64) -> Result<Vec<PathBuf>, ConfigError> {
    let mut paths = Vec::new();
    match user_config_path() {
        Ok(path) => paths.push(path),
        Err(e) => tracing::warn!(event = "core.config.user_config_skipped", error = %e),
    }
    paths.extend(project_config_path());
    clear_project_id_in(&paths, project_id)
}

/// Write `[project] id` to the file whose value wins when merged.
///
/// That is the project file when it already sets an id, otherwise the user
/// file. Writing to the user file under a project-level id would be shadowed.
pub fn set_project_id_in(
    user_path: &Path,
    project_path: Option<&Path>,
    project_id: u64,
) -> Result<PathBuf, ConfigError> {
    let mut target = user_path;
    if let Some(path) = project_path
        && load_config_file(path)?.is_some_and(|c| c.project.id.is_some())
    {
        target = path;
    }

    update_config_file(target, |c| c.project.id = Some(project_id))?;

    tracing::info!(
        event = "core.config.project_id_saved",
        project_id = project_id,
        path = %target.display()
    );

    Ok(target.to_path_buf())
}

/// Unset `[project] id` in each of `paths` that currently holds `project_id`.
pub fn clear_project_id_in(
    paths: &[PathBuf],
    project_id: u64,
) -> Result<Vec<PathBuf>, ConfigError> {
    let mut cleared = Vec::new();

    for path in paths {
        if cleared.contains(path) {
            continue;
        }
        let holds_id = load_config_file(path)?.is_some_and(|c| c.project.id == Some(project_id));
        if holds_id {
            update_config_file(path, |c| c.project.id = None)?;
            cleared.push(path.clone());
        }
    }

    tracing::info!(
        event = "core.config.project_id_cleared",
        project_id = project_id,
        files = cleared.len()
    );

    Ok(cleared)
}

/// Read-modify-write a config file at an explicit path.
pub fn update_config_file(
    path: &Path,
    f: impl FnOnce(&mut PorterConfig),
) -> Result<PorterConfig, ConfigError> {
    let mut config = load_config_file(path)?.unwrap_or_default();
    f(&mut config);
    save_config_file(path, &config)?;
    Ok(config)
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Fields are replaced only when the override sets them.
pub fn merge_configs(base: PorterConfig, override_config: PorterConfig) -> PorterConfig {
    PorterConfig {
        api: ApiConfig {
            host: override_config.api.host.or(base.api.host),
            token: override_config.api.token.or(base.api.token),
            timeout_secs: override_config.api.timeout_secs.or(base.api.timeout_secs),
        },
        project: ProjectConfig {
            id: override_config.project.id.or(base.project.id),
        },
        user: UserConfig {
            id: override_config.user.id.or(base.user.id),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config_file(&temp_dir.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[api\nhost = ").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".porter").join("config.toml");

        let mut config = PorterConfig::default();
        config.api.host = Some("https://porter.example.com".to_string());
        config.project.id = Some(12);

        save_config_file(&path, &config).unwrap();
        let loaded = load_config_file(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_update_config_file_preserves_other_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[api]\nhost = \"https://a.example.com\"\n").unwrap();

        let updated = update_config_file(&path, |c| c.project.id = Some(5)).unwrap();
        assert_eq!(updated.api.host(), "https://a.example.com");
        assert_eq!(updated.project_id(), Some(5));

        let reloaded = load_config_file(&path).unwrap().unwrap();
        assert_eq!(reloaded.project_id(), Some(5));
        assert_eq!(reloaded.api.host(), "https://a.example.com");
    }

    #[test]
    fn test_update_config_file_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        update_config_file(&path, |c| c.project.id = Some(1)).unwrap();
        assert!(path.exists());
    }

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_set_project_id_goes_to_user_file_by_default() {
        let home = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        let user = home.path().join(".porter").join("config.toml");
        let project = cwd.path().join(".porter").join("config.toml");
        write(&project, "[api]\nhost = \"https://a.example.com\"\n");

        let written = set_project_id_in(&user, Some(&project), 4).unwrap();

        assert_eq!(written, user);
        assert_eq!(load_config_file(&user).unwrap().unwrap().project_id(), Some(4));
        assert_eq!(load_config_file(&project).unwrap().unwrap().project_id(), None);
    }

    #[test]
    fn test_set_project_id_updates_shadowing_project_file() {
        let home = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        let user = home.path().join(".porter").join("config.toml");
        let project = cwd.path().join(".porter").join("config.toml");
        write(&user, "[project]\nid = 1\n");
        write(&project, "[project]\nid = 1\n");

        let written = set_project_id_in(&user, Some(&project), 2).unwrap();
        assert_eq!(written, project);

        let user_config = load_config_file(&user).unwrap().unwrap();
        let project_config = load_config_file(&project).unwrap().unwrap();
        assert_eq!(merge_configs(user_config, project_config).project_id(), Some(2));
    }

    #[test]
    fn test_clear_project_id_only_touches_matching_files() {
        let home = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        let user = home.path().join(".porter").join("config.toml");
        let project = cwd.path().join(".porter").join("config.toml");
        write(&user, "[project]\nid = 3\n");
        write(&project, "[project]\nid = 5\n");

        let cleared = clear_project_id_in(&[user.clone(), project.clone()], 5).unwrap();

        assert_eq!(cleared, vec![project.clone()]);
        assert_eq!(load_config_file(&user).unwrap().unwrap().project_id(), Some(3));
        assert_eq!(load_config_file(&project).unwrap().unwrap().project_id(), None);
    }

    #[test]
    fn test_clear_project_id_skips_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("config.toml");

        let cleared = clear_project_id_in(&[missing.clone()], 5).unwrap();
        assert!(cleared.is_empty());
        assert!(!missing.exists());
    }

    #[test]
    fn test_merge_override_wins_when_set() {
        let mut base = PorterConfig::default();
        base.api.host = Some("https://base.example.com".to_string());
        base.api.token = Some("base-token".to_string());
        base.project.id = Some(1);

        let mut over = PorterConfig::default();
        over.api.host = Some("https://override.example.com".to_string());
        over.project.id = Some(2);

        let merged = merge_configs(base, over);
        assert_eq!(merged.api.host(), "https://override.example.com");
        assert_eq!(merged.api.token.as_deref(), Some("base-token"));
        assert_eq!(merged.project_id(), Some(2));
    }

    #[test]
    fn test_merge_keeps_base_when_override_unset() {
        let mut base = PorterConfig::default();
        base.api.timeout_secs = Some(30);
        base.user.id = Some(9);

        let merged = merge_configs(base, PorterConfig::default());
        assert_eq!(merged.api.timeout_secs, Some(30));
        assert_eq!(merged.user.id, Some(9));
    }
}
