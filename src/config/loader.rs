//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{PostflowError, Result};
use crate::fs;
use crate::schemas::Config;

/// Load configuration for a project, falling back to defaults.
///
/// Reads `explicit` when given (it must exist), otherwise
/// `<root>/.postflow/config.json` when present. Fields missing from the file
/// take their defaults.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => fs::get_config_path(root),
    };

    if explicit.is_none() && !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config: Config = fs::read_json(&path)?;
    check_config(&config)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn check_config(config: &Config) -> Result<()> {
    if url::Url::parse(&config.site_url).is_err() {
        return Err(PostflowError::ConfigError(format!(
            "site_url must be an absolute URL, got '{}'",
            config.site_url
        )));
    }
    for (name, value) in [("posts_path", &config.posts_path), ("login_path", &config.login_path)] {
        if !value.starts_with('/') {
            return Err(PostflowError::ConfigError(format!(
                "{} must start with '/', got '{}'",
                name, value
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".postflow");
        std_fs::create_dir(&dir).unwrap();

        let config_content = r#"{
            "site_url": "https://blog.example.com",
            "pretty": false
        }"#;
        std_fs::write(dir.join("config.json"), config_content).unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.site_url, "https://blog.example.com");
        assert!(!config.pretty);
        // Default for unspecified field
        assert_eq!(config.posts_path, "/posts");
    }

    #[test]
    fn test_load_config_explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("custom.json");

        let err = load_config(temp.path(), Some(&missing)).unwrap_err();
        assert_eq!(err.code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_load_config_rejects_bad_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.json");
        std_fs::write(&path, r#"{"login_path": "login"}"#).unwrap();

        let err = load_config(temp.path(), Some(&path)).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
