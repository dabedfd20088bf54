//! ConfigStore - TOML Configuration Persistence

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// File name of the configuration inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Path of the configuration file in the platform config directory
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE))
}

/// Load and validate the configuration at `path`.
///
/// A missing file is created with the defaults.
pub fn load_or_init(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let config = AppConfig::default();
        save(path, &config)?;
        return Ok(config);
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = if content.trim().is_empty() {
        AppConfig::default()
    } else {
        toml::from_str(&content)?
    };
    config.validate()?;
    Ok(config)
}

/// Write `config` to `path` as TOML
pub fn save(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_missing_file_is_initialised() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = load_or_init(&path).expect("load");
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
        assert_eq!(load_or_init(&path).expect("reload"), config);
    }

    #[test]
    fn test_saved_config_loads_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        let mut config = AppConfig::default();
        config.page.title = "Back Office".to_string();
        config.page.filter = Some("widget".to_string());

        save(&path, &config).expect("save");
        assert_eq!(load_or_init(&path).expect("load"), config);
    }

    #[test]
    fn test_empty_file_means_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "  \n").expect("write");

        assert_eq!(load_or_init(&path).expect("load"), AppConfig::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[page]\nroot = \"pages\"\n").expect("write");

        assert!(matches!(load_or_init(&path), Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_broken_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[page\n").expect("write");

        assert!(matches!(load_or_init(&path), Err(Error::TomlDe { .. })));
    }
}
