use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// File name of the optional config inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

/// Error type for reading config.toml
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read config.toml from the data directory. A missing file is the default
/// config, not an error.
pub fn read_config(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = data_dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(ConfigError::Read { path, source: e }),
    };
    Ok(toml::from_str(&text)?)
}

/// Read the config, falling back to defaults (with a warning on stderr) when
/// the file is unreadable or malformed.
pub fn read_config_or_default(data_dir: &Path) -> AppConfig {
    match read_config(data_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {} (using defaults)", e);
            tracing::warn!(error = %e, "config ignored");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn reads_ui_section() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[ui]\nshow_key_hints = false\n",
        )
        .unwrap();
        assert!(!read_config(dir.path()).unwrap().ui.show_key_hints);
    }

    #[test]
    fn malformed_config_is_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[ui\nbroken").unwrap();
        assert!(matches!(
            read_config(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn malformed_config_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "ui = 3").unwrap();
        let config = read_config_or_default(dir.path());
        assert!(config.ui.colors.is_empty());
    }
}
