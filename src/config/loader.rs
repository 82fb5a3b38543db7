// Configuration loader
// Reads ~/.netbind/config.toml, then environment, then defaults. A missing
// file is not an error — the shim must run unconfigured.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::settings::Config;

/// Load configuration from the netbind config file or environment.
pub fn load_config() -> Result<Config> {
    if let Some(path) = config_path() {
        if let Some(config) = load_from_path(&path)? {
            return Ok(config);
        }
    }

    let mut config = Config::default();
    if let Ok(value) = std::env::var("NETBIND_FORCE_LEGACY") {
        config.force_legacy_bind = matches!(value.as_str(), "1" | "true" | "yes");
    }
    Ok(config)
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".netbind").join("config.toml"))
}

/// Load configuration from an explicit path. `Ok(None)` when the file does
/// not exist; malformed contents are an error.
pub fn load_from_path(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let loaded = load_from_path(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn file_contents_are_parsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "channel = \"custom/bind\"\nforce_legacy_bind = true\n").unwrap();

        let config = load_from_path(&path).unwrap().unwrap();
        assert_eq!(config.channel, "custom/bind");
        assert!(config.force_legacy_bind);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "channel = [not toml").unwrap();

        assert!(load_from_path(&path).is_err());
    }
}
