//! Configuration file handling.
//!
//! The rc file lives at `~/.prodtrack/rc` and holds `key=value` lines:
//!
//! ```text
//! catalog.location=./catalog.json
//! export.dir=/srv/reports
//! ```
//!
//! Relative paths are resolved against the directory holding the rc file.

use crate::catalog::Catalog;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub catalog_location: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
}

impl Config {
    /// Directory holding the rc file
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Failed to determine home directory")?;
        Ok(home.join(".prodtrack"))
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("rc"))
    }

    /// Load the rc file, or defaults when it does not exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::parse(&contents, base))
    }

    /// Parse rc contents. Unknown keys, comments and blank lines are ignored.
    pub fn parse(contents: &str, base: &Path) -> Self {
        let mut config = Self::default();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                log::warn!("ignoring malformed config line: {}", line);
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "catalog.location" => config.catalog_location = Some(resolve(base, value)),
                "export.dir" => config.export_dir = Some(resolve(base, value)),
                other => log::warn!("ignoring unknown config key: {}", other),
            }
        }
        config
    }

    /// Catalog to use: explicit override, then configured file, then built-in
    pub fn catalog(&self, override_path: Option<&Path>) -> Result<Catalog> {
        match override_path.or(self.catalog_location.as_deref()) {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Export directory: explicit override, then configured, then current directory
    pub fn export_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn resolve(base: &Path, value: &str) -> PathBuf {
    let path = PathBuf::from(value);
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let base = Path::new("/home/user/.prodtrack");
        let config = Config::parse(
            "# reports\ncatalog.location=./catalog.json\n\nexport.dir = /srv/reports\nbogus\ncolor=red\n",
            base,
        );
        assert_eq!(config.catalog_location, Some(base.join("./catalog.json")));
        assert_eq!(config.export_dir, Some(PathBuf::from("/srv/reports")));
    }

    #[test]
    fn test_export_dir_precedence() {
        let config = Config {
            catalog_location: None,
            export_dir: Some(PathBuf::from("/srv/reports")),
        };
        assert_eq!(config.export_dir(Some(Path::new("out"))), PathBuf::from("out"));
        assert_eq!(config.export_dir(None), PathBuf::from("/srv/reports"));
        assert_eq!(Config::default().export_dir(None), PathBuf::from("."));
    }

    #[test]
    fn test_catalog_defaults_to_builtin() {
        let catalog = Config::default().catalog(None).unwrap();
        assert_eq!(catalog.total_tasks(), 20);
    }

    #[test]
    fn test_catalog_override_wins() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("small.json");
        std::fs::write(&path, r#"{"phases": [{"name": "Cutting", "tasks": [{"name": "Marker", "duration": 1}]}]}"#).unwrap();

        let config = Config {
            catalog_location: Some(temp_dir.path().join("missing.json")),
            export_dir: None,
        };
        let catalog = config.catalog(Some(&path)).unwrap();
        assert_eq!(catalog.phase_names(), vec!["Cutting"]);
        assert!(config.catalog(None).is_err());
    }
}
