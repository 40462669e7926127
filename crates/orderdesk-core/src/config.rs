use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional per-root settings read from `orderdesk.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_pending_file")]
    pub pending_file: String,
    #[serde(default = "default_completed_file")]
    pub completed_file: String,
}

fn default_pending_file() -> String {
    paths::PENDING_FILE.to_string()
}

fn default_completed_file() -> String {
    paths::COMPLETED_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pending_file: default_pending_file(),
            completed_file: default_completed_file(),
        }
    }
}

impl Config {
    /// Load `orderdesk.yaml` from `root`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        match crate::io::read_if_exists(&path)? {
            Some(data) => {
                let config: Config = serde_yaml::from_str(&data)?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn pending_path(&self, root: &Path) -> PathBuf {
        root.join(&self.pending_file)
    }

    pub fn completed_path(&self, root: &Path) -> PathBuf {
        root.join(&self.completed_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pending_path(dir.path()), paths::pending_path(dir.path()));
        assert_eq!(
            config.completed_path(dir.path()),
            paths::completed_path(dir.path())
        );
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            paths::config_path(dir.path()),
            "pending_file: data/pending.json\n",
        )
        .unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.pending_file, "data/pending.json");
        assert_eq!(config.completed_file, paths::COMPLETED_FILE);
    }

    #[test]
    fn full_config_is_read() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            pending_file: "p.json".to_string(),
            completed_file: "c.json".to_string(),
        };
        std::fs::write(
            paths::config_path(dir.path()),
            serde_yaml::to_string(&config).unwrap(),
        )
        .unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), config);
        assert_eq!(config.completed_path(dir.path()), dir.path().join("c.json"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(paths::config_path(dir.path()), "pending_file: [1, 2\n").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}
