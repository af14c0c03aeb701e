use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::graph::{DfsOrder, PathStrategy};
use crate::{GraphError, GraphResult};

/// Query defaults applied by [`TraversalEngine`](crate::TraversalEngine)
///
/// ```toml
/// path_strategy = "path-copy"
/// dfs_order = "preorder"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub path_strategy: PathStrategy,
    pub dfs_order: DfsOrder,
}

impl EngineConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/graphwalk/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("graphwalk/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("graphwalk\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when it is missing or broken
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!(
                            "Ignoring config at {}: {}",
                            config_path.display(),
                            e
                        );
                    }
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))
    }

    pub fn with_path_strategy(mut self, path_strategy: PathStrategy) -> Self {
        self.path_strategy = path_strategy;
        self
    }

    pub fn with_dfs_order(mut self, dfs_order: DfsOrder) -> Self {
        self.dfs_order = dfs_order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.path_strategy, PathStrategy::Predecessor);
        assert_eq!(config.dfs_order, DfsOrder::Stack);
    }

    #[test]
    fn test_parse_full_config() {
        let config =
            EngineConfig::from_toml_str("path_strategy = \"path-copy\"\ndfs_order = \"preorder\"\n")
                .unwrap();

        assert_eq!(config.path_strategy, PathStrategy::PathCopy);
        assert_eq!(config.dfs_order, DfsOrder::Preorder);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = EngineConfig::from_toml_str("dfs_order = \"preorder\"").unwrap();

        assert_eq!(config.path_strategy, PathStrategy::Predecessor);
        assert_eq!(config.dfs_order, DfsOrder::Preorder);
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let err = EngineConfig::from_toml_str("path_strategy = \"dijkstra\"").unwrap_err();
        assert!(matches!(err, GraphError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "path_strategy = \"path-copy\"").unwrap();

        let config = EngineConfig::load_from(&path).unwrap();
        assert_eq!(config.path_strategy, PathStrategy::PathCopy);
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }

    #[test]
    fn test_builder_overrides() {
        let config = EngineConfig::default()
            .with_path_strategy(PathStrategy::PathCopy)
            .with_dfs_order(DfsOrder::Preorder);

        assert_eq!(config.path_strategy, PathStrategy::PathCopy);
        assert_eq!(config.dfs_order, DfsOrder::Preorder);
    }
}
