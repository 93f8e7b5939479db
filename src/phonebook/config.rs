use crate::error::{DirectoryError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_PAGE_SIZE: usize = 4;

pub const KEY_DATA_FILE: &str = "data-file";
pub const KEY_PAGE_SIZE: &str = "page-size";

/// Configuration for a scope, stored in `config.json` next to the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DirectoryConfig {
    /// Store file name inside the scope directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Records per page when listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DirectoryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DirectoryError::Io)?;
        let config: DirectoryConfig =
            serde_json::from_str(&content).map_err(DirectoryError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DirectoryError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DirectoryError::Serialization)?;
        fs::write(config_path, content).map_err(DirectoryError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DirectoryError::Config(
                "page-size must be at least 1".to_string(),
            ));
        }
        if self.data_file.trim().is_empty() {
            return Err(DirectoryError::Config(
                "data-file must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DATA_FILE => Some(self.data_file.clone()),
            KEY_PAGE_SIZE => Some(self.page_size.to_string()),
            _ => None,
        }
    }

    /// Set a key from its string form. The config is left unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            KEY_DATA_FILE => updated.data_file = value.to_string(),
            KEY_PAGE_SIZE => {
                updated.page_size = value.parse().map_err(|_| {
                    DirectoryError::Config(format!("page-size must be a number, got '{}'", value))
                })?;
            }
            other => {
                return Err(DirectoryError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        [KEY_DATA_FILE, KEY_PAGE_SIZE]
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DirectoryConfig::default();
        assert_eq!(config.data_file, "data.json");
        assert_eq!(config.page_size, 4);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = DirectoryConfig::load(dir.path()).unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = DirectoryConfig::default();
        config.set(KEY_PAGE_SIZE, "10").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = DirectoryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 10);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page-size": 2}"#).unwrap();

        let loaded = DirectoryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 2);
        assert_eq!(loaded.data_file, "data.json");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = DirectoryConfig::default();
        assert!(config.set(KEY_PAGE_SIZE, "0").is_err());
        assert!(config.set(KEY_PAGE_SIZE, "four").is_err());
        assert_eq!(config.page_size, 4);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = DirectoryConfig::default();
        assert!(config.set("color", "red").is_err());
        assert_eq!(config.get("color"), None);
    }

    #[test]
    fn test_list_all() {
        let all = DirectoryConfig::default().list_all();
        assert_eq!(
            all,
            vec![
                ("data-file".to_string(), "data.json".to_string()),
                ("page-size".to_string(), "4".to_string()),
            ]
        );
    }
}
