// Tue Aug 04 2026 - Alex

pub mod error;

pub use error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::store::AliasMap;

pub const CONFIG_FILE: &str = "config.toml";

/// On-disk layout: a single top-level `[aliases]` table of
/// `name = "directory"` pairs, editable by hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub aliases: AliasMap,
}

pub trait Persistence {
    fn load(&self) -> Result<AliasMap, ConfigError>;
    fn save(&self, aliases: &AliasMap) -> Result<(), ConfigError>;
}

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self {
            path: default_path(),
        }
    }

    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Persistence for ConfigStore {
    fn load(&self) -> Result<AliasMap, ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        if !self.path.exists() {
            log::debug!("no config at {}, starting empty", self.path.display());
            return Ok(AliasMap::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        Ok(file.aliases)
    }

    fn save(&self, aliases: &AliasMap) -> Result<(), ConfigError> {
        let file = ConfigFile {
            aliases: aliases.clone(),
        };
        let contents = toml::to_string(&file)?;

        fs::write(&self.path, contents).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("goto")
        .join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::at(dir.path().join("goto").join(CONFIG_FILE));

        let aliases = store.load().unwrap();

        assert!(aliases.is_empty());
        assert!(dir.path().join("goto").is_dir());
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::at(dir.path().join(CONFIG_FILE));

        let mut aliases = AliasMap::new();
        aliases.insert("work".to_string(), "/home/alex/work".to_string());
        aliases.insert("home".to_string(), "/home/alex".to_string());

        store.save(&aliases).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, aliases);
    }

    #[test]
    fn test_save_writes_aliases_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let store = ConfigStore::at(&path);

        let mut aliases = AliasMap::new();
        aliases.insert("work".to_string(), "/b".to_string());
        store.save(&aliases).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[aliases]"));
        assert!(contents.contains("work = \"/b\""));
    }

    #[test]
    fn test_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "aliases = 3\n").unwrap();

        let store = ConfigStore::at(&path);

        assert!(matches!(store.load(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overwrite_replaces_whole_file() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::at(dir.path().join(CONFIG_FILE));

        let mut first = AliasMap::new();
        first.insert("work".to_string(), "/b".to_string());
        first.insert("home".to_string(), "/h".to_string());
        store.save(&first).unwrap();

        let mut second = AliasMap::new();
        second.insert("work".to_string(), "/elsewhere".to_string());
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap(), second);
    }
}
