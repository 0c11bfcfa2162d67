use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::{
    error::{Error, Result},
    types::FileKind,
};

pub const CONFIG_FILE_NAMES: [&str; 2] = [".soma-inspector.json", "soma-inspector.json"];
pub const DEFAULT_WATCH_DEBOUNCE_MS: u64 = 200;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Directory `load_folder` paths are resolved against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_root: Option<PathBuf>,

    /// Extension (without dot) -> kind, on top of the built-in mapping
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub file_kinds: BTreeMap<String, FileKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_debounce_ms: Option<u64>,

    // Directory the config was loaded from (internal, not exposed in JSON)
    #[serde(skip)]
    pub config_dir: Option<PathBuf>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        config.config_dir = path.parent().map(Path::to_path_buf);
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.watch_debounce_ms == Some(0) {
            return Err(Error::ConfigError(
                "watch_debounce_ms must be greater than zero".to_string(),
            ));
        }
        if let Some(extension) = self.file_kinds.keys().find(|ext| ext.is_empty() || ext.starts_with('.')) {
            return Err(Error::ConfigError(format!(
                "file_kinds key '{extension}' must be an extension without the leading dot"
            )));
        }
        Ok(())
    }

    /// Walk up from `start_path` looking for a config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = if start_path.is_file() {
            start_path.parent()?
        } else {
            start_path
        };

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Config governing `file_path`, or the defaults when there is none
    pub fn discover(file_path: &Path) -> Result<Self> {
        match Self::find_config_file(file_path) {
            Some(path) => {
                debug!("Using config {:?}", path);
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Kind of `path` by extension, config overrides first
    pub fn kind_for(&self, path: &Path) -> Option<FileKind> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        self.file_kinds
            .iter()
            .find(|(ext, _)| ext.eq_ignore_ascii_case(&extension))
            .map(|(_, kind)| *kind)
            .or_else(|| FileKind::from_extension(&extension))
    }

    /// Asset root with relative paths resolved against the config directory.
    /// Falls back to the config directory, then the current directory.
    pub fn resolved_asset_root(&self) -> PathBuf {
        let base = self.config_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        match &self.asset_root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => base.join(root),
            None => base,
        }
    }

    pub fn watch_debounce(&self) -> Duration {
        Duration::from_millis(self.watch_debounce_ms.unwrap_or(DEFAULT_WATCH_DEBOUNCE_MS))
    }
}
