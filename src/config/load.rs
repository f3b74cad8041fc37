use crate::config::types::{Config, Settings};
use crate::error::{RenameError, Result};
use log::debug;
use std::fs;
use std::path::Path;

impl Config {
    /// 沒有指定設定檔時使用預設值
    pub fn new(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::load_settings(path)?,
            None => Settings::default(),
        };

        Ok(Self { settings })
    }

    fn load_settings(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path).map_err(|e| RenameError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let settings: Settings = serde_json::from_str(&content).map_err(|e| RenameError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        debug!("Loaded settings from {}: {settings:?}", path.display());
        Ok(settings)
    }
}
