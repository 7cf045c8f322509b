use crate::error::{InvbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ATTACHMENT_DIR: &str = "pdf_factures";
const DEFAULT_EXPORT_FILE: &str = "tableau_achats.xlsx";

/// Keys accepted by [`InvbookConfig::get`] and [`InvbookConfig::set`].
pub const CONFIG_KEYS: [&str; 2] = ["attachment-dir", "export-file"];

/// Configuration for invbook, stored in .invbook/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvbookConfig {
    /// Folder holding uploaded documents, relative to the working directory
    #[serde(default = "default_attachment_dir")]
    pub attachment_dir: String,

    /// Spreadsheet written by the export command
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_attachment_dir() -> String {
    DEFAULT_ATTACHMENT_DIR.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for InvbookConfig {
    fn default() -> Self {
        Self {
            attachment_dir: default_attachment_dir(),
            export_file: default_export_file(),
        }
    }
}

impl InvbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(InvbookError::Io)?;
        let config: InvbookConfig =
            serde_json::from_str(&content).map_err(InvbookError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(InvbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(InvbookError::Serialization)?;
        fs::write(config_path, content).map_err(InvbookError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "attachment-dir" => Some(self.attachment_dir.clone()),
            "export-file" => Some(self.export_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(InvbookError::Config(format!("{} cannot be empty", key)));
        }
        match key {
            "attachment-dir" => self.attachment_dir = value.to_string(),
            "export-file" => self.export_file = value.to_string(),
            _ => return Err(InvbookError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}
