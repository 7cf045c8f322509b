use crate::config::InvbookConfig;
use crate::model::InvoiceRecord;
use std::path::PathBuf;

pub mod config;
pub mod export;
pub mod fetch;
pub mod init;
pub mod list;
pub mod preview;
pub mod submit;

pub use submit::{Submission, Upload};

/// Filesystem locations a session works with.
#[derive(Debug, Clone)]
pub struct InvbookPaths {
    /// Holds config.json
    pub config_dir: PathBuf,
    pub attachment_dir: PathBuf,
    pub export_file: PathBuf,
}

impl InvbookPaths {
    /// Resolve the configured locations against `cwd`.
    pub fn from_config(cwd: &std::path::Path, config_dir: PathBuf, config: &InvbookConfig) -> Self {
        Self {
            config_dir,
            attachment_dir: cwd.join(&config.attachment_dir),
            export_file: cwd.join(&config.export_file),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record together with its 1-based position in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedRecord {
    pub index: usize,
    pub record: InvoiceRecord,
}

/// What the display layer needs to show a found attachment and offer it for
/// download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPreview {
    pub invoice_number: String,
    pub description: String,
    pub file_name: String,
    pub path: PathBuf,
    pub size: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<InvoiceRecord>,
    pub listed_records: Vec<ListedRecord>,
    pub previews: Vec<AttachmentPreview>,
    pub written_paths: Vec<PathBuf>,
    pub config: Option<InvbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<InvoiceRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<ListedRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_previews(mut self, previews: Vec<AttachmentPreview>) -> Self {
        self.previews = previews;
        self
    }

    pub fn with_written_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.written_paths = paths;
        self
    }

    pub fn with_config(mut self, config: InvbookConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Fold another result's output into this one, keeping order.
    pub fn merge(&mut self, other: CmdResult) {
        self.affected_records.extend(other.affected_records);
        self.listed_records.extend(other.listed_records);
        self.previews.extend(other.previews);
        self.written_paths.extend(other.written_paths);
        if other.config.is_some() {
            self.config = other.config;
        }
        self.messages.extend(other.messages);
    }
}
