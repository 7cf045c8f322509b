use crate::api::{InvbookApi, InvbookPaths};
use crate::config::InvbookConfig;
use crate::error::Result;
use crate::store::fs::AttachmentDir;
use std::path::Path;

/// Directory, relative to the working directory, holding config.json.
pub const CONFIG_DIR: &str = ".invbook";

pub struct InvbookContext {
    pub api: InvbookApi<AttachmentDir>,
    pub config: InvbookConfig,
}

/// Build a fresh session rooted at `cwd`: load config and seed the record
/// table. Nothing is created on disk; the attachment directory appears when
/// a command first needs it.
pub fn initialize(cwd: &Path) -> Result<InvbookContext> {
    let config_dir = cwd.join(CONFIG_DIR);
    let config = InvbookConfig::load(&config_dir)?;
    let paths = InvbookPaths::from_config(cwd, config_dir, &config);

    let attachments = AttachmentDir::new(paths.attachment_dir.clone());

    Ok(InvbookContext {
        api: InvbookApi::new(attachments, paths),
        config,
    })
}
