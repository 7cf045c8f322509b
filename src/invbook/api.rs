//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all invbook operations, whatever UI drives them.
//!
//! ## The Session
//!
//! An [`InvbookApi`] value *is* the bookkeeping session. It exclusively owns
//! the [`RecordStore`] (seeded with the starting rows) and the attachment
//! store. Submissions mutate it through `&mut self`; nothing lives in module
//! level state. When the value is dropped, every record that was not exported
//! is gone, while attachments stay on disk.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O for humans**: No stdout, stderr, or formatting
//!
//! ## Generic Over AttachmentStore
//!
//! - Production: `InvbookApi<AttachmentDir>`
//! - Testing: `InvbookApi<InMemoryAttachments>`

use crate::commands;
use crate::error::Result;
use crate::store::records::RecordStore;
use crate::store::AttachmentStore;
use std::path::Path;

pub struct InvbookApi<A: AttachmentStore> {
    records: RecordStore,
    attachments: A,
    paths: commands::InvbookPaths,
}

impl<A: AttachmentStore> InvbookApi<A> {
    /// Start a session with the seed rows.
    pub fn new(attachments: A, paths: commands::InvbookPaths) -> Self {
        Self::with_records(RecordStore::seeded(), attachments, paths)
    }

    pub fn with_records(records: RecordStore, attachments: A, paths: commands::InvbookPaths) -> Self {
        Self {
            records,
            attachments,
            paths,
        }
    }

    pub fn submit(&mut self, submission: commands::Submission) -> Result<commands::CmdResult> {
        commands::submit::run(&mut self.records, &mut self.attachments, submission)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.records)
    }

    pub fn preview(&self, invoice_number: Option<&str>) -> Result<commands::CmdResult> {
        commands::preview::run(&self.records, &self.attachments, invoice_number)
    }

    pub fn fetch(&self, invoice_number: &str, dest: &Path) -> Result<commands::CmdResult> {
        commands::fetch::run(&self.records, &self.attachments, invoice_number, dest)
    }

    /// Export to the configured spreadsheet file.
    pub fn export(&self) -> Result<commands::CmdResult> {
        commands::export::run(&self.records, &self.paths.export_file)
    }

    pub fn export_to(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.records, path)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.attachments)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn attachments(&self) -> &A {
        &self.attachments
    }

    pub fn paths(&self) -> &commands::InvbookPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::submit::{Submission, Upload};
pub use commands::{
    AttachmentPreview, CmdMessage, CmdResult, InvbookPaths, ListedRecord, MessageLevel,
};
