//! # Storage Layer
//!
//! Two pieces of state back an invbook session:
//!
//! - [`records::RecordStore`]: the ordered, in-memory table of invoices. It is
//!   owned by the session and only leaves memory through an export.
//! - [`AttachmentStore`]: the flat folder holding one document per invoice,
//!   keyed by file name (`<invoice number>.pdf`).
//!
//! ## Implementations
//!
//! - [`fs::AttachmentDir`]: Production folder on disk (`pdf_factures/` by default)
//! - [`memory::InMemoryAttachments`]: Map-backed attachments for testing
//!
//! Attachments are written on submission and never deleted by this crate. A
//! record may therefore point at a file that was never stored or was removed
//! by hand; [`AttachmentStore::resolve`] reports that as [`Attachment::Missing`]
//! rather than an error.

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;
pub mod records;

/// Outcome of looking up an attachment by file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    Found(Vec<u8>),
    Missing,
}

impl Attachment {
    pub fn is_found(&self) -> bool {
        matches!(self, Attachment::Found(_))
    }
}

/// Abstract interface for attachment storage.
pub trait AttachmentStore {
    /// Create the storage location if absent. Idempotent.
    fn ensure_exists(&self) -> Result<()>;

    /// Write `content` as the attachment of `invoice_number`, replacing any
    /// previous file of the same name. Returns the stored file name.
    fn store(&mut self, invoice_number: &str, content: &[u8]) -> Result<String>;

    /// Look up an attachment by file name.
    fn resolve(&self, file_name: &str) -> Result<Attachment>;

    /// Where `file_name` lives (or would live) in this store.
    fn path_of(&self, file_name: &str) -> PathBuf;

    /// The folder itself.
    fn location(&self) -> &Path;
}
