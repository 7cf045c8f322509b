use super::{Attachment, AttachmentStore};
use crate::error::{InvbookError, Result};
use crate::model::{attachment_file_name, validate_invoice_number};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Attachments kept as plain files in a single directory.
pub struct AttachmentDir {
    root: PathBuf,
}

impl AttachmentDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AttachmentStore for AttachmentDir {
    fn ensure_exists(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(InvbookError::Io)?;
            debug!(dir = %self.root.display(), "created attachment directory");
        }
        Ok(())
    }

    fn store(&mut self, invoice_number: &str, content: &[u8]) -> Result<String> {
        validate_invoice_number(invoice_number)?;
        self.ensure_exists()?;
        let file_name = attachment_file_name(invoice_number);
        let path = self.root.join(&file_name);
        fs::write(&path, content).map_err(InvbookError::Io)?;
        debug!(path = %path.display(), bytes = content.len(), "stored attachment");
        Ok(file_name)
    }

    fn resolve(&self, file_name: &str) -> Result<Attachment> {
        match fs::read(self.root.join(file_name)) {
            Ok(bytes) => Ok(Attachment::Found(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Attachment::Missing),
            Err(e) => Err(InvbookError::Io(e)),
        }
    }

    fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    fn location(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, AttachmentDir) {
        let temp = TempDir::new().unwrap();
        let dir = AttachmentDir::new(temp.path().join("pdf_factures"));
        (temp, dir)
    }

    #[test]
    fn ensure_exists_is_idempotent() {
        let (_temp, dir) = setup();
        assert!(!dir.location().exists());

        dir.ensure_exists().unwrap();
        dir.ensure_exists().unwrap();
        assert!(dir.location().is_dir());
    }

    #[test]
    fn store_then_resolve_returns_same_bytes() {
        let (_temp, mut dir) = setup();
        let bytes = b"%PDF-1.4 x".to_vec();

        let name = dir.store("FA-004", &bytes).unwrap();
        assert_eq!(name, "FA-004.pdf");
        assert_eq!(dir.resolve("FA-004.pdf").unwrap(), Attachment::Found(bytes));
    }

    #[test]
    fn resolve_unknown_name_is_missing_not_error() {
        let (_temp, dir) = setup();
        dir.ensure_exists().unwrap();
        assert_eq!(dir.resolve("FA-999.pdf").unwrap(), Attachment::Missing);
    }

    #[test]
    fn resolve_before_directory_exists_is_missing() {
        let (_temp, dir) = setup();
        assert_eq!(dir.resolve("FA-001.pdf").unwrap(), Attachment::Missing);
    }

    #[test]
    fn store_overwrites_existing_file() {
        let (_temp, mut dir) = setup();
        dir.store("FA-001", b"first version").unwrap();
        dir.store("FA-001", b"second").unwrap();

        assert_eq!(
            dir.resolve("FA-001.pdf").unwrap(),
            Attachment::Found(b"second".to_vec())
        );
        assert_eq!(fs::read_dir(dir.location()).unwrap().count(), 1);
    }

    #[test]
    fn store_refuses_names_outside_the_directory() {
        let (temp, mut dir) = setup();

        let err = dir.store("../escaped", b"%PDF").unwrap_err();
        assert!(matches!(err, InvbookError::InvalidInvoiceNumber(_)));
        assert!(!temp.path().join("escaped.pdf").exists());

        let err = dir.store("2025/001", b"%PDF").unwrap_err();
        assert!(matches!(err, InvbookError::InvalidInvoiceNumber(_)));
        assert!(!dir.location().exists());
    }

    #[test]
    fn path_of_joins_root() {
        let (temp, dir) = setup();
        assert_eq!(
            dir.path_of("FA-002.pdf"),
            temp.path().join("pdf_factures").join("FA-002.pdf")
        );
    }
}
