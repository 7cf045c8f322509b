use super::{Attachment, AttachmentStore};
use crate::error::Result;
use crate::model::attachment_file_name;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory attachments for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryAttachments {
    files: HashMap<String, Vec<u8>>,
}

impl InMemoryAttachments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AttachmentStore for InMemoryAttachments {
    fn ensure_exists(&self) -> Result<()> {
        Ok(())
    }

    fn store(&mut self, invoice_number: &str, content: &[u8]) -> Result<String> {
        let file_name = attachment_file_name(invoice_number);
        self.files.insert(file_name.clone(), content.to_vec());
        Ok(file_name)
    }

    fn resolve(&self, file_name: &str) -> Result<Attachment> {
        Ok(self
            .files
            .get(file_name)
            .cloned()
            .map(Attachment::Found)
            .unwrap_or(Attachment::Missing))
    }

    fn path_of(&self, file_name: &str) -> PathBuf {
        self.location().join(file_name)
    }

    fn location(&self) -> &Path {
        Path::new("memory")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::seed_records;

    pub struct AttachmentFixture {
        pub attachments: InMemoryAttachments,
    }

    impl Default for AttachmentFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AttachmentFixture {
        pub fn new() -> Self {
            Self {
                attachments: InMemoryAttachments::new(),
            }
        }

        /// Store a small document for every seed row.
        pub fn with_seed_documents(mut self) -> Self {
            for record in seed_records() {
                let content = format!("%PDF {}", record.invoice_number);
                self.attachments
                    .store(&record.invoice_number, content.as_bytes())
                    .unwrap();
            }
            self
        }

        pub fn with_document(mut self, invoice_number: &str, content: &[u8]) -> Self {
            self.attachments.store(invoice_number, content).unwrap();
            self
        }
    }
}
