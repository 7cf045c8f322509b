use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InvbookError, Result};
use crate::model::{validate_invoice_number, Amount, InvoiceRecord, Status, ATTACHMENT_EXT};
use crate::store::records::RecordStore;
use crate::store::AttachmentStore;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A document handed in with the form. Only PDFs are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        if !has_document_extension(&file_name) {
            return Err(InvbookError::InvalidUpload(format!(
                "{} is not a {} document",
                file_name, ATTACHMENT_EXT
            )));
        }
        Ok(Self { file_name, content })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        // Check the name before touching the disk.
        if !has_document_extension(&file_name) {
            return Upload::new(file_name, Vec::new());
        }
        let content = fs::read(path).map_err(InvbookError::Io)?;
        Upload::new(file_name, content)
    }
}

fn has_document_extension(file_name: &str) -> bool {
    file_name
        .to_ascii_lowercase()
        .ends_with(ATTACHMENT_EXT)
}

/// The values of one form submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub date: NaiveDate,
    pub invoice_number: String,
    pub description: String,
    pub amount: Amount,
    pub status: Status,
    pub upload: Option<Upload>,
}

/// Store the uploaded document, then append a record pointing at it.
///
/// A submission without an upload adds nothing and reports nothing. The
/// invoice number names the stored file, so one that could leave the
/// attachment folder is rejected before anything is written.
pub fn run<A: AttachmentStore>(
    records: &mut RecordStore,
    attachments: &mut A,
    submission: Submission,
) -> Result<CmdResult> {
    let Some(upload) = submission.upload else {
        debug!(
            invoice = %submission.invoice_number,
            "submission without upload ignored"
        );
        return Ok(CmdResult::default());
    };

    validate_invoice_number(&submission.invoice_number)?;
    let attachment_name = attachments.store(&submission.invoice_number, &upload.content)?;

    let record = InvoiceRecord::new(
        submission.date,
        submission.invoice_number,
        submission.description,
        submission.amount,
        submission.status,
        attachment_name,
    );
    records.append(record.clone());
    debug!(invoice = %record.invoice_number, rows = records.len(), "invoice added");

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Invoice {} added",
        record.invoice_number
    )));
    Ok(result)
}
