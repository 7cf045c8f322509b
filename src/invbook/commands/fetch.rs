use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InvbookError, Result};
use crate::store::records::RecordStore;
use crate::store::{Attachment, AttachmentStore};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Copy the attachment of the first record numbered `invoice_number` to
/// `dest`. This is the "download" action of the preview.
pub fn run<A: AttachmentStore>(
    records: &RecordStore,
    attachments: &A,
    invoice_number: &str,
    dest: &Path,
) -> Result<CmdResult> {
    let record = records
        .list()
        .iter()
        .find(|r| r.invoice_number == invoice_number)
        .ok_or_else(|| InvbookError::Api(format!("No invoice numbered {}", invoice_number)))?;

    let mut result = CmdResult::default();
    match attachments.resolve(&record.attachment_name)? {
        Attachment::Found(bytes) => {
            fs::write(dest, &bytes).map_err(InvbookError::Io)?;
            debug!(file = %record.attachment_name, dest = %dest.display(), "attachment fetched");
            result = result.with_written_paths(vec![dest.to_path_buf()]);
            result.add_message(CmdMessage::success(format!(
                "Saved {} to {}",
                record.attachment_name,
                dest.display()
            )));
        }
        Attachment::Missing => {
            warn!(invoice = %invoice_number, file = %record.attachment_name, "attachment not found");
            result.add_message(CmdMessage::warning(format!(
                "Attachment not found for {}",
                invoice_number
            )));
        }
    }
    Ok(result)
}
