use crate::commands::{AttachmentPreview, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::records::RecordStore;
use crate::store::{Attachment, AttachmentStore};
use tracing::warn;

/// Resolve the attachment of every record, or only of those numbered
/// `invoice_number` when given.
///
/// A missing document yields one warning for that record; the remaining
/// records are still resolved.
pub fn run<A: AttachmentStore>(
    records: &RecordStore,
    attachments: &A,
    invoice_number: Option<&str>,
) -> Result<CmdResult> {
    let mut previews = Vec::new();
    let mut messages = Vec::new();

    let selected = records
        .list()
        .iter()
        .filter(|r| invoice_number.map_or(true, |n| r.invoice_number == n));

    let mut matched = 0;
    for record in selected {
        matched += 1;
        match attachments.resolve(&record.attachment_name)? {
            Attachment::Found(bytes) => previews.push(AttachmentPreview {
                invoice_number: record.invoice_number.clone(),
                description: record.description.clone(),
                file_name: record.attachment_name.clone(),
                path: attachments.path_of(&record.attachment_name),
                size: bytes.len(),
            }),
            Attachment::Missing => {
                warn!(
                    invoice = %record.invoice_number,
                    file = %record.attachment_name,
                    "attachment not found"
                );
                messages.push(CmdMessage::warning(format!(
                    "Attachment not found for {}",
                    record.invoice_number
                )));
            }
        }
    }

    let mut result = CmdResult::default().with_previews(previews);
    if let (Some(number), 0) = (invoice_number, matched) {
        result.add_message(CmdMessage::info(format!("No invoice numbered {}", number)));
    }
    for message in messages {
        result.add_message(message);
    }
    Ok(result)
}
