use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::AttachmentStore;

pub fn run<A: AttachmentStore>(attachments: &A) -> Result<CmdResult> {
    attachments.ensure_exists()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Attachment directory ready at {}",
        attachments.location().display()
    )));
    Ok(result)
}
