use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::records::RecordStore;
use std::path::Path;

pub fn run(records: &RecordStore, path: &Path) -> Result<CmdResult> {
    records.export(path)?;

    let mut result = CmdResult::default().with_written_paths(vec![path.to_path_buf()]);
    result.add_message(CmdMessage::success(format!(
        "Exported {} invoices to {}",
        records.len(),
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvbookError;
    use crate::store::records::read_export;
    use tempfile::TempDir;

    #[test]
    fn exports_every_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tableau_achats.xlsx");
        let records = RecordStore::seeded();

        let result = run(&records, &path).unwrap();

        assert_eq!(read_export(&path).unwrap(), records.list());
        assert_eq!(result.written_paths, vec![path.clone()]);
        assert!(result.messages[0].content.starts_with("Exported 3 invoices"));
    }

    #[test]
    fn unwritable_path_surfaces_error() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be overwritten by a file.
        let err = run(&RecordStore::seeded(), dir.path()).unwrap_err();
        assert!(matches!(err, InvbookError::Io(_)));
    }
}
