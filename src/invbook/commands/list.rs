use crate::commands::{CmdResult, ListedRecord};
use crate::error::Result;
use crate::store::records::RecordStore;

pub fn run(records: &RecordStore) -> Result<CmdResult> {
    let listed = records
        .list()
        .iter()
        .enumerate()
        .map(|(i, record)| ListedRecord {
            index: i + 1,
            record: record.clone(),
        })
        .collect();

    Ok(CmdResult::default().with_listed_records(listed))
}
