use crate::error::{InvbookError, Result};
use crate::model::{seed_records, Amount, InvoiceRecord, Status};
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDate;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Name of the single worksheet in an export.
pub const SHEET_NAME: &str = "Achats";

/// Spreadsheet header, in column order.
pub const EXPORT_COLUMNS: [&str; 6] = [
    "Date",
    "Invoice Number",
    "Description",
    "Amount",
    "Status",
    "Attachment File Name",
];

/// Ordered collection of invoice records. Exclusively owns its rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<InvoiceRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the seed rows every session starts with.
    pub fn seeded() -> Self {
        Self {
            records: seed_records(),
        }
    }

    pub fn append(&mut self, record: InvoiceRecord) {
        self.records.push(record);
    }

    pub fn list(&self) -> &[InvoiceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write every record to an Excel workbook at `path`, replacing any
    /// existing file. The workbook is built in memory first so a failed
    /// write never follows a partially serialized table.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_workbook()?;
        fs::write(path.as_ref(), bytes).map_err(InvbookError::Io)?;
        debug!(
            path = %path.as_ref().display(),
            rows = self.records.len(),
            "exported records"
        );
        Ok(())
    }

    fn to_workbook(&self) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, name) in (0u16..).zip(EXPORT_COLUMNS) {
            sheet.write_string_with_format(0, col, name, &header)?;
        }

        for (row, record) in (1u32..).zip(&self.records) {
            let amount = record.amount.value().to_f64().ok_or_else(|| {
                InvbookError::SpreadsheetFormat(format!(
                    "amount {} of {} does not fit a number cell",
                    record.amount, record.invoice_number
                ))
            })?;
            sheet.write_string(row, 0, record.date.to_string())?;
            sheet.write_string(row, 1, &record.invoice_number)?;
            sheet.write_string(row, 2, &record.description)?;
            sheet.write_number(row, 3, amount)?;
            sheet.write_string(row, 4, record.status.as_str())?;
            sheet.write_string(row, 5, &record.attachment_name)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}

/// Read a workbook produced by [`RecordStore::export`].
pub fn read_export<P: AsRef<Path>>(path: P) -> Result<Vec<InvoiceRecord>> {
    let mut workbook: Xlsx<_> = open_workbook(path.as_ref())?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| InvbookError::SpreadsheetFormat("workbook has no sheet".to_string()))??;

    range
        .rows()
        .enumerate()
        .skip(1)
        .map(|(line, row)| parse_row(line, row))
        .collect()
}

fn parse_row(line: usize, row: &[Data]) -> Result<InvoiceRecord> {
    let text = |col: usize| -> Result<String> {
        match row.get(col) {
            Some(Data::String(s)) => Ok(s.clone()),
            Some(Data::Empty) | None => Ok(String::new()),
            Some(other) => Err(InvbookError::SpreadsheetFormat(format!(
                "row {}, column {:?}: expected text, found {:?}",
                line + 1,
                EXPORT_COLUMNS[col],
                other
            ))),
        }
    };

    let date = text(0)?;
    let date = NaiveDate::from_str(&date).map_err(|e| {
        InvbookError::SpreadsheetFormat(format!("row {}: bad date {:?}: {}", line + 1, date, e))
    })?;

    let amount = match row.get(3) {
        Some(Data::Float(v)) => Decimal::from_f64(*v),
        Some(Data::Int(v)) => Some(Decimal::from(*v)),
        _ => None,
    }
    .ok_or_else(|| {
        InvbookError::SpreadsheetFormat(format!("row {}: amount is not a number", line + 1))
    })?;

    Ok(InvoiceRecord::new(
        date,
        text(1)?,
        text(2)?,
        Amount::new(amount)?,
        text(4)?.parse::<Status>()?,
        text(5)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(number: &str) -> InvoiceRecord {
        InvoiceRecord::new(
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            number,
            "Test",
            Amount::from(500),
            Status::Pending,
            format!("{}.pdf", number),
        )
    }

    fn first_sheet(path: &Path) -> calamine::Range<Data> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        workbook.worksheet_range_at(0).unwrap().unwrap()
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = RecordStore::new();
        store.append(record("B"));
        store.append(record("A"));
        store.append(record("B"));

        let numbers: Vec<_> = store.list().iter().map(|r| r.invoice_number.as_str()).collect();
        assert_eq!(numbers, vec!["B", "A", "B"]);
    }

    #[test]
    fn seeded_store_starts_with_three_rows() {
        let store = RecordStore::seeded();
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn export_round_trips_through_workbook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tableau_achats.xlsx");

        let mut store = RecordStore::seeded();
        let mut row = record("FA-004");
        row.amount = "1200.50".parse().unwrap();
        store.append(row);
        store.export(&path).unwrap();

        let read = read_export(&path).unwrap();
        assert_eq!(read, store.list());
    }

    #[test]
    fn export_writes_header_in_column_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tableau_achats.xlsx");

        RecordStore::seeded().export(&path).unwrap();

        let sheet = first_sheet(&path);
        let header: Vec<_> = sheet.rows().next().unwrap().to_vec();
        let expected: Vec<_> = EXPORT_COLUMNS
            .iter()
            .map(|name| Data::String(name.to_string()))
            .collect();
        assert_eq!(header, expected);
        assert_eq!(
            sheet.get_value((1, 0)),
            Some(&Data::String("2025-01-10".to_string()))
        );
        assert_eq!(
            sheet.get_value((2, 2)),
            Some(&Data::String("Pièces détachées B".to_string()))
        );
    }

    #[test]
    fn amount_is_written_as_a_number_cell() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tableau_achats.xlsx");

        RecordStore::seeded().export(&path).unwrap();

        let sheet = first_sheet(&path);
        assert_eq!(sheet.get_value((1, 3)), Some(&Data::Float(18000.0)));
        assert_eq!(sheet.get_value((2, 3)), Some(&Data::Float(600.0)));
    }

    #[test]
    fn export_of_empty_store_has_only_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.xlsx");

        RecordStore::new().export(&path).unwrap();

        assert!(read_export(&path).unwrap().is_empty());
        assert_eq!(first_sheet(&path).height(), 1);
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tableau_achats.xlsx");
        fs::write(&path, "stale content that is not a workbook\n".repeat(50)).unwrap();

        RecordStore::seeded().export(&path).unwrap();

        assert_eq!(read_export(&path).unwrap().len(), 3);
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("tableau_achats.xlsx");

        let err = RecordStore::seeded().export(&path).unwrap_err();
        assert!(matches!(err, InvbookError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn reading_a_non_workbook_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tableau_achats.xlsx");
        fs::write(&path, "Date,Invoice Number\n").unwrap();

        assert!(read_export(&path).is_err());
    }

    #[test]
    fn descriptions_with_separators_survive_export() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tableau_achats.xlsx");

        let mut store = RecordStore::new();
        let mut row = record("FA-010");
        row.description = "Bolts, nuts \"M8\"; <washers> & co".to_string();
        store.append(row);
        store.export(&path).unwrap();

        assert_eq!(read_export(&path).unwrap(), store.list());
    }
}
