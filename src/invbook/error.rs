use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvbookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Spreadsheet write error: {0}")]
    SpreadsheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Spreadsheet read error: {0}")]
    SpreadsheetRead(#[from] calamine::XlsxError),

    #[error("Spreadsheet format error: {0}")]
    SpreadsheetFormat(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid status: {0} (expected Paid or Pending)")]
    InvalidStatus(String),

    #[error("Invalid invoice number: {0:?} (must be non-empty and free of '/', '\\' and '..')")]
    InvalidInvoiceNumber(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, InvbookError>;
