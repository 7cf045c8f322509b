use crate::error::InvbookError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Extension given to every stored attachment.
pub const ATTACHMENT_EXT: &str = ".pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Paid,
    Pending,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Paid => "Paid",
            Status::Pending => "Pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = InvbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" => Ok(Status::Paid),
            "pending" => Ok(Status::Pending),
            _ => Err(InvbookError::InvalidStatus(s.to_string())),
        }
    }
}

/// Invoice total including tax. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, InvbookError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(InvbookError::InvalidAmount(format!(
                "{} is negative",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Amount {
    type Err = InvbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .map_err(|e| InvbookError::InvalidAmount(format!("{}: {}", trimmed, e)))?;
        Amount::new(value)
    }
}

/// One purchase invoice row. Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRecord {
    pub date: NaiveDate,
    pub invoice_number: String,
    pub description: String,
    pub amount: Amount,
    pub status: Status,
    pub attachment_name: String,
}

impl InvoiceRecord {
    pub fn new(
        date: NaiveDate,
        invoice_number: impl Into<String>,
        description: impl Into<String>,
        amount: Amount,
        status: Status,
        attachment_name: impl Into<String>,
    ) -> Self {
        Self {
            date,
            invoice_number: invoice_number.into(),
            description: description.into(),
            amount,
            status,
            attachment_name: attachment_name.into(),
        }
    }
}

/// An invoice number names a file inside the flat attachment folder, so it
/// must be non-empty and must not contain path separators or `..`.
pub fn validate_invoice_number(invoice_number: &str) -> Result<(), InvbookError> {
    let bad = invoice_number.trim().is_empty()
        || invoice_number.contains(['/', '\\'])
        || invoice_number.contains("..");
    if bad {
        return Err(InvbookError::InvalidInvoiceNumber(
            invoice_number.to_string(),
        ));
    }
    Ok(())
}

/// File name an attachment for `invoice_number` is stored under.
pub fn attachment_file_name(invoice_number: &str) -> String {
    format!("{}{}", invoice_number, ATTACHMENT_EXT)
}

/// The three rows every session starts with.
pub fn seed_records() -> Vec<InvoiceRecord> {
    let rows = [
        ((2025, 1, 10), "FA-001", "Engin de chantier A", 18000, Status::Paid),
        ((2025, 1, 15), "FA-002", "Pièces détachées B", 600, Status::Pending),
        ((2025, 1, 20), "FA-003", "Matériaux C", 2400, Status::Paid),
    ];

    rows.into_iter()
        .filter_map(|((y, m, d), number, description, amount, status)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(InvoiceRecord::new(
                date,
                number,
                description,
                Amount::from(amount),
                status,
                attachment_file_name(number),
            ))
        })
        .collect()
}
