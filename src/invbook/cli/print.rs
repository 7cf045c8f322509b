use colored::Colorize;
use invbook::api::{AttachmentPreview, CmdMessage, ListedRecord, MessageLevel};
use invbook::config::{InvbookConfig, CONFIG_KEYS};
use invbook::model::Status;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DESCRIPTION_WIDTH: usize = 32;
const HEADERS: [&str; 7] = [
    "#",
    "Date",
    "Invoice Number",
    "Description",
    "Amount",
    "Status",
    "Attachment",
];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[ListedRecord]) {
    print!("{}", render_records(records));
}

pub(super) fn print_previews(previews: &[AttachmentPreview]) {
    print!("{}", render_previews(previews));
}

pub(super) fn print_config(config: &InvbookConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Plain-text table of the records. Colors are applied to the status cell
/// only, after padding, so alignment never counts escape codes.
pub(super) fn render_records(records: &[ListedRecord]) -> String {
    if records.is_empty() {
        return "No invoices recorded.\n".to_string();
    }

    let rows: Vec<[String; 7]> = records
        .iter()
        .map(|lr| {
            let r = &lr.record;
            [
                lr.index.to_string(),
                r.date.to_string(),
                r.invoice_number.clone(),
                truncate_to_width(&r.description, DESCRIPTION_WIDTH),
                r.amount.to_string(),
                r.status.to_string(),
                r.attachment_name.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w))
        .collect();
    out.push_str(&format!("{}\n", header.join("  ").trim_end().bold()));

    for (row, lr) in rows.iter().zip(records) {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                // Amounts read better right-aligned.
                let padded = if i == 4 {
                    format!("{:>width$}", cell, width = widths[i])
                } else {
                    pad(cell, widths[i])
                };
                if i == 5 {
                    color_status(lr.record.status, &padded)
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}

pub(super) fn render_previews(previews: &[AttachmentPreview]) -> String {
    let mut out = String::new();
    for p in previews {
        out.push_str(&format!(
            "{}\n",
            format!("{} - {}", p.invoice_number, p.description).bold()
        ));
        out.push_str(&format!(
            "    {} ({} bytes)  {}\n",
            p.file_name,
            p.size,
            p.path.display().to_string().dimmed()
        ));
        out.push_str(&format!(
            "    {}\n",
            format!("invbook fetch {} <dest>", p.invoice_number).dimmed()
        ));
    }
    out
}

fn color_status(status: Status, cell: &str) -> String {
    match status {
        Status::Paid => cell.green().to_string(),
        Status::Pending => cell.yellow().to_string(),
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
