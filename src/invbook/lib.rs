//! # Invbook Architecture
//!
//! Invbook is a small **purchase-invoice bookkeeping library** with a CLI
//! client. It records invoices, keeps one PDF per invoice in a folder, shows
//! the table, previews the attached documents and exports the table to a
//! spreadsheet.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The session: owns the record table and attachments      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - submit, list, preview, fetch, export, init, config       │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore (in memory, xlsx export)                     │
//! │  - AttachmentStore trait: AttachmentDir, InMemoryAttachments│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Lifecycle
//!
//! Records are only ever created by a form submission, and only when a
//! document was uploaded with it; a submission without one is dropped without
//! notice. Nothing updates or deletes records. They live as long as the
//! session ([`api::InvbookApi`]) and survive it only through an export.
//!
//! The attachment of a record is found purely by naming convention
//! (`<invoice number>.pdf`). Neither invoice-number uniqueness nor the
//! existence of the referenced file is enforced, so the preview reports
//! missing documents as warnings instead of failing.
//!
//! ## Logging
//!
//! Library code emits `tracing` events only; installing a subscriber is the
//! binary's job. User-facing output travels as [`commands::CmdMessage`]s.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and session
//! - [`commands`]: Business logic for each command
//! - [`store`]: Record table and attachment storage
//! - [`model`]: Core data types (`InvoiceRecord`, `Amount`, `Status`)
//! - [`config`]: Configuration management
//! - [`init`]: Builds a production session from the working directory
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
