use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use invbook::model::{Amount, Status};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2025-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "invbook", bin_name = "invbook", version = get_version())]
#[command(about = "Record purchase invoices and their PDF documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// One line typed inside `invbook session`.
#[derive(Parser, Debug)]
#[command(name = "invbook", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the invoice table
    #[command(alias = "ls")]
    List,

    /// Submit a new invoice with its PDF document
    #[command(alias = "a")]
    Add {
        /// Invoice number, also the stored document's name
        #[arg(short, long)]
        number: String,

        /// Invoice date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Free text description
        #[arg(short = 'D', long, default_value = "")]
        description: String,

        /// Total including tax
        #[arg(short, long, default_value = "0")]
        amount: Amount,

        /// Paid or Pending
        #[arg(short, long, default_value = "Paid")]
        status: Status,

        /// PDF document to attach. Without it nothing is added.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Export the table right after adding
        #[arg(long)]
        export: bool,
    },

    /// Preview attached documents, warning about missing ones
    #[command(alias = "p")]
    Preview {
        /// Only this invoice number
        number: Option<String>,
    },

    /// Save an invoice's document to a file
    Fetch {
        /// Invoice number
        number: String,

        /// Destination file
        dest: PathBuf,
    },

    /// Export the table to a spreadsheet
    Export {
        /// Write here instead of the configured export file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create the attachment directory
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (attachment-dir, export-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Keep one session open, reading commands from stdin
    Session,
}
