//! # CLI Layer
//!
//! This module is **one possible UI client** for invbook: it plays the part of
//! the bookkeeping form and its export button.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs the logging subscriber
//! - Formats output for human consumption
//!
//! ## Sessions
//!
//! Records live in memory for as long as the session does. A plain
//! invocation (`invbook add ...`) is a session of one command: it starts from
//! the seed rows, runs, prints, and forgets. `invbook session` keeps the same
//! session alive across many commands read from stdin, so several invoices can
//! be added before exporting them.

use super::print::{print_config, print_messages, print_previews, print_records};
use super::setup::{Cli, Commands, SessionLine};
use chrono::Local;
use clap::Parser;
use invbook::api::{CmdMessage, ConfigAction, Submission, Upload};
use invbook::error::{InvbookError, Result};
use invbook::init::{initialize, InvbookContext};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "INVBOOK_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().map_err(InvbookError::Io)?;
    let mut ctx = initialize(&cwd)?;

    match cli.command {
        Some(Commands::Session) => run_session(&mut ctx, io::stdin().lock()),
        Some(cmd) => dispatch(&mut ctx, cmd),
        None => handle_list(&ctx),
    }
}

/// Filter used when `INVBOOK_LOG` is unset. Warnings already reach the user
/// as printed messages, so only errors are logged unless asked for more.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "invbook=debug"
    } else {
        "error"
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn dispatch(ctx: &mut InvbookContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List => handle_list(ctx),
        Commands::Add {
            number,
            date,
            description,
            amount,
            status,
            file,
            export,
        } => {
            let submission = Submission {
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                invoice_number: number,
                description,
                amount,
                status,
                upload: file.map(Upload::from_path).transpose()?,
            };
            handle_add(ctx, submission, export)
        }
        Commands::Preview { number } => handle_preview(ctx, number),
        Commands::Fetch { number, dest } => handle_fetch(ctx, number, dest),
        Commands::Export { output } => handle_export(ctx, output),
        Commands::Init => handle_init(ctx),
        Commands::Config { key, value } => handle_config(ctx, key, value),
        Commands::Session => {
            print_messages(&[CmdMessage::info("Already in a session")]);
            Ok(())
        }
    }
}

fn handle_list(ctx: &InvbookContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut InvbookContext, submission: Submission, export: bool) -> Result<()> {
    let mut result = ctx.api.submit(submission)?;
    if export {
        result.merge(ctx.api.export()?);
    }
    print_messages(&result.messages);
    // Show the table as it stands after the submission.
    handle_list(ctx)
}

fn handle_preview(ctx: &InvbookContext, number: Option<String>) -> Result<()> {
    let result = ctx.api.preview(number.as_deref())?;
    print_previews(&result.previews);
    print_messages(&result.messages);
    Ok(())
}

fn handle_fetch(ctx: &InvbookContext, number: String, dest: PathBuf) -> Result<()> {
    let result = ctx.api.fetch(&number, &dest)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &InvbookContext, output: Option<PathBuf>) -> Result<()> {
    let result = match output {
        Some(path) => ctx.api.export_to(&path)?,
        None => ctx.api.export()?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &InvbookContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &InvbookContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

/// Read commands line by line and run them all against one session. A bad
/// line is reported and skipped; `quit`, `exit` or end of input ends it.
fn run_session<R: BufRead>(ctx: &mut InvbookContext, input: R) -> Result<()> {
    print_prompt();
    for line in input.lines() {
        let line = line.map_err(InvbookError::Io)?;
        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            run_session_line(ctx, trimmed);
        }
        print_prompt();
    }
    Ok(())
}

fn run_session_line(ctx: &mut InvbookContext, line: &str) {
    let words = match split_line(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    match SessionLine::try_parse_from(words) {
        Ok(parsed) => {
            if let Err(e) = dispatch(ctx, parsed.command) {
                eprintln!("Error: {}", e);
            }
        }
        // Help and usage errors are printed by clap itself.
        Err(e) => {
            let _ = e.print();
        }
    }
}

fn print_prompt() {
    print!("invbook> ");
    let _ = io::stdout().flush();
}

/// Split a session line into words, honouring single and double quotes so
/// descriptions can contain spaces.
fn split_line(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(InvbookError::Api(format!("Unclosed quote in: {}", line)));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
