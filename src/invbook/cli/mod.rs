//! Argument parsing (`setup`), dispatch and the session loop (`commands`), and
//! terminal rendering (`print`) for the `invbook` binary.
//!
//! For the overall architecture, see the library documentation.

mod commands;
mod print;
mod setup;

pub use commands::run;
