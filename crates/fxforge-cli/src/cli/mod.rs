//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// FXForge has no subcommands: invoking the binary starts the interactive
/// interview on standard input/output.
#[derive(Debug, Parser)]
#[command(
    name    = "fxforge",
    bin_name = "fxforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Interactive FiveM resource scaffolding",
    long_about = "FXForge asks a short series of questions and generates a \
                  ready-to-run FiveM resource skeleton in the current directory.",
    after_help = "EXAMPLES:\n\
        \x20 fxforge                      # answer the prompts, get a resource folder\n\
        \x20 fxforge -v                   # same, with progress logging\n\
        \x20 fxforge --no-color < answers.txt"
)]
pub struct Cli {
    /// Flags for the interactive run.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── tests ─────────────────────────────────────────────────────────────────────
