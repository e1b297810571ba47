//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the process manager.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "procmgr")]
#[command(about = "List, inspect, kill and start operating-system processes")]
#[command(version)]
pub struct Cli {
    /// CPU sampling window in milliseconds for `show`
    #[arg(long = "interval-ms", global = true)]
    pub interval_ms: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
