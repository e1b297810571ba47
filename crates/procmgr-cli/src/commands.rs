//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;
use procmgr_core::utils::validation::parse_pid;

/// Available commands for the process manager.
#[derive(Subcommand)]
pub enum Commands {
    /// List running processes
    List {
        /// Only show processes whose name contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show memory and CPU usage of one process
    Show {
        /// Process ID
        #[arg(value_parser = pid_arg)]
        pid: u32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Kill a process immediately (irreversible)
    Kill {
        /// Process ID
        #[arg(value_parser = pid_arg)]
        pid: u32,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
        /// Wait until the process has left the process table
        #[arg(short, long)]
        wait: bool,
    },

    /// Start a process from an executable path
    Start {
        /// Path to the executable
        path: String,
        /// Arguments passed to the executable
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn pid_arg(raw: &str) -> Result<u32, String> {
    parse_pid(raw).map_err(|e| e.to_string())
}
