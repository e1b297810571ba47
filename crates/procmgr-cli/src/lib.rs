//! Command-line adapter for procmgr.
//!
//! Exposes the clap parser, the composition root, command handlers and
//! terminal presentation helpers. The `procmgr` binary is a thin shell
//! around this library.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary target.
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::{CliError, exit_code_for, is_broken_pipe};
pub use parser::Cli;
