//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use procmgr_core::{CoreError, ProcessError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The target process does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The caller lacks the privilege to act on the target.
    #[error("{0} (try running with elevated privileges)")]
    AccessDenied(String),

    /// Any other OS-reported process failure.
    #[error("Process error: {0}")]
    Process(String),

    /// IO error (reading input, writing output).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error (target not found)
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 1,
            Self::Arguments(_) => 2,     // EX_USAGE
            Self::Process(_) => 71,      // EX_OSERR
            Self::Io(_) => 74,           // EX_IOERR
            Self::AccessDenied(_) => 77, // EX_NOPERM
            Self::Config(_) => 78,       // EX_CONFIG
        }
    }
}

impl From<ProcessError> for CliError {
    fn from(err: ProcessError) -> Self {
        let message = err.to_string();
        match err {
            ProcessError::NotFound { .. } => Self::NotFound(message),
            ProcessError::AccessDenied { .. } => Self::AccessDenied(message),
            ProcessError::InvalidInput(msg) => Self::Arguments(msg),
            ProcessError::OtherFailure { .. } => Self::Process(message),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Process(proc_err) => proc_err.into(),
            CoreError::Settings(settings_err) => settings_err.into(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error that reached `main`.
///
/// Recognizes `CliError`, `ProcessError` and `std::io::Error` anywhere in
/// the chain; anything else is a general failure.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return cli_err.exit_code();
        }
        if let Some(proc_err) = cause.downcast_ref::<ProcessError>() {
            return CliError::from(proc_err.clone()).exit_code();
        }
        if cause.is::<std::io::Error>() {
            return 74;
        }
    }
    1
}

/// Whether the error is stdout being closed by the reader (`procmgr list | head`).
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::BrokenPipe)
    })
}
