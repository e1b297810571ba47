//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sysinfo` or `nix` types in any signature
//! - Every OS fault surfaces as a [`ProcessError`] value, never a panic

pub mod process_inventory;

use thiserror::Error;

pub use process_inventory::ProcessInventoryPort;

#[cfg(test)]
pub use process_inventory::MockProcessInventoryPort;

/// Outcome of a single inventory operation.
///
/// `Ok` is the success case; each `Err` variant is one of the failure kinds
/// a caller is expected to inspect and present.
pub type ActionResult<T = ()> = Result<T, ProcessError>;

/// Domain-specific errors for process inventory operations.
///
/// This error type abstracts away the platform facility and provides a
/// small, closed taxonomy for callers to match on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// No process with this pid exists (or it exited mid-operation).
    #[error("No such process: {pid}")]
    NotFound { pid: u32 },

    /// The process exists but the caller lacks the privilege to act on it.
    #[error("Access denied to process {pid}")]
    AccessDenied { pid: u32 },

    /// The request was rejected before touching the OS.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Any other OS-reported failure, with the OS error text.
    #[error("{}", format_other(*pid, message))]
    OtherFailure { pid: Option<u32>, message: String },
}

fn format_other(pid: Option<u32>, message: &str) -> String {
    match pid {
        Some(pid) => format!("Process {pid}: {message}"),
        None => message.to_string(),
    }
}

impl ProcessError {
    /// Create an `OtherFailure` tied to a pid.
    pub fn other(pid: u32, err: impl std::fmt::Display) -> Self {
        Self::OtherFailure {
            pid: Some(pid),
            message: err.to_string(),
        }
    }

    /// Create an `OtherFailure` for an operation that has no pid yet (spawn).
    pub fn launch_failed(err: impl std::fmt::Display) -> Self {
        Self::OtherFailure {
            pid: None,
            message: err.to_string(),
        }
    }

    /// The pid this failure refers to, if any.
    pub const fn pid(&self) -> Option<u32> {
        match self {
            Self::NotFound { pid } | Self::AccessDenied { pid } => Some(*pid),
            Self::OtherFailure { pid, .. } => *pid,
            Self::InvalidInput(_) => None,
        }
    }
}

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Process operation failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProcessError::NotFound { pid: 7 }.to_string(),
            "No such process: 7"
        );
        assert_eq!(
            ProcessError::AccessDenied { pid: 1 }.to_string(),
            "Access denied to process 1"
        );
        assert_eq!(
            ProcessError::other(9, "EIO").to_string(),
            "Process 9: EIO"
        );
        assert_eq!(
            ProcessError::launch_failed("No such file or directory").to_string(),
            "No such file or directory"
        );
    }

    #[test]
    fn test_pid_accessor() {
        assert_eq!(ProcessError::NotFound { pid: 3 }.pid(), Some(3));
        assert_eq!(ProcessError::launch_failed("x").pid(), None);
        assert_eq!(ProcessError::InvalidInput("blank".into()).pid(), None);
    }

    #[test]
    fn test_core_error_from_process_error() {
        let err: CoreError = ProcessError::NotFound { pid: 5 }.into();
        assert!(matches!(
            err,
            CoreError::Process(ProcessError::NotFound { pid: 5 })
        ));
        assert_eq!(err.to_string(), "No such process: 5");
    }
}
