//! Settings domain types and validation.
//!
//! This module contains the tunables shared by the inventory adapter and
//! its callers. These are pure domain types with no infrastructure
//! dependencies; adapters decide where the values come from.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default CPU sampling window for `detail`.
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 100;

/// Default upper bound for waiting on a terminated process to disappear.
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 2000;

/// Default delay between two polls of the process table while waiting.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Process names flagged as critical system processes.
pub const DEFAULT_PROTECTED_NAMES: &[&str] = &[
    "System",
    "svchost.exe",
    "csrss.exe",
    "lsass.exe",
    "init",
    "systemd",
    "launchd",
    "kernel_task",
];

/// Application settings structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// CPU sampling window for `detail` in milliseconds (10-10,000).
    pub sample_interval_ms: u64,

    /// Names that are flagged before termination. Matched case-insensitively.
    pub protected_names: Vec<String>,

    /// How long to wait for a terminated process to leave the table (100-60,000).
    pub wait_timeout_ms: u64,

    /// Delay between two table polls while waiting.
    pub poll_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Settings {
    /// Create settings with sensible defaults.
    pub fn with_defaults() -> Self {
        Self {
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            protected_names: DEFAULT_PROTECTED_NAMES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            wait_timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }

    pub const fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub const fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }

    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Sample interval must be between 10 and 10,000 ms, got {0}")]
    InvalidSampleInterval(u64),

    #[error("Wait timeout must be between 100 and 60,000 ms, got {0}")]
    InvalidWaitTimeout(u64),

    #[error("Poll interval must be non-zero and at most the wait timeout, got {0}")]
    InvalidPollInterval(u64),

    #[error("Protected process names cannot be blank")]
    BlankProtectedName,
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if !(10..=10_000).contains(&settings.sample_interval_ms) {
        return Err(SettingsError::InvalidSampleInterval(
            settings.sample_interval_ms,
        ));
    }

    if !(100..=60_000).contains(&settings.wait_timeout_ms) {
        return Err(SettingsError::InvalidWaitTimeout(settings.wait_timeout_ms));
    }

    if settings.poll_interval_ms == 0 || settings.poll_interval_ms > settings.wait_timeout_ms {
        return Err(SettingsError::InvalidPollInterval(settings.poll_interval_ms));
    }

    if settings
        .protected_names
        .iter()
        .any(|name| name.trim().is_empty())
    {
        return Err(SettingsError::BlankProtectedName);
    }

    Ok(())
}
