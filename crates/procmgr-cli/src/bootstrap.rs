//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: settings are resolved from the environment and the
//! `sysinfo`-backed inventory is injected into the core service.

use std::sync::Arc;

use procmgr_core::ports::ProcessInventoryPort;
use procmgr_core::{InventoryService, Settings, validate_settings};
use procmgr_runtime::SysinfoInventory;

use crate::error::CliError;

/// Environment variable overriding the CPU sampling window (ms).
pub const ENV_SAMPLE_INTERVAL_MS: &str = "PROCMGR_SAMPLE_INTERVAL_MS";

/// Environment variable overriding the protected process names (comma-separated).
pub const ENV_PROTECTED: &str = "PROCMGR_PROTECTED";

/// Environment variable overriding how long `kill --wait` waits (ms).
pub const ENV_WAIT_TIMEOUT_MS: &str = "PROCMGR_WAIT_TIMEOUT_MS";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Resolved settings, not yet validated.
    pub settings: Settings,
}

impl CliConfig {
    /// Create config with default settings.
    pub fn with_defaults() -> Self {
        Self {
            settings: Settings::with_defaults(),
        }
    }

    /// Resolve config from the process environment.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve config from an arbitrary key lookup.
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::with_defaults();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = value(ENV_SAMPLE_INTERVAL_MS) {
            config.settings.sample_interval_ms = parse_millis(ENV_SAMPLE_INTERVAL_MS, &raw)?;
        }
        if let Some(raw) = value(ENV_WAIT_TIMEOUT_MS) {
            config.settings.wait_timeout_ms = parse_millis(ENV_WAIT_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = value(ENV_PROTECTED) {
            config.settings.protected_names = raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(config)
    }

    /// Apply a command-line sampling interval override.
    #[must_use]
    pub fn with_sample_interval_ms(mut self, interval_ms: Option<u64>) -> Self {
        if let Some(ms) = interval_ms {
            self.settings.sample_interval_ms = ms;
        }
        self
    }
}

fn parse_millis(key: &str, raw: &str) -> Result<u64, CliError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| CliError::Config(format!("{key} must be a whole number of milliseconds, got '{raw}'")))
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core inventory service.
    pub inventory: InventoryService,
    /// Validated settings the context was built from.
    pub settings: Settings,
}

impl CliContext {
    /// Compose a context around any inventory implementation.
    pub fn new(inventory: Arc<dyn ProcessInventoryPort>, settings: Settings) -> Self {
        let service = InventoryService::new(inventory, settings.protected_names.clone());
        Self {
            inventory: service,
            settings,
        }
    }

    /// Access the inventory service.
    pub const fn inventory(&self) -> &InventoryService {
        &self.inventory
    }

    /// Access the settings.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Bootstrap the CLI application.
///
/// Validates the settings and wires the `sysinfo` inventory into the
/// core service.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    validate_settings(&config.settings)?;

    let inventory: Arc<dyn ProcessInventoryPort> =
        Arc::new(SysinfoInventory::from_settings(&config.settings));

    Ok(CliContext::new(inventory, config.settings))
}
