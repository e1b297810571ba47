//! Core domain for procmgr.
//!
//! Holds the process snapshot types, the error taxonomy every inventory
//! operation reports through, the [`ProcessInventoryPort`] trait that OS
//! adapters implement, settings, and the [`InventoryService`] that callers
//! drive.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{ProcessDetail, ProcessSummary};
pub use ports::{ActionResult, CoreError, ProcessError, ProcessInventoryPort};
pub use services::InventoryService;
pub use settings::{
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_PROTECTED_NAMES, DEFAULT_SAMPLE_INTERVAL_MS,
    DEFAULT_WAIT_TIMEOUT_MS, Settings, SettingsError, validate_settings,
};
