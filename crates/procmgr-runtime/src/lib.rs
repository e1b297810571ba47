//! OS-level process table access for procmgr.
//!
//! Provides [`SysinfoInventory`], the `ProcessInventoryPort` implementation
//! used by every adapter, plus the raw pid helpers it is built on.
#![deny(unsafe_code)]

pub mod inventory;
pub mod pid;

// Re-export the main ProcessInventoryPort implementation
pub use inventory::{SysinfoInventory, spawn_detached};

// Re-export pid helpers for direct use if needed
pub use pid::{PidState, kill_pid, probe_pid};
