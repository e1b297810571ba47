//! Inventory service - caller-facing policy over the process inventory port.

use crate::domain::{ProcessDetail, ProcessSummary};
use crate::ports::{ActionResult, ProcessError, ProcessInventoryPort};
use crate::utils::validation::validate_spawn_path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Service for inspecting and controlling OS processes.
///
/// Adds input validation, name filtering, protected-process classification
/// and exit polling on top of a [`ProcessInventoryPort`].
#[derive(Clone)]
pub struct InventoryService {
    inventory: Arc<dyn ProcessInventoryPort>,
    protected_names: Vec<String>,
}

impl InventoryService {
    /// Create a new inventory service.
    pub fn new(inventory: Arc<dyn ProcessInventoryPort>, protected_names: Vec<String>) -> Self {
        Self {
            inventory,
            protected_names,
        }
    }

    /// List every visible process.
    pub fn list(&self) -> Result<Vec<ProcessSummary>, ProcessError> {
        self.inventory.list()
    }

    /// List processes whose name contains `filter` (case-insensitive).
    ///
    /// A blank filter matches everything.
    pub fn list_matching(&self, filter: &str) -> Result<Vec<ProcessSummary>, ProcessError> {
        let needle = filter.trim().to_lowercase();
        let processes = self.inventory.list()?;
        if needle.is_empty() {
            return Ok(processes);
        }
        Ok(processes
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Sample one process. Blocks for the adapter's sampling interval.
    pub fn detail(&self, pid: u32) -> ActionResult<ProcessDetail> {
        self.inventory.detail(pid)
    }

    /// Forcefully terminate a process.
    ///
    /// Irreversible. Callers are expected to obtain confirmation first.
    pub fn terminate(&self, pid: u32) -> ActionResult {
        self.inventory.terminate(pid)
    }

    /// Launch an executable. Blank paths never reach the OS.
    pub fn spawn(&self, path: &str, args: &[String]) -> ActionResult<u32> {
        let path = validate_spawn_path(path)?;
        self.inventory.spawn(path, args)
    }

    /// Whether `name` is a critical system process.
    pub fn is_protected(&self, name: &str) -> bool {
        self.protected_names
            .iter()
            .any(|protected| protected.eq_ignore_ascii_case(name))
    }

    /// Poll the process table until `pid` is absent or `window` elapses.
    ///
    /// Returns `Ok(true)` once the pid is gone, `Ok(false)` on timeout.
    /// The table is always read at least once.
    pub fn wait_until_gone(&self, pid: u32, window: Duration, poll: Duration) -> ActionResult<bool> {
        let deadline = Instant::now() + window;
        loop {
            if !self.inventory.list()?.iter().any(|p| p.pid == pid) {
                return Ok(true);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(false);
            }
            thread::sleep(poll.min(deadline - now));
        }
    }
}
