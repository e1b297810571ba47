//! Process inventory port.
//!
//! This port abstracts the OS process table from the core domain.
//! Implementations live in adapters (e.g., procmgr-runtime).
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - Runtime owns the implementation (sysinfo enumeration, signals, spawn)
//! - Every operation is a blocking request/response; nothing is cached
//!   between calls

use super::{ActionResult, ProcessError};
use crate::domain::{ProcessDetail, ProcessSummary};

/// Port over the live OS process table.
///
/// All OS faults are converted to [`ProcessError`] at the boundary of each
/// method. Implementations must not panic and must not log.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessInventoryPort: Send + Sync {
    /// Enumerate every process visible at the caller's privilege level.
    ///
    /// Ordered by ascending pid. A process that exits while the table is
    /// being read is omitted rather than reported.
    fn list(&self) -> Result<Vec<ProcessSummary>, ProcessError>;

    /// Sample memory and CPU usage of one process.
    ///
    /// Blocks for the configured sampling interval.
    fn detail(&self, pid: u32) -> ActionResult<ProcessDetail>;

    /// Forcefully terminate a process.
    ///
    /// Returns once the OS has accepted the kill request; the process may
    /// not have fully exited yet.
    fn terminate(&self, pid: u32) -> ActionResult;

    /// Launch an executable and return the new process id.
    fn spawn(&self, path: &str, args: &[String]) -> ActionResult<u32>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory process table for testing.
    struct FakeInventory {
        table: Mutex<Vec<ProcessSummary>>,
    }

    impl ProcessInventoryPort for FakeInventory {
        fn list(&self) -> Result<Vec<ProcessSummary>, ProcessError> {
            Ok(self.table.lock().unwrap().clone())
        }

        fn detail(&self, pid: u32) -> ActionResult<ProcessDetail> {
            let table = self.table.lock().unwrap();
            let entry = table
                .iter()
                .find(|p| p.pid == pid)
                .ok_or(ProcessError::NotFound { pid })?;
            Ok(ProcessDetail {
                pid,
                name: entry.name.clone(),
                resident_memory_bytes: 1024,
                cpu_percent: 0.0,
                sample_interval: Duration::from_millis(100),
            })
        }

        fn terminate(&self, pid: u32) -> ActionResult {
            let mut table = self.table.lock().unwrap();
            let before = table.len();
            table.retain(|p| p.pid != pid);
            if table.len() == before {
                return Err(ProcessError::NotFound { pid });
            }
            Ok(())
        }

        fn spawn(&self, path: &str, _args: &[String]) -> ActionResult<u32> {
            let mut table = self.table.lock().unwrap();
            let pid = table.iter().map(|p| p.pid).max().unwrap_or(0) + 1;
            table.push(ProcessSummary::new(pid, path));
            Ok(pid)
        }
    }

    #[test]
    fn test_fake_inventory_round_trip() {
        let inventory = FakeInventory {
            table: Mutex::new(vec![ProcessSummary::new(1, "init")]),
        };

        let pid = inventory.spawn("worker", &[]).unwrap();
        assert_eq!(pid, 2);
        assert_eq!(inventory.detail(pid).unwrap().name, "worker");

        inventory.terminate(pid).unwrap();
        assert!(matches!(
            inventory.detail(pid),
            Err(ProcessError::NotFound { pid: 2 })
        ));
        assert_eq!(inventory.list().unwrap().len(), 1);
    }

    #[test]
    fn test_port_is_object_safe() {
        let inventory: Box<dyn ProcessInventoryPort> = Box::new(FakeInventory {
            table: Mutex::new(vec![]),
        });
        assert!(inventory.list().unwrap().is_empty());
    }
}
