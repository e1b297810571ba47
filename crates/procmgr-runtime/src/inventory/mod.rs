//! Process inventory backed by `sysinfo`.
//!
//! Implements `ProcessInventoryPort` from procmgr-core. Every call builds a
//! fresh `System` and reads only what it needs; nothing survives between
//! calls.

mod spawn;

use std::thread;
use std::time::Duration;

use procmgr_core::{
    ActionResult, ProcessDetail, ProcessError, ProcessInventoryPort, ProcessSummary, Settings,
};
use sysinfo::{
    MINIMUM_CPU_UPDATE_INTERVAL, Pid, Process, ProcessRefreshKind, ProcessStatus,
    ProcessesToUpdate, System, ThreadKind,
};

use crate::pid::{PidState, kill_pid, probe_pid};
pub use spawn::spawn_detached;

/// Default implementation of `ProcessInventoryPort`.
///
/// # Example
///
/// ```no_run
/// use procmgr_core::ProcessInventoryPort;
/// use procmgr_runtime::SysinfoInventory;
/// use std::time::Duration;
///
/// let inventory = SysinfoInventory::new(Duration::from_millis(100));
/// let processes = inventory.list().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SysinfoInventory {
    sample_interval: Duration,
}

impl SysinfoInventory {
    /// Create an inventory sampling CPU usage over `sample_interval`.
    ///
    /// Intervals shorter than the platform minimum are raised to it; a
    /// shorter window yields a meaningless CPU figure.
    pub fn new(sample_interval: Duration) -> Self {
        Self {
            sample_interval: sample_interval.max(MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }

    /// Create an inventory from validated settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.sample_interval())
    }

    /// Effective sampling window used by `detail`.
    pub const fn sample_interval(&self) -> Duration {
        self.sample_interval
    }

}

/// Failure for a pid the table does not show, given what the null signal says.
///
/// The table can hide processes the caller may not inspect (e.g. `hidepid`
/// on Linux) while the kernel still reports them as existing.
fn missing(pid: u32, state: PidState) -> ProcessError {
    match state {
        PidState::Forbidden => ProcessError::AccessDenied { pid },
        PidState::Alive | PidState::Gone => ProcessError::NotFound { pid },
    }
}

impl Default for SysinfoInventory {
    fn default() -> Self {
        Self::from_settings(&Settings::with_defaults())
    }
}

/// Whether a table entry is a live process rather than a thread or zombie.
fn is_live_process(process: &Process) -> bool {
    !matches!(process.thread_kind(), Some(ThreadKind::Userland))
        && !matches!(process.status(), ProcessStatus::Zombie | ProcessStatus::Dead)
}

fn process_name(process: &Process) -> String {
    process.name().to_string_lossy().into_owned()
}

fn refresh_one(system: &mut System, pid: Pid, kind: ProcessRefreshKind) {
    system.refresh_processes_specifics(ProcessesToUpdate::Some(&[pid]), true, kind);
}

impl ProcessInventoryPort for SysinfoInventory {
    fn list(&self) -> Result<Vec<ProcessSummary>, ProcessError> {
        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );

        let mut processes: Vec<ProcessSummary> = system
            .processes()
            .iter()
            .filter(|(_, process)| is_live_process(process))
            .map(|(pid, process)| ProcessSummary::new(pid.as_u32(), process_name(process)))
            .collect();

        processes.sort_unstable_by_key(|p| p.pid);
        processes.dedup_by_key(|p| p.pid);
        Ok(processes)
    }

    fn detail(&self, pid: u32) -> ActionResult<ProcessDetail> {
        let target = Pid::from_u32(pid);
        let kind = ProcessRefreshKind::nothing().with_cpu().with_memory();
        let mut system = System::new();

        // First sample establishes the CPU baseline
        refresh_one(&mut system, target, kind);
        match system.process(target) {
            Some(process) if is_live_process(process) => {}
            Some(_) => return Err(ProcessError::NotFound { pid }),
            None => return Err(missing(pid, probe_pid(pid))),
        }

        thread::sleep(self.sample_interval);
        refresh_one(&mut system, target, kind);

        // Exited during the sampling window
        let Some(process) = system.process(target).filter(|p| is_live_process(p)) else {
            return Err(ProcessError::NotFound { pid });
        };

        Ok(ProcessDetail {
            pid,
            name: process_name(process),
            resident_memory_bytes: process.memory(),
            cpu_percent: process.cpu_usage().max(0.0),
            sample_interval: self.sample_interval,
        })
    }

    fn terminate(&self, pid: u32) -> ActionResult {
        let target = Pid::from_u32(pid);
        let mut system = System::new();
        refresh_one(&mut system, target, ProcessRefreshKind::nothing());

        // An exited, unreaped entry is already gone from the caller's view
        if system.process(target).is_some_and(|p| !is_live_process(p)) {
            return Err(ProcessError::NotFound { pid });
        }

        kill_pid(pid)
    }

    fn spawn(&self, path: &str, args: &[String]) -> ActionResult<u32> {
        spawn_detached(path, args)
    }
}
