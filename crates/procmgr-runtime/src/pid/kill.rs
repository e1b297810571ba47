//! Forceful termination by pid.

use procmgr_core::{ActionResult, ProcessError};

/// Send SIGKILL to a pid.
///
/// # Strategy
/// - No SIGTERM phase: termination is immediate, not a shutdown request
/// - Returns as soon as the kernel accepts the signal; the process may
///   still be exiting
/// - No retries
///
/// # Returns
/// - `Ok(())` if the signal was delivered
/// - `NotFound` for ESRCH, pid 0, or pids outside the platform range
/// - `AccessDenied` for EPERM
/// - `OtherFailure` for anything else the kernel reports
#[cfg(unix)]
pub fn kill_pid(pid: u32) -> ActionResult {
    use nix::errno::Errno;
    use nix::sys::signal::{self, Signal};

    use super::probe::to_platform_pid;

    let nix_pid = to_platform_pid(pid).ok_or(ProcessError::NotFound { pid })?;

    match signal::kill(nix_pid, Signal::SIGKILL) {
        Ok(()) => Ok(()),
        Err(Errno::ESRCH) => Err(ProcessError::NotFound { pid }),
        Err(Errno::EPERM) => Err(ProcessError::AccessDenied { pid }),
        Err(e) => Err(ProcessError::other(pid, e.desc())),
    }
}

/// Terminate a pid through the process table.
///
/// The platform call only reports success or failure, so a refused request
/// surfaces as `OtherFailure`.
#[cfg(not(unix))]
pub fn kill_pid(pid: u32) -> ActionResult {
    use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

    let target = Pid::from_u32(pid);
    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[target]),
        true,
        ProcessRefreshKind::nothing(),
    );

    let Some(process) = system.process(target) else {
        return Err(ProcessError::NotFound { pid });
    };

    if process.kill() {
        Ok(())
    } else {
        Err(ProcessError::other(pid, "the OS refused the termination request"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kill_pid_reports_missing_process() {
        assert_eq!(
            kill_pid(4_194_305),
            Err(ProcessError::NotFound { pid: 4_194_305 })
        );
    }

    #[test]
    fn kill_pid_never_signals_process_group() {
        // pid 0 would mean "every process in my group" to kill(2)
        assert_eq!(kill_pid(0), Err(ProcessError::NotFound { pid: 0 }));
    }

    #[test]
    #[cfg(unix)]
    fn kill_pid_terminates_child() {
        use std::process::Command;

        let mut child = Command::new("sleep")
            .arg("60")
            .spawn()
            .expect("failed to spawn sleep");

        assert_eq!(kill_pid(child.id()), Ok(()));

        // Reap the child; SIGKILL shows up as a signal exit
        let status = child.wait().expect("wait failed");
        assert!(!status.success());
    }
}
