//! Existence probe for a pid without reading the process table.

/// What the OS says about a pid when asked whether it can be signalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PidState {
    /// The process exists and the caller may signal it.
    Alive,
    /// The process exists but belongs to another user or a more privileged context.
    Forbidden,
    /// No such process.
    Gone,
}

/// Convert a pid to the platform type.
///
/// pid 0 and values beyond `i32::MAX` never name a single process; passing
/// them to `kill(2)` would address a process group instead.
#[cfg(unix)]
pub(crate) fn to_platform_pid(pid: u32) -> Option<nix::unistd::Pid> {
    if pid == 0 {
        return None;
    }
    i32::try_from(pid).ok().map(nix::unistd::Pid::from_raw)
}

/// Probe a pid with the null signal.
///
/// Uses `kill` with no signal, which performs the existence and permission
/// checks without delivering anything.
#[cfg(unix)]
pub fn probe_pid(pid: u32) -> PidState {
    use nix::errno::Errno;
    use nix::sys::signal;

    let Some(nix_pid) = to_platform_pid(pid) else {
        return PidState::Gone;
    };

    match signal::kill(nix_pid, None) {
        Ok(()) => PidState::Alive,
        Err(Errno::ESRCH) => PidState::Gone,
        Err(Errno::EPERM) => PidState::Forbidden,
        // Anything else: the pid resolved to something we cannot touch
        Err(_) => PidState::Forbidden,
    }
}

/// Probe a pid through the process table (no null signal available).
#[cfg(not(unix))]
pub fn probe_pid(pid: u32) -> PidState {
    use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

    let target = Pid::from_u32(pid);
    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[target]),
        true,
        ProcessRefreshKind::nothing(),
    );
    if system.process(target).is_some() {
        PidState::Alive
    } else {
        PidState::Gone
    }
}
