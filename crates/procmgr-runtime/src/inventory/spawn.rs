//! Launching detached processes.

use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;

use procmgr_core::utils::validation::validate_spawn_path;
use procmgr_core::{ActionResult, ProcessError};

/// Launch `path` with `args` and return the new pid.
///
/// The child gets null stdio so it never writes into the caller's terminal.
/// A waiter thread owns the `Child` handle and reaps it on exit, so a
/// terminated child does not linger in the table as a zombie. The waiter is
/// started before the launch: if no thread can be created, nothing is
/// launched.
pub fn spawn_detached(path: &str, args: &[String]) -> ActionResult<u32> {
    let path = validate_spawn_path(path)?;

    let (handoff, pending) = mpsc::channel::<Child>();
    thread::Builder::new()
        .name("procmgr-reaper".to_string())
        .spawn(move || {
            // A failed launch drops the sender and ends this thread
            if let Ok(mut child) = pending.recv() {
                let _ = child.wait();
            }
        })
        .map_err(|e| ProcessError::launch_failed(format!("{path}: cannot start reaper: {e}")))?;

    let child = Command::new(path)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ProcessError::launch_failed(format!("{path}: {e}")))?;

    let pid = child.id();

    // The receiver lives until it gets the child; a send can only fail if
    // the reaper thread is gone, and then the child is reaped with us.
    let _ = handoff.send(child);

    Ok(pid)
}
