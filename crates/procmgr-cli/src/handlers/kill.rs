//! Kill command handler.
//!
//! Forcefully terminates a process. There is no graceful shutdown, so the
//! user is asked to confirm unless `--force` is given.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::bootstrap::CliContext;
use crate::utils::input;

/// Command-line flags for `kill`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KillOptions {
    /// Skip the confirmation prompt.
    pub force: bool,
    /// Poll until the pid has left the process table.
    pub wait: bool,
}

/// Execute the kill command.
///
/// # Arguments
///
/// * `ctx` - The CLI context providing the inventory service
/// * `pid` - Target process ID
/// * `options` - `--force` / `--wait` flags
/// * `answers` - Where the confirmation answer is read from
/// * `out` - Where messages and the prompt are written
///
/// # Errors
///
/// Returns the wrapped `ProcessError` when the OS refuses or the process
/// is already gone, or an IO error if the prompt cannot be answered.
pub async fn execute<R, W>(
    ctx: &CliContext,
    pid: u32,
    options: KillOptions,
    answers: &mut R,
    out: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let service = ctx.inventory();

    // The name is only used for messages; a failed lookup is not fatal.
    let name = service
        .list()
        .ok()
        .and_then(|processes| processes.into_iter().find(|p| p.pid == pid))
        .map(|p| p.name);
    let label = name
        .as_deref()
        .map_or_else(|| format!("process {pid}"), |name| format!("'{name}' (PID {pid})"));

    if let Some(name) = name.as_deref().filter(|name| service.is_protected(name)) {
        warn!(pid, name, "Terminating a protected system process");
        writeln!(out, "Warning: {label} is a critical system process.")?;
        writeln!(out, "Killing it may crash or destabilize the system.")?;
    }

    if !options.force {
        let confirm = input::prompt_confirmation(
            &format!("Kill {label}? This action is irreversible, are you sure you want to do this?"),
            answers,
            out,
        )?;
        if !confirm {
            writeln!(out, "Kill cancelled.")?;
            return Ok(());
        }
    }

    service.terminate(pid)?;
    info!(pid, "Process killed");
    writeln!(out, "Process {pid} has been killed.")?;

    if options.wait {
        let waiter = service.clone();
        let window = ctx.settings().wait_timeout();
        let poll = ctx.settings().poll_interval();
        let gone = tokio::task::spawn_blocking(move || waiter.wait_until_gone(pid, window, poll))
            .await
            .context("Wait task failed")??;
        if gone {
            writeln!(out, "Process {pid} has exited.")?;
        } else {
            warn!(pid, timeout_ms = ctx.settings().wait_timeout_ms, "Process still listed");
            writeln!(
                out,
                "Process {pid} is still listed after {} ms.",
                ctx.settings().wait_timeout_ms
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::exit_code_for;
    use crate::handlers::test_support::{FakeInventory, context};
    use procmgr_core::ProcessError;
    use std::io::Cursor;

    const FORCE: KillOptions = KillOptions {
        force: true,
        wait: false,
    };

    fn run(ctx: &CliContext, pid: u32, options: KillOptions, answer: &str) -> Result<String> {
        let mut out = Vec::new();
        tokio_test::block_on(execute(ctx, pid, options, &mut Cursor::new(answer), &mut out))?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_declined_or_empty_answer_keeps_process() {
        let inventory = FakeInventory::with_rows(&[(10, "sleep")]);
        let ctx = context(inventory.clone());

        for answer in ["n\n", "\n", ""] {
            let text = run(&ctx, 10, KillOptions::default(), answer).unwrap();
            assert!(text.contains("Kill 'sleep' (PID 10)? This action is irreversible"));
            assert!(text.ends_with("Kill cancelled.\n"));
            assert_eq!(inventory.pids(), vec![10]);
        }
    }

    #[test]
    fn test_confirmed_kill_removes_process() {
        let inventory = FakeInventory::with_rows(&[(10, "sleep"), (11, "bash")]);
        let ctx = context(inventory.clone());

        let text = run(&ctx, 10, KillOptions::default(), "yes\n").unwrap();
        assert!(text.ends_with("Process 10 has been killed.\n"));
        assert_eq!(inventory.pids(), vec![11]);
    }

    #[test]
    fn test_forced_kill_with_wait() {
        let inventory = FakeInventory::with_rows(&[(10, "sleep"), (11, "bash")]);
        let ctx = context(inventory.clone());
        let options = KillOptions {
            force: true,
            wait: true,
        };

        // No prompt is shown, so the empty input is never read
        let text = run(&ctx, 10, options, "").unwrap();
        assert!(!text.contains("(y/N)"));
        assert!(text.ends_with("Process 10 has exited.\n"));
        assert_eq!(inventory.pids(), vec![11]);
    }

    #[test]
    fn test_protected_process_is_warned_about() {
        let inventory = FakeInventory::with_rows(&[(1, "systemd")]);
        let ctx = context(inventory.clone());

        let text = run(&ctx, 1, KillOptions::default(), "n\n").unwrap();
        assert!(text.starts_with("Warning: 'systemd' (PID 1) is a critical system process."));
        assert_eq!(inventory.pids(), vec![1]);

        run(&ctx, 1, FORCE, "").unwrap();
        assert!(inventory.pids().is_empty());
    }

    #[test]
    fn test_kill_missing_process_is_not_found() {
        let ctx = context(FakeInventory::with_rows(&[(10, "sleep")]));
        let err = run(&ctx, 99, FORCE, "").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ProcessError>(),
            Some(&ProcessError::NotFound { pid: 99 })
        );
        assert_eq!(exit_code_for(&err), 1);
    }
}
