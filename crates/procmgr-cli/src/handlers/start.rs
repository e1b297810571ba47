//! Start command handler.

use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::bootstrap::CliContext;

/// Execute the start command and print the new process ID.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank path, or `OtherFailure` carrying the
/// OS message when the launch fails.
pub async fn execute<W: Write>(
    ctx: &CliContext,
    path: &str,
    args: &[String],
    out: &mut W,
) -> Result<()> {
    let pid = ctx.inventory().spawn(path, args)?;
    info!(pid, path, "Process started");
    writeln!(out, "Started '{path}' with PID {pid}.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{FakeInventory, context};
    use procmgr_core::ProcessError;

    #[test]
    fn test_start_appends_process() {
        let inventory = FakeInventory::with_rows(&[(5, "init")]);
        let ctx = context(inventory.clone());
        let mut out = Vec::new();

        tokio_test::block_on(execute(&ctx, "/bin/true", &[], &mut out)).unwrap();
        assert_eq!(inventory.pids(), vec![5, 6]);
        assert_eq!(out, b"Started '/bin/true' with PID 6.\n");
    }

    #[test]
    fn test_blank_path_never_reaches_inventory() {
        let inventory = FakeInventory::with_rows(&[]);
        let ctx = context(inventory.clone());

        let err = tokio_test::block_on(execute(&ctx, "  ", &[], &mut Vec::new())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProcessError>(),
            Some(ProcessError::InvalidInput(_))
        ));
        assert!(inventory.pids().is_empty());
    }
}
