//! Show command handler.
//!
//! Samples one process over the configured interval and prints its
//! memory and CPU usage.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::presentation::display_process_detail;

/// Execute the show command.
///
/// The sample blocks for the sampling interval, so it runs on the
/// blocking thread pool.
///
/// # Errors
///
/// Returns `ProcessError::NotFound` or `AccessDenied` (wrapped) when the
/// process cannot be sampled.
pub async fn execute<W: Write>(ctx: &CliContext, pid: u32, json: bool, out: &mut W) -> Result<()> {
    let service = ctx.inventory().clone();
    debug!(pid, interval_ms = ctx.settings().sample_interval_ms, "Sampling process");

    let detail = tokio::task::spawn_blocking(move || service.detail(pid))
        .await
        .context("Sampling task failed")??;

    if json {
        let body =
            serde_json::to_string_pretty(&detail).context("Failed to serialize process detail")?;
        writeln!(out, "{body}")?;
    } else {
        display_process_detail(out, &detail, ctx.inventory().is_protected(&detail.name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{FakeInventory, context};
    use procmgr_core::ProcessError;

    #[test]
    fn test_show_existing_process() {
        let ctx = context(FakeInventory::with_rows(&[(42, "worker")]));
        let mut out = Vec::new();
        tokio_test::block_on(execute(&ctx, 42, false, &mut out)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("PID: 42"));
        assert!(text.contains("Memory Usage: 2.00 MB"));
        assert!(text.contains("CPU Usage: 1.5%"));
    }

    #[test]
    fn test_show_json() {
        let ctx = context(FakeInventory::with_rows(&[(42, "worker")]));
        let mut out = Vec::new();
        tokio_test::block_on(execute(&ctx, 42, true, &mut out)).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["name"], "worker");
        assert_eq!(value["sample_interval"], 100);
    }

    #[test]
    fn test_show_missing_process_keeps_error_kind() {
        let ctx = context(FakeInventory::with_rows(&[]));
        let err = tokio_test::block_on(execute(&ctx, 7, false, &mut Vec::new())).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ProcessError>(),
            Some(&ProcessError::NotFound { pid: 7 })
        );
    }
}
