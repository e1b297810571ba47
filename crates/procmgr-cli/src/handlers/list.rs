//! List command handler.
//!
//! Prints the current process table, optionally filtered by name.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::presentation::{TABLE_WIDTH, format_header, format_process_row, print_separator};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the OS process table cannot be read or `out`
/// cannot be written.
pub async fn execute<W: Write>(
    ctx: &CliContext,
    filter: Option<&str>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let service = ctx.inventory();
    let processes = match filter {
        Some(filter) => service.list_matching(filter)?,
        None => service.list()?,
    };
    debug!(count = processes.len(), ?filter, "Listed processes");

    if json {
        let body =
            serde_json::to_string_pretty(&processes).context("Failed to serialize process list")?;
        writeln!(out, "{body}")?;
        return Ok(());
    }

    if processes.is_empty() {
        match filter {
            Some(filter) => writeln!(out, "No processes match '{filter}'.")?,
            None => writeln!(out, "No processes found.")?,
        }
        return Ok(());
    }

    writeln!(out, "{}", format_header())?;
    print_separator(out, TABLE_WIDTH)?;
    for process in &processes {
        writeln!(
            out,
            "{}",
            format_process_row(process, service.is_protected(&process.name))
        )?;
    }
    print_separator(out, TABLE_WIDTH)?;
    writeln!(out, "{} process(es)", processes.len())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::is_broken_pipe;
    use crate::handlers::test_support::{ClosedPipe, FakeInventory, context};

    fn run(ctx: &CliContext, filter: Option<&str>, json: bool) -> String {
        let mut out = Vec::new();
        tokio_test::block_on(execute(ctx, filter, json, &mut out)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_marks_protected_rows() {
        let ctx = context(FakeInventory::with_rows(&[(1, "systemd"), (42, "firefox")]));
        let text = run(&ctx, None, false);

        assert!(text.starts_with("     PID  NAME\n"));
        assert!(text.lines().any(|l| l.trim_start().starts_with("1 ") && l.ends_with('!')));
        assert!(text.lines().any(|l| l.ends_with("firefox")));
        assert!(text.ends_with("2 process(es)\n"));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let ctx = context(FakeInventory::with_rows(&[(1, "systemd"), (42, "firefox")]));
        let text = run(&ctx, Some("FIRE"), false);
        assert!(text.contains("firefox"));
        assert!(!text.contains("systemd"));

        let text = run(&ctx, Some("nothing-matches"), false);
        assert_eq!(text, "No processes match 'nothing-matches'.\n");
    }

    #[test]
    fn test_json_output() {
        let ctx = context(FakeInventory::with_rows(&[(42, "firefox")]));
        let value: serde_json::Value = serde_json::from_str(&run(&ctx, None, true)).unwrap();
        assert_eq!(value, serde_json::json!([{ "pid": 42, "name": "firefox" }]));
    }

    #[test]
    fn test_closed_stdout_is_an_error_not_a_panic() {
        let ctx = context(FakeInventory::with_rows(&[(42, "firefox")]));
        for json in [false, true] {
            let err = tokio_test::block_on(execute(&ctx, None, json, &mut ClosedPipe)).unwrap_err();
            assert!(is_broken_pipe(&err));
        }
    }
}
