//! Process display utilities for CLI output.

use std::io::{self, Write};

use procmgr_core::{ProcessDetail, ProcessSummary};

use super::tables::truncate_string;

/// Width of the name column in `list` output.
pub const NAME_WIDTH: usize = 40;

/// Width of the full `list` table.
pub const TABLE_WIDTH: usize = 52;

/// Header row for the `list` table.
pub fn format_header() -> String {
    format!("{:>8}  {:<NAME_WIDTH$} {}", "PID", "NAME", "")
        .trim_end()
        .to_string()
}

/// Format one row of the `list` table. Protected processes are marked `!`.
pub fn format_process_row(process: &ProcessSummary, protected: bool) -> String {
    let marker = if protected { "!" } else { "" };
    format!(
        "{:>8}  {:<NAME_WIDTH$} {marker}",
        process.pid,
        truncate_string(&process.name, NAME_WIDTH)
    )
    .trim_end()
    .to_string()
}

/// Render a process detail as labelled lines.
pub fn format_detail(detail: &ProcessDetail) -> Vec<String> {
    vec![
        format!("PID: {}", detail.pid),
        format!("Name: {}", detail.name),
        format!("Memory Usage: {:.2} MB", detail.resident_memory_mb()),
        format!(
            "CPU Usage: {:.1}% (sampled over {} ms)",
            detail.cpu_percent,
            detail.sample_interval.as_millis()
        ),
    ]
}

/// Write a process detail as labelled lines.
pub fn display_process_detail<W: Write>(
    out: &mut W,
    detail: &ProcessDetail,
    protected: bool,
) -> io::Result<()> {
    for line in format_detail(detail) {
        writeln!(out, "{line}")?;
    }
    if protected {
        writeln!(out, "Note: this is a protected system process.")?;
    }
    Ok(())
}
