//! User input utilities for interactive command-line prompts.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::error::CliError;

/// Prompts the user for a yes/no confirmation.
///
/// The prompt goes to `out` and the answer is read from `reader`.
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input and end of input are treated as 'no'.
///
/// # Errors
///
/// Returns `CliError::Io` if writing the prompt or reading the answer fails.
pub fn prompt_confirmation<R, W>(prompt: &str, reader: &mut R, out: &mut W) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{prompt} (y/N): ").map_err(CliError::from)?;
        out.flush().map_err(CliError::from)?;

        let mut input = String::new();
        let read = reader
            .read_line(&mut input)
            .map_err(|e| CliError::Io(format!("Failed to read user input: {e}")))?;
        if read == 0 {
            writeln!(out).map_err(CliError::from)?;
            return Ok(false);
        }

        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}
