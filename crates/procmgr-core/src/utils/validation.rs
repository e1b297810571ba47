//! Input validation for inventory requests.
//!
//! Requests that can be rejected without asking the OS are rejected here,
//! so adapters and services share one definition of "invalid input".

use crate::ports::ProcessError;

/// Validates an executable path before a spawn attempt.
///
/// # Returns
/// * `Ok(&str)` with the path as given if it is usable
/// * `Err(ProcessError::InvalidInput)` if it is empty or whitespace-only
///
/// # Examples
///
/// ```rust
/// use procmgr_core::utils::validation::validate_spawn_path;
///
/// assert!(validate_spawn_path("/bin/sleep").is_ok());
/// assert!(validate_spawn_path("   ").is_err());
/// ```
pub fn validate_spawn_path(path: &str) -> Result<&str, ProcessError> {
    if path.trim().is_empty() {
        return Err(ProcessError::InvalidInput(
            "executable path cannot be empty".to_string(),
        ));
    }
    Ok(path)
}

/// Parses a user-supplied pid.
///
/// Accepts surrounding whitespace; rejects anything that is not a
/// non-negative integer in `u32` range.
pub fn parse_pid(input: &str) -> Result<u32, ProcessError> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| ProcessError::InvalidInput(format!("not a process id: '{trimmed}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_paths_rejected() {
        for path in ["", " ", "\t\n", "   "] {
            assert!(matches!(
                validate_spawn_path(path),
                Err(ProcessError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_path_returned_unchanged() {
        assert_eq!(validate_spawn_path(" /bin/true").unwrap(), " /bin/true");
    }

    #[test]
    fn test_parse_pid() {
        assert_eq!(parse_pid("123").unwrap(), 123);
        assert_eq!(parse_pid(" 42 \n").unwrap(), 42);
        assert!(parse_pid("-1").is_err());
        assert!(parse_pid("abc").is_err());
        assert!(parse_pid("").is_err());
        assert!(parse_pid("99999999999").is_err());
    }
}
