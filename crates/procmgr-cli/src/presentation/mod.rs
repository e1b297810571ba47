//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no process-table access happens here.

pub mod process_display;
pub mod tables;

pub use process_display::{
    TABLE_WIDTH, display_process_detail, format_detail, format_header, format_process_row,
};
pub use tables::{print_separator, truncate_string};
