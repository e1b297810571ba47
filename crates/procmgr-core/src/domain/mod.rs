//! Core domain types.
//!
//! These types represent the pure domain model, independent of the
//! platform facility used to read the process table.

mod process;

pub use process::{ProcessDetail, ProcessSummary};
