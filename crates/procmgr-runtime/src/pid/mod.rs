//! Signal-level helpers keyed by raw pid.
//!
//! # Safety guarantees
//! - pid 0 and out-of-range pids are rejected before any signal call, so a
//!   request can never fan out to a process group
//! - ESRCH / EPERM map to `NotFound` / `AccessDenied`

mod kill;
mod probe;

pub use kill::kill_pid;
pub use probe::{PidState, probe_pid};
