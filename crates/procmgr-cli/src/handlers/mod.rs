//! Command handlers that delegate to the core [`InventoryService`].
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ..., out: &mut W) -> Result<()>`
//! - Thin wrappers that call the service and write formatted output to `out`;
//!   write failures (including a closed pipe) come back as errors
//! - Blocking service calls that sleep (`detail`, `wait_until_gone`) run on
//!   `tokio::task::spawn_blocking`
//!
//! [`InventoryService`]: procmgr_core::InventoryService

pub mod kill;
pub mod list;
pub mod show;
pub mod start;
