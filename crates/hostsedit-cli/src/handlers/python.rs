//! Python runtime command handlers.

use hostsedit_core::system::types::RuntimeStatus;
use hostsedit_runtime::python::{ensure_runtime, verify_runtime};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute `python install`: force-install the pinned runtime, then
/// verify it.
pub async fn install(ctx: &CliContext) -> Result<(), CliError> {
    let status = ensure_runtime(ctx.settings())
        .await
        .map_err(|e| CliError::Runtime(format!("{e:#}")))?;

    match status {
        RuntimeStatus::Ready { version, command } => {
            println!("✓ {version} ready via '{command}'");
            Ok(())
        }
        RuntimeStatus::NotReady { reason } => {
            println!("⚠ Install finished, but verification failed: {reason}");
            println!("Open a fresh terminal and run 'hostsedit python status' to re-check.");
            Err(CliError::Runtime(reason))
        }
    }
}

/// Execute `python status`: verify without installing.
pub fn status(ctx: &CliContext) -> Result<(), CliError> {
    match verify_runtime(ctx.settings()) {
        RuntimeStatus::Ready { version, command } => {
            println!("Status: Ready");
            println!("Interpreter: {command} ({version})");
        }
        RuntimeStatus::NotReady { reason } => {
            println!("Status: Not ready");
            println!("  {reason}");
            println!();
            println!("Run 'hostsedit python install' to install the pinned runtime.");
        }
    }
    Ok(())
}
