//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that validate CLI-specific input, call into
//!   hostsedit-runtime, and format output for the terminal.
//!
//! Handlers should not spawn processes or touch the network themselves.

pub mod check_deps;
pub mod fetch;
pub mod launch;
pub mod paths;
pub mod python;
pub mod status;

use std::io;

use crate::error::CliError;

/// Block until the user acknowledges, unless `--yes` was given.
///
/// The launcher is often started from a console window that closes with
/// the process, so failure guidance must outlive a keypress.
pub(crate) fn wait_for_ack(assume_yes: bool) -> Result<(), CliError> {
    if assume_yes {
        return Ok(());
    }
    println!();
    println!("Press Enter to continue.");
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(())
}
