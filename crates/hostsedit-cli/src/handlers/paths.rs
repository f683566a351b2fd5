//! Paths command handler.
//!
//! Displays every resolved location for diagnostics and debugging. This
//! is the "golden truth" tool for staging-path issues.

use hostsedit_core::ResolvedPaths;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the paths command.
///
/// Resolves and displays the staging locations and the artifact URL in
/// `key = value` format.
pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let paths = ResolvedPaths::resolve(ctx.settings())?;
    println!("{paths}");
    Ok(())
}
