//! Launch command handler: the full pipeline.

use hostsedit_core::system::types::PipelineOutcome;
use hostsedit_runtime::run_launch;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::wait_for_ack;

/// Execute the launch pipeline and report where it ended.
///
/// The acknowledgment prompt keeps failure guidance visible when the
/// launcher runs in a console window that closes on exit.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    match run_launch(&ctx.stages).await {
        Ok(PipelineOutcome::Launched) => {
            println!("✓ Editor launched");
            Ok(())
        }
        Ok(PipelineOutcome::ElevationHandoff) => {
            // The elevated copy owns the session from here on.
            println!("Continuing in the elevated window...");
            Ok(())
        }
        Ok(PipelineOutcome::RuntimeNotReady { reason }) => {
            println!();
            println!("⚠ The Python runtime is not ready: {reason}");
            println!("The editor was not fetched or started.");
            wait_for_ack(ctx.assume_yes())?;
            Err(CliError::Runtime(reason))
        }
        Err(err) => {
            println!();
            println!("✗ {err}");
            println!("Re-run 'hostsedit' once the cause is fixed.");
            wait_for_ack(ctx.assume_yes())?;
            Err(err.into())
        }
    }
}
