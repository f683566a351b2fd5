//! Fetch command handler: stage the artifact without launching.

use hostsedit_core::paths;
use hostsedit_runtime::fetch::download_artifact;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the fetch command.
///
/// An explicit `--url` override is validated with the same rules as the
/// environment override before anything touches the network.
pub async fn execute(ctx: &CliContext, url_override: Option<String>) -> Result<(), CliError> {
    let mut settings = ctx.settings().clone();
    if url_override.is_some() {
        settings.artifact_url = url_override;
        settings.validate()?;
    }

    let staging = paths::staging_dir()?;
    paths::verify_writable(&staging)?;
    let dest = paths::artifact_path_in(&staging);

    let bytes = download_artifact(settings.effective_artifact_url(), &dest)
        .await
        .map_err(|e| CliError::Download(e.to_string()))?;

    println!("✓ Saved {} ({bytes} bytes)", dest.display());
    Ok(())
}
