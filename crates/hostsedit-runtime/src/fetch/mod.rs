//! Artifact download.
//!
//! One HTTP GET streamed to the staging path. The destination file is
//! created only after a successful response status, so a refused
//! connection or an error status leaves any previously staged copy
//! exactly as it was.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

/// User agent presented to the artifact host.
const USER_AGENT: &str = concat!("hostsedit/", env!("CARGO_PKG_VERSION"));

/// Errors from the fetch stage.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent, or the transfer broke mid-stream.
    #[error("request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("{url} answered HTTP {status}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be written to disk.
    #[error("could not write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

/// Download `url` to `dest`, overwriting any existing file at that path.
///
/// Returns the number of bytes written.
pub async fn download_artifact(url: &str, dest: &Path) -> Result<u64, FetchError> {
    let client = Client::new();
    let request_err = |reason: String| FetchError::RequestFailed {
        url: url.to_string(),
        reason,
    };
    let write_err = |e: std::io::Error| FetchError::WriteFailed {
        path: dest.to_path_buf(),
        reason: e.to_string(),
    };

    info!(%url, dest = %dest.display(), "downloading artifact");

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .map_err(|e| request_err(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::BadStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let total_size = response.content_length().unwrap_or(0);

    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
            .unwrap()
            .progress_chars("█▓░"),
    );

    // Ensure the staging directory exists
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = File::create(dest).map_err(write_err)?;

    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| request_err(e.to_string()))?;
        file.write_all(&chunk).map_err(write_err)?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    pb.finish_with_message("Download complete");
    debug!(bytes = downloaded, "artifact staged");
    Ok(downloaded)
}
