//! Launcher configuration.
//!
//! Everything has a pinned default; overrides come from the environment
//! (optionally loaded from a `.env` file by the binary). The launcher
//! persists nothing itself, so there is no settings file to merge.

use std::env;

use thiserror::Error;

/// Default URL of the editor script.
pub const DEFAULT_ARTIFACT_URL: &str =
    "https://raw.githubusercontent.com/hostsedit/hostsedit/main/tools/hosts_editor.py";

/// Environment variable overriding the artifact URL.
pub const ARTIFACT_URL_ENV: &str = "HOSTSEDIT_ARTIFACT_URL";

/// Environment variable forcing a specific interpreter command.
pub const PYTHON_ENV: &str = "HOSTSEDIT_PYTHON";

/// Validation failures for override values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The artifact URL is served over plain HTTP from a non-loopback host.
    #[error("artifact URL must use https (http is allowed on loopback only): {url}")]
    InsecureUrl { url: String },

    /// The artifact URL has no recognizable scheme.
    #[error("artifact URL is not an http(s) URL: {url}")]
    MalformedUrl { url: String },
}

/// Launcher settings with pinned defaults.
///
/// Fields are `None` when no override is present; `effective_*()` accessors
/// fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Override for the artifact URL.
    pub artifact_url: Option<String>,
    /// Override forcing one interpreter command instead of candidate search.
    pub python_command: Option<String>,
}

impl Settings {
    /// Settings with every field unset, so all pinned defaults apply.
    pub const fn with_defaults() -> Self {
        Self {
            artifact_url: None,
            python_command: None,
        }
    }

    /// Read overrides from the environment.
    ///
    /// The interpreter override is handled by the CLI parser (`--python`,
    /// backed by [`PYTHON_ENV`]); only the artifact URL is read here.
    pub fn from_env() -> Self {
        Self {
            artifact_url: non_empty(env::var(ARTIFACT_URL_ENV).ok()),
            python_command: None,
        }
    }

    /// URL the fetch stage downloads.
    pub fn effective_artifact_url(&self) -> &str {
        self.artifact_url.as_deref().unwrap_or(DEFAULT_ARTIFACT_URL)
    }

    /// Forced interpreter command, when configured.
    pub fn forced_python(&self) -> Option<&str> {
        self.python_command.as_deref()
    }

    /// Validate override values.
    ///
    /// The artifact URL must be https; plain http is admitted only for
    /// loopback hosts so failure-path tests can run against a local socket.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let url = self.effective_artifact_url();
        if let Some(rest) = url.strip_prefix("http://") {
            if loopback_host(rest) {
                return Ok(());
            }
            return Err(SettingsError::InsecureUrl {
                url: url.to_string(),
            });
        }
        if url.strip_prefix("https://").is_none() {
            return Err(SettingsError::MalformedUrl {
                url: url.to_string(),
            });
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Whether the host part of `rest` (a URL with its scheme stripped) is a
/// loopback address.
fn loopback_host(rest: &str) -> bool {
    for host in ["127.0.0.1", "localhost", "[::1]"] {
        if let Some(tail) = rest.strip_prefix(host)
            && (tail.is_empty() || tail.starts_with(':') || tail.starts_with('/'))
        {
            return true;
        }
    }
    false
}
