//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The concrete stage set and system probe from
//! hostsedit-runtime are instantiated here; command handlers receive the
//! composed `CliContext` and delegate work through it.

use std::sync::Arc;

use tracing::debug;

use hostsedit_core::Settings;
use hostsedit_core::ports::SystemProbePort;
use hostsedit_runtime::{DefaultStages, DefaultSystemProbe};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Validated launcher settings.
    pub settings: Settings,
    /// Answer yes to every acknowledgment prompt.
    pub assume_yes: bool,
}

impl CliConfig {
    /// Build the config from environment overrides plus parsed flags.
    ///
    /// Validation happens here so every command starts from settings that
    /// are known to be usable.
    pub fn with_defaults(assume_yes: bool, python: Option<String>) -> Result<Self, CliError> {
        let mut settings = Settings::from_env();
        if python.is_some() {
            settings.python_command = python;
        }
        settings.validate()?;
        Ok(Self {
            settings,
            assume_yes,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Bootstrap configuration.
    pub config: CliConfig,
    /// System probe for dependency and interpreter checks.
    pub probe: Arc<dyn SystemProbePort>,
    /// Production stage set for the launch pipeline.
    pub stages: DefaultStages,
}

impl CliContext {
    /// Access the validated settings.
    pub fn settings(&self) -> &Settings {
        &self.config.settings
    }

    /// Whether acknowledgment prompts are auto-answered.
    pub fn assume_yes(&self) -> bool {
        self.config.assume_yes
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root: the one place concrete runtime
/// implementations are constructed.
pub fn bootstrap(config: CliConfig) -> CliContext {
    debug!(settings = ?config.settings, "bootstrapping CLI context");

    let probe: Arc<dyn SystemProbePort> =
        Arc::new(DefaultSystemProbe::new(config.settings.clone()));
    let stages = DefaultStages::new(config.settings.clone());

    CliContext {
        config,
        probe,
        stages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_and_compose() {
        let config = CliConfig::with_defaults(false, None).expect("default config");
        let ctx = bootstrap(config);
        assert!(!ctx.assume_yes());
        assert_eq!(ctx.settings().forced_python(), None);
    }

    #[test]
    fn forced_python_lands_in_settings() {
        let config =
            CliConfig::with_defaults(true, Some("python3.14".to_string())).expect("config");
        assert_eq!(config.settings.forced_python(), Some("python3.14"));
        assert!(config.assume_yes);
    }

    #[test]
    fn insecure_override_is_rejected_at_bootstrap() {
        let mut settings = Settings::with_defaults();
        settings.artifact_url = Some("http://example.com/editor.py".to_string());
        assert!(settings.validate().is_err());
    }
}
