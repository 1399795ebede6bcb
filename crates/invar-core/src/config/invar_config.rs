//! Top-level Invar configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ConfidenceConfig, DispatchConfig};
use crate::errors::ConfigError;

/// Known model names accepted by `confidence.model`.
pub const CONFIDENCE_MODELS: &[&str] = &["beta", "ramp"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`INVAR_*`)
/// 3. Project config (`invar.toml` in project root)
/// 4. User config (`~/.invar/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InvarConfig {
    pub confidence: ConfidenceConfig,
    pub dispatch: DispatchConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_samples: Option<u64>,
    pub justified_threshold: Option<f64>,
    pub confidence_model: Option<String>,
    pub chance_rate: Option<f64>,
    pub emit_events: Option<bool>,
}

impl InvarConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only parse failures are fatal here.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join("invar.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &InvarConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.confidence.justified_threshold {
            if !(0.0..1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "confidence.justified_threshold".to_string(),
                    message: "must be in [0.0, 1.0)".to_string(),
                });
            }
        }
        if let Some(rate) = config.confidence.chance_rate {
            if !(rate > 0.0 && rate < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "confidence.chance_rate".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(ref model) = config.confidence.model {
            if !CONFIDENCE_MODELS.contains(&model.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "confidence.model".to_string(),
                    message: format!("unknown model '{}', expected one of {:?}", model, CONFIDENCE_MODELS),
                });
            }
        }
        if config.confidence.min_samples == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "confidence.min_samples".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.invar/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".invar").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut InvarConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: InvarConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut InvarConfig, other: &InvarConfig) {
        if other.confidence.min_samples.is_some() {
            base.confidence.min_samples = other.confidence.min_samples;
        }
        if other.confidence.justified_threshold.is_some() {
            base.confidence.justified_threshold = other.confidence.justified_threshold;
        }
        if other.confidence.model.is_some() {
            base.confidence.model = other.confidence.model.clone();
        }
        if other.confidence.chance_rate.is_some() {
            base.confidence.chance_rate = other.confidence.chance_rate;
        }
        if other.dispatch.emit_events.is_some() {
            base.dispatch.emit_events = other.dispatch.emit_events;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `INVAR_CONFIDENCE_MIN_SAMPLES`, `INVAR_DISPATCH_EMIT_EVENTS`, etc.
    fn apply_env_overrides(config: &mut InvarConfig) {
        if let Ok(val) = std::env::var("INVAR_CONFIDENCE_MIN_SAMPLES") {
            if let Ok(v) = val.parse::<u64>() {
                config.confidence.min_samples = Some(v);
            }
        }
        if let Ok(val) = std::env::var("INVAR_CONFIDENCE_JUSTIFIED_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.confidence.justified_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("INVAR_CONFIDENCE_MODEL") {
            config.confidence.model = Some(val);
        }
        if let Ok(val) = std::env::var("INVAR_CONFIDENCE_CHANCE_RATE") {
            if let Ok(v) = val.parse::<f64>() {
                config.confidence.chance_rate = Some(v);
            }
        }
        if let Ok(val) = std::env::var("INVAR_DISPATCH_EMIT_EVENTS") {
            if let Ok(v) = val.parse::<bool>() {
                config.dispatch.emit_events = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut InvarConfig, cli: &CliOverrides) {
        if let Some(v) = cli.min_samples {
            config.confidence.min_samples = Some(v);
        }
        if let Some(v) = cli.justified_threshold {
            config.confidence.justified_threshold = Some(v);
        }
        if let Some(ref v) = cli.confidence_model {
            config.confidence.model = Some(v.clone());
        }
        if let Some(v) = cli.chance_rate {
            config.confidence.chance_rate = Some(v);
        }
        if let Some(v) = cli.emit_events {
            config.dispatch.emit_events = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
