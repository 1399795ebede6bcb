//! Tests for the Invar configuration system.

use std::sync::Mutex;

use invar_core::config::{CliOverrides, InvarConfig};
use invar_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all INVAR_ env vars to prevent cross-test contamination.
fn clear_invar_env_vars() {
    for key in [
        "INVAR_CONFIDENCE_MIN_SAMPLES",
        "INVAR_CONFIDENCE_JUSTIFIED_THRESHOLD",
        "INVAR_CONFIDENCE_MODEL",
        "INVAR_CONFIDENCE_CHANCE_RATE",
        "INVAR_DISPATCH_EMIT_EVENTS",
    ] {
        std::env::remove_var(key);
    }
}

/// T0-CFG-01: Layered resolution (CLI > env > project > defaults)
#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_invar_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("invar.toml"),
        r#"
[confidence]
min_samples = 8
justified_threshold = 0.5
model = "ramp"

[dispatch]
emit_events = false
"#,
    )
    .unwrap();

    std::env::set_var("INVAR_CONFIDENCE_MIN_SAMPLES", "12");

    let cli = CliOverrides {
        justified_threshold: Some(0.9),
        ..Default::default()
    };

    let config = InvarConfig::load(dir.path(), Some(&cli)).unwrap();
    clear_invar_env_vars();

    // env beats project
    assert_eq!(config.confidence.effective_min_samples(), 12);
    // CLI beats project
    assert!((config.confidence.effective_justified_threshold() - 0.9).abs() < 1e-12);
    // project beats defaults
    assert_eq!(config.confidence.effective_model(), "ramp");
    assert!(!config.dispatch.effective_emit_events());
}

/// T0-CFG-02: Missing project config yields compiled defaults
#[test]
fn test_defaults_without_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_invar_env_vars();

    let dir = tempdir();
    let config = InvarConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.confidence.effective_min_samples(), 5);
    assert_eq!(config.confidence.effective_model(), "beta");
    assert!((config.confidence.effective_chance_rate() - 0.5).abs() < 1e-12);
    assert!(config.dispatch.effective_emit_events());
}

/// T0-CFG-03: Invalid TOML in project config is a parse error
#[test]
fn test_invalid_project_toml() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_invar_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("invar.toml"), "[confidence\nmin_samples = ").unwrap();
    let result = InvarConfig::load(dir.path(), None);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// T0-CFG-04: Validation rejects out-of-range values
#[test]
fn test_validation_failures() {
    let config = InvarConfig::from_toml("[confidence]\njustified_threshold = 1.5\n").unwrap();
    assert!(matches!(
        InvarConfig::validate(&config),
        Err(ConfigError::ValidationFailed { .. })
    ));

    let config = InvarConfig::from_toml("[confidence]\nmin_samples = 0\n").unwrap();
    assert!(InvarConfig::validate(&config).is_err());

    let config = InvarConfig::from_toml("[confidence]\nmodel = \"gaussian\"\n").unwrap();
    let err = InvarConfig::validate(&config).unwrap_err();
    assert!(err.to_string().contains("confidence.model"));

    let config = InvarConfig::from_toml("[confidence]\nchance_rate = 1.0\n").unwrap();
    assert!(InvarConfig::validate(&config).is_err());
}

/// T0-CFG-05: Unknown keys are ignored (forward-compatible)
#[test]
fn test_unknown_keys_ignored() {
    let config = InvarConfig::from_toml(
        r#"
[confidence]
min_samples = 3
future_knob = "x"

[something_new]
enabled = true
"#,
    )
    .unwrap();
    assert_eq!(config.confidence.effective_min_samples(), 3);
}

/// T0-CFG-06: to_toml output parses back to the same values
#[test]
fn test_to_toml_reparses() {
    let mut config = InvarConfig::default();
    config.confidence.min_samples = Some(9);
    config.confidence.model = Some("ramp".into());
    let text = config.to_toml().unwrap();
    let back = InvarConfig::from_toml(&text).unwrap();
    assert_eq!(back.confidence.min_samples, Some(9));
    assert_eq!(back.confidence.model.as_deref(), Some("ramp"));
}

/// T0-CFG-07: Env override with unparsable value is ignored
#[test]
fn test_bad_env_value_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_invar_env_vars();

    std::env::set_var("INVAR_CONFIDENCE_MIN_SAMPLES", "lots");
    let dir = tempdir();
    let config = InvarConfig::load(dir.path(), None).unwrap();
    clear_invar_env_vars();
    assert_eq!(config.confidence.min_samples, None);
}

/// T0-CFG-08: Chance rate layers like every other knob
#[test]
fn test_chance_rate_layering() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_invar_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("invar.toml"), "[confidence]\nchance_rate = 0.2\n").unwrap();

    let config = InvarConfig::load(dir.path(), None).unwrap();
    assert!((config.confidence.effective_chance_rate() - 0.2).abs() < 1e-12);

    std::env::set_var("INVAR_CONFIDENCE_CHANCE_RATE", "0.3");
    let config = InvarConfig::load(dir.path(), None).unwrap();
    assert!((config.confidence.effective_chance_rate() - 0.3).abs() < 1e-12);

    let cli = CliOverrides {
        chance_rate: Some(0.4),
        ..Default::default()
    };
    let config = InvarConfig::load(dir.path(), Some(&cli)).unwrap();
    assert!((config.confidence.effective_chance_rate() - 0.4).abs() < 1e-12);

    // Overrides are validated like file values.
    let cli = CliOverrides {
        chance_rate: Some(1.5),
        ..Default::default()
    };
    let result = InvarConfig::load(dir.path(), Some(&cli));
    clear_invar_env_vars();
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}
