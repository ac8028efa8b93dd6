//! CLI configuration management
//!
//! Settings are layered: defaults, then a TOML file, then `BSCALC_*`
//! environment variables, then command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "bscalc.toml";

/// Significant digits printed for a result unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 6;

/// Most significant digits an `f64` can carry.
pub const MAX_PRECISION: usize = 17;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid precision: {0}. Must be between 1 and 17 significant digits")]
    InvalidPrecision(usize),

    #[error("Invalid value for {name}: {value}")]
    InvalidEnvValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Verbosity of the stderr log when `RUST_LOG` is unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const NAMES: [(&'static str, LogLevel); 5] = [
        ("trace", LogLevel::Trace),
        ("debug", LogLevel::Debug),
        ("info", LogLevel::Info),
        ("warn", LogLevel::Warn),
        ("error", LogLevel::Error),
    ];

    /// Directive understood by `EnvFilter`
    pub fn directive(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, level)| *level == self)
            .map_or("info", |(name, _)| *name)
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(_, level)| *level)
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.directive())
    }
}

/// Resolved CLI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Significant digits printed for results
    pub precision: usize,
    /// Reject inputs outside the formulas' domain instead of printing NaN/∞
    pub strict_inputs: bool,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            precision: DEFAULT_PRECISION,
            strict_inputs: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `BSCALC_*` overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("BSCALC_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(precision) = lookup("BSCALC_PRECISION") {
            self.precision = precision
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    name: "BSCALC_PRECISION",
                    value: precision.clone(),
                })?;
        }

        if let Some(strict) = lookup("BSCALC_STRICT") {
            self.strict_inputs = match strict.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        name: "BSCALC_STRICT",
                        value: strict,
                    })
                }
            };
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PRECISION).contains(&self.precision) {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(precision) = cli.precision {
            self.precision = precision;
        }
        if cli.strict {
            self.strict_inputs = true;
        }
        Ok(())
    }
}

/// Configuration-relevant command-line flags
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Explicit config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Precision override
    pub precision: Option<usize>,
    /// Force strict input validation
    pub strict: bool,
    /// Force debug logging
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (explicit path must exist; the default path is optional)
/// 4. Default values
pub fn build_config<F>(cli: &CliArgs, env_lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(env_lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert!(!config.strict_inputs);
    }

    #[test]
    fn test_log_level_names_are_case_insensitive() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" trace ".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert!(matches!(
            "loud".parse::<LogLevel>(),
            Err(ConfigError::InvalidLogLevel(name)) if name == "loud"
        ));
    }

    #[test]
    fn test_log_level_directive_round_trips() {
        for (name, level) in LogLevel::NAMES {
            assert_eq!(level.directive(), name);
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            precision = 6
            strict_inputs = true
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.precision, 6);
        assert!(config.strict_inputs);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("precision = 2").unwrap();
        assert_eq!(config.precision, 2);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(!config.strict_inputs);
    }

    #[test]
    fn test_toml_rejects_bad_log_level() {
        let result: Result<CliConfig, _> = toml::from_str(r#"log_level = "loud""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BSCALC_LOG_LEVEL", "warn"),
            ("BSCALC_PRECISION", "8"),
            ("BSCALC_STRICT", "true"),
        ]
        .into_iter()
        .collect();

        let mut config = CliConfig::default();
        config
            .apply_env(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.precision, 8);
        assert!(config.strict_inputs);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let mut config = CliConfig::default();
        let result = config.apply_env(|name| {
            (name == "BSCALC_PRECISION").then(|| "many".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue {
                name: "BSCALC_PRECISION",
                ..
            })
        ));

        let result = config.apply_env(|name| (name == "BSCALC_STRICT").then(|| "maybe".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("error".to_string()),
            precision: Some(10),
            strict: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.precision, 10);
        assert!(config.strict_inputs);
    }

    #[test]
    fn test_verbose_forces_debug() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("error".to_string()),
            verbose: true,
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_cli_beats_env() {
        let cli = CliArgs {
            config_file: None,
            precision: Some(2),
            ..Default::default()
        };
        let config = build_config(&cli, |name| {
            (name == "BSCALC_PRECISION").then(|| "9".to_string())
        })
        .unwrap();
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_precision_limit() {
        let cli = CliArgs {
            precision: Some(MAX_PRECISION + 1),
            ..Default::default()
        };
        assert!(matches!(
            build_config(&cli, no_env),
            Err(ConfigError::InvalidPrecision(_))
        ));
    }

    #[test]
    fn test_zero_precision_rejected() {
        let cli = CliArgs {
            precision: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            build_config(&cli, no_env),
            Err(ConfigError::InvalidPrecision(0))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/bscalc.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config(&cli, no_env),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!("bscalc-test-{}.toml", std::process::id()));
        std::fs::write(&path, "precision = 3\nstrict_inputs = true\n").unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.precision, 3);
        assert!(config.strict_inputs);
    }
}
