//! Configuration for Truth Sifter.
//!
//! Settings are read from the environment (after loading an optional `.env`
//! file). Command line flags override them in the binary.

use std::time::Duration;

use crate::error::ConfigError;

/// Default simulated analysis latency.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(1500);

/// Main configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Settings for the mock analyzer.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Simulated latency before a result is produced.
    pub delay: Duration,
    /// Seed for reproducible draws. `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_ANALYSIS_DELAY,
            seed: None,
        }
    }
}

/// Settings for rendering results.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
    pub log_format: LogFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            log_format: LogFormat::Pretty,
        }
    }
}

/// How analysis results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "invalid output format '{}', expected 'text' or 'json'",
                s
            )),
        }
    }
}

/// How log lines are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "invalid log format '{}', expected 'pretty' or 'json'",
                s
            )),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let delay = parse_optional(&lookup, "SIFTER_ANALYSIS_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.analysis.delay);
        let seed = parse_optional(&lookup, "SIFTER_SEED")?;

        let format = parse_optional(&lookup, "SIFTER_OUTPUT")?.unwrap_or(defaults.output.format);
        let color = match optional_var(&lookup, "SIFTER_COLOR") {
            Some(value) => parse_bool("SIFTER_COLOR", &value)?,
            None => defaults.output.color,
        };
        let log_format =
            parse_optional(&lookup, "SIFTER_LOG_FORMAT")?.unwrap_or(defaults.output.log_format);

        Ok(Self {
            analysis: AnalysisConfig { delay, seed },
            output: OutputConfig {
                format,
                color,
                log_format,
            },
        })
    }
}

/// Read a variable, treating blank values as unset.
fn optional_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_optional<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    optional_var(lookup, key)
        .map(|value| {
            value.parse::<T>().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("'{}': {}", value, e),
            })
        })
        .transpose()
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("'{}' is not a boolean", value),
        }),
    }
}
