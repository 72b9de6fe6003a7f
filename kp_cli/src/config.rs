//! CLI configuration management.
//!
//! Command-line flags win over environment variables, which win over defaults.

use kumite_pools::TargetSize;
use std::{fmt, path::PathBuf, str::FromStr};

/// Output format for generated bout sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Invalid {
                var: "KP_OUTPUT".to_string(),
                reason: format!("expected text or json, got {other}"),
            }),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub roster: Option<PathBuf>,
    pub pool_size: Option<usize>,
    pub seed: Option<u64>,
    pub json: bool,
}

/// Resolved CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Roster table file (JSON)
    pub roster_path: PathBuf,
    /// Bout sheet size
    pub target_size: TargetSize,
    /// Fixed shuffle seed, for reproducible sheets
    pub seed: Option<u64>,
    pub output: OutputFormat,
}

impl CliConfig {
    /// Load configuration from CLI overrides and environment variables
    ///
    /// # Errors
    ///
    /// Returns error if the roster path is missing or a value is invalid
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup<F>(overrides: CliOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let roster_path = overrides
            .roster
            .or_else(|| lookup("KP_ROSTER").map(PathBuf::from))
            .ok_or_else(|| ConfigError::MissingRequired {
                var: "KP_ROSTER".to_string(),
                hint: "Pass --roster PATH or set KP_ROSTER".to_string(),
            })?;

        let pool_size = match overrides.pool_size {
            Some(size) => size,
            None => parse_var_or(&lookup, "KP_POOL_SIZE", 4)?,
        };
        let target_size = TargetSize::try_from(pool_size).map_err(|e| ConfigError::Invalid {
            var: "KP_POOL_SIZE".to_string(),
            reason: e.to_string(),
        })?;

        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => lookup("KP_SEED")
                .map(|v| {
                    v.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                        var: "KP_SEED".to_string(),
                        reason: format!("not an unsigned integer: {v}"),
                    })
                })
                .transpose()?,
        };

        let output = if overrides.json {
            OutputFormat::Json
        } else {
            lookup("KP_OUTPUT")
                .map(|v| v.parse::<OutputFormat>())
                .transpose()?
                .unwrap_or(OutputFormat::Text)
        };

        Ok(CliConfig {
            roster_path,
            target_size,
            seed,
            output,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.roster_path.is_file() {
            return Err(ConfigError::Invalid {
                var: "KP_ROSTER".to_string(),
                reason: format!("{} is not a file", self.roster_path.display()),
            });
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse a variable if present; unset falls back to `default`, malformed is an error
fn parse_var_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("cannot parse {v:?}"),
        }),
        None => Ok(default),
    }
}
