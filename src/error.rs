//! Configuration errors.
//!
//! The simulation itself never fails: a ship hit or an exhausted life count
//! is a session transition, not an error. The only fallible step is loading
//! and validating the base settings once at startup.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::settings::BaseSettings`].
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A value parsed fine but would break the simulation (for example a
    /// playfield too small to hold a single enemy).
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "cannot parse config {}: {source}", path.display())
            }
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config value `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid { .. } => None,
        }
    }
}
