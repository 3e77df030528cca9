use std::fmt;
use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Table of `config.toml` a setting lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Server,
    Database,
    Auth,
    Logging,
}

impl ConfigSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Database => "database",
            Self::Auth => "auth",
            Self::Logging => "logging",
        }
    }
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid {section}.{field}: {message} {location}")]
    Invalid {
        section: ConfigSection,
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot resolve config directory: {source}")]
    WorkingDir {
        #[source]
        source: std::io::Error,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// A setting that loaded but cannot be used
    #[track_caller]
    pub fn invalid<S: Into<String>>(
        section: ConfigSection,
        field: &'static str,
        message: S,
    ) -> Self {
        ConfigError::Invalid {
            section,
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Section of the offending setting, for validation failures
    pub fn section(&self) -> Option<ConfigSection> {
        match self {
            Self::Invalid { section, .. } => Some(*section),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
