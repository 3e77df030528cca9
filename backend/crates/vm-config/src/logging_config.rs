use crate::{
    ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY,
    DEFAULT_LOG_LEVEL, LogLevel,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub dir: String,
    /// Log file name inside `dir`; stdout when unset
    pub file: Option<String>,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::invalid(
                ConfigSection::Logging,
                "dir",
                "cannot be empty",
            ));
        }

        // A bare file name; the directory comes from `dir`
        if let Some(file) = &self.file
            && (file.trim().is_empty() || file.contains(['/', '\\']) || file.contains(".."))
        {
            return Err(ConfigError::invalid(
                ConfigSection::Logging,
                "file",
                format!("must be a plain file name, got '{}'", file),
            ));
        }

        Ok(())
    }
}
