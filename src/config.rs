//! Unifier configuration.
//!
//! ## TOML Format
//!
//! ```toml
//! [unify]
//! trace_level = 1       # 0 = silent
//! occurs_check = false  # reject cyclic bindings
//! ```
//!
//! Missing keys (or a missing `[unify]` table) fall back to the defaults:
//! silent, no occurs-check.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Settings for a `Unifier`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UnifyConfig {
    /// Diagnostic verbosity, zero = silent
    pub trace_level: u8,

    /// Fail instead of binding a variable to a term that contains it
    pub occurs_check: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    unify: UnifyConfig,
}

impl UnifyConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(file.unify)
    }

    /// Load and parse a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_trace_level(mut self, level: u8) -> Self {
        self.trace_level = level;
        self
    }

    pub fn with_occurs_check(mut self, enabled: bool) -> Self {
        self.occurs_check = enabled;
        self
    }
}

/// Error loading a configuration file
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io { path: String, source: std::io::Error },

    /// The file is not valid TOML or has wrongly-typed keys
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "Failed to read {}: {}", path, source),
            ConfigError::Parse(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
        }
    }
}
