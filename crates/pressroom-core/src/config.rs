//! Configuration types for pressroom.
//!
//! [`PrinterConfig::load`] reads a TOML file (by default [`DEFAULT_LOCATION`])
//! layered over the built-in defaults. A missing file is not an error: it
//! yields the defaults, which disable console debug output and configure no
//! log sinks. A file that exists but does not parse is a [`ConfigError`].
//!
//! ```toml
//! [console]
//! debug = true
//!
//! [[log]]
//! location = "logs/%Y%m%d-%H%M%S.log"
//! tag      = "error|warning"
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::ConfigError;

/// Where the printer looks for its configuration when no path is given.
pub const DEFAULT_LOCATION: &str = "cfg/print.toml";

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[console]
debug = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level printer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PrinterConfig {
    #[serde(default)]
    pub console: ConsoleConfig,
    /// One entry per `[[log]]` table.
    #[serde(default)]
    pub log: Vec<LogSinkConfig>,
}

/// `[console]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConsoleConfig {
    /// Whether debug messages are written to the console.
    #[serde(default)]
    pub debug: bool,
}

/// A `[[log]]` entry describing one log-file sink.
///
/// The four patterns are regular expressions matched in full against the
/// corresponding printable field. An empty pattern places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogSinkConfig {
    /// Destination path; `chrono` strftime specifiers (`%Y`, `%m`, ...) are
    /// expanded with the local time the sink is opened.
    pub location: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub method_name: String,
    #[serde(default)]
    pub file_name: String,
}

impl LogSinkConfig {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn tag(mut self, pattern: impl Into<String>) -> Self {
        self.tag = pattern.into();
        self
    }

    pub fn class_name(mut self, pattern: impl Into<String>) -> Self {
        self.class_name = pattern.into();
        self
    }

    pub fn method_name(mut self, pattern: impl Into<String>) -> Self {
        self.method_name = pattern.into();
        self
    }

    pub fn file_name(mut self, pattern: impl Into<String>) -> Self {
        self.file_name = pattern.into();
        self
    }
}

impl PrinterConfig {
    /// Load from `path`, layered on top of the built-in defaults.
    ///
    /// Returns the defaults when `path` does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no printer configuration, using defaults");
            return Ok(Self::defaults());
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|source| ConfigError::Load {
                path: path.display().to_string(),
                source,
            })
    }

    /// Parse a TOML document, layered on top of the built-in defaults.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// The built-in defaults: debug off, no log sinks.
    pub fn defaults() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
