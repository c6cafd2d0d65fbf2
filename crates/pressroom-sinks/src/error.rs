use std::path::PathBuf;

/// Errors raised while building sinks from configuration.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// A filter pattern is not a valid regular expression.
    #[error("invalid {field} pattern `{pattern}`: {source}")]
    Pattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// A log location contains an unknown strftime specifier.
    #[error("invalid log location template `{template}`")]
    Location { template: String },

    /// The log file or one of its parent directories could not be created.
    #[error("failed to open log file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Printer(#[from] pressroom_core::Error),

    #[error(transparent)]
    Config(#[from] pressroom_core::ConfigError),
}

impl SinkError {
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
