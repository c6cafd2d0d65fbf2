use crate::ChannelRef;

/// Crate-wide result type for dispatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while registering channels or compiling and executing prints.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A print requested a channel that is not registered with the printer.
    #[error("channel `{}` is not available", .channel.name())]
    ChannelNotAvailable { channel: ChannelRef },

    /// A channel with the same name is already registered.
    #[error("a channel named `{name}` is already registered")]
    DuplicateChannel { name: String },

    /// Writing or flushing a channel's destination failed. Not retried; the
    /// rest of the print is abandoned.
    #[error("delivery to channel `{channel}` failed: {source}")]
    Delivery {
        channel: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    #[must_use]
    pub fn channel_not_available(channel: ChannelRef) -> Self {
        Self::ChannelNotAvailable { channel }
    }

    #[must_use]
    pub fn delivery(channel: impl Into<String>, source: std::io::Error) -> Self {
        Self::Delivery {
            channel: channel.into(),
            source,
        }
    }

    /// The channel a [`ChannelNotAvailable`](Self::ChannelNotAvailable) error refers to.
    pub fn unavailable_channel(&self) -> Option<&ChannelRef> {
        match self {
            Self::ChannelNotAvailable { channel } => Some(channel),
            _ => None,
        }
    }
}

/// Errors raised while loading printer configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration from {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: config::ConfigError,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] config::ConfigError),
}
