//! pressroom-sinks — concrete channels and the façades producers call.
//!
//! - [`console`]: human-oriented records on a terminal stream, behind the
//!   [`Console`] façade (`note`, `warning`, `error`, `debug`).
//! - [`log`]: semicolon-separated records in files, each file behind a
//!   regex [`PatternFilter`], written through the [`Log`] façade.
//!
//! [`Sinks::install`] builds both from a [`PrinterConfig`].

pub mod console;
pub mod error;
pub mod filter;
pub mod log;

use std::io::Write;
use std::sync::Arc;

use pressroom_core::config::PrinterConfig;
use pressroom_core::Printer;

pub use console::{Console, ConsoleChannel};
pub use error::SinkError;
pub use filter::PatternFilter;
pub use log::{Log, LogChannel};
pub use pressroom_core::source;

/// The console and log façades built from one configuration.
#[derive(Debug, Clone)]
pub struct Sinks {
    pub console: Console,
    pub log: Log,
}

impl Sinks {
    /// Register a stdout console and the configured log files with `printer`.
    pub fn install(printer: Arc<Printer>, config: &PrinterConfig) -> Result<Self, SinkError> {
        Self::install_with(printer, config, std::io::stdout())
    }

    /// Like [`install`](Self::install), with the console writing to `console_out`.
    ///
    /// On failure nothing stays registered with `printer`.
    pub fn install_with(
        printer: Arc<Printer>,
        config: &PrinterConfig,
        console_out: impl Write + Send + 'static,
    ) -> Result<Self, SinkError> {
        let log_channels = Log::open_channels(&config.log)?;
        let console = Console::install(Arc::clone(&printer), config.console.debug, console_out)?;
        let log = match Log::from_channels(Arc::clone(&printer), log_channels) {
            Ok(log) => log,
            Err(err) => {
                printer.remove_channel(console.channel());
                return Err(err);
            }
        };
        tracing::info!(
            debug = config.console.debug,
            log_sinks = log.channels().len(),
            "sinks installed"
        );
        Ok(Self { console, log })
    }
}
