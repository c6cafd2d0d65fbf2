//! pressroom — structured message dispatch.
//!
//! Callers emit tagged, timestamped, source-attributed messages that are
//! rendered and written to named channels such as the console or log files.
//! This crate re-exports the two layers so that integration tests and the
//! binary can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! Console / Log façades ──► Printer ──► Print ──► Channel::deliver
//!         │                   │
//!   PrinterConfig        registry of Channels
//! ```
//!
//! `pressroom-core` owns the pipeline; `pressroom-sinks` owns the console
//! and log-file channels plus the façades.

pub use pressroom_core::{
    config, same_channel, source, Channel, ChannelRef, ConfigError, Destination, Error, Frame,
    Kind, Print, Printable, Printer, Result, Source,
};
pub use pressroom_sinks::{
    console, debug, error, log, log_write, note, warning, Console, ConsoleChannel, Log,
    LogChannel, PatternFilter, SinkError, Sinks,
};
