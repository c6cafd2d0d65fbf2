//! pressroom-core — structured message dispatch.
//!
//! Producers build a [`Printable`], ask the [`Printer`] to compile it into a
//! [`Print`] against a set of registered [`Channel`]s, and execute the print
//! to have every accepting channel format and write it.
//!
//! # Architecture
//!
//! ```text
//! source!() ──► Printable ──► Printer::compile_print ──► Print::execute
//!                                   │                        │
//!                      registry + Channel::accepts    Channel::deliver
//! ```
//!
//! Everything is synchronous. The registry is lock-guarded and each channel
//! serialises writes to the destination it owns.

pub mod channel;
pub mod config;
pub mod error;
pub mod print;
pub mod printable;
pub mod printer;
pub mod source;

pub use channel::{same_channel, Channel, ChannelRef, Destination};
pub use error::{ConfigError, Error, Result};
pub use print::Print;
pub use printable::{Frame, Kind, Printable};
pub use printer::Printer;
pub use source::Source;
