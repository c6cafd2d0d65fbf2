//! The channel trait and the destinations channels own.
//!
//! Every channel owns exactly one [`Destination`]. Nothing else writes to it,
//! and deliveries to the same channel are serialised by the destination's
//! lock so records never interleave.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::Printable;

/// Shared handle to a registered channel.
pub type ChannelRef = Arc<dyn Channel>;

/// A named sink with an acceptance filter and a formatter.
pub trait Channel: Send + Sync {
    /// Identity string; unique within a [`Printer`](crate::Printer).
    fn name(&self) -> &str;

    /// The write stream this channel exclusively owns.
    fn destination(&self) -> &Destination;

    /// Whether this channel wants `printable`. Must be pure.
    fn accepts(&self, printable: &Printable) -> bool {
        let _ = printable;
        true
    }

    /// Render `printable` to the exact text written to the destination.
    fn format(&self, printable: &Printable) -> String;

    /// Write the formatted printable and flush.
    fn deliver(&self, printable: &Printable) -> io::Result<()> {
        self.destination().write_flushed(&self.format(printable))
    }
}

impl fmt::Debug for dyn Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel").field("name", &self.name()).finish()
    }
}

/// Identity comparison for channel handles.
///
/// Compares data pointers only, so two handles to the same allocation are
/// equal even if their vtable pointers differ.
pub fn same_channel(a: &ChannelRef, b: &ChannelRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// A lock-guarded, exclusively owned write stream.
pub struct Destination {
    inner: Mutex<Box<dyn Write + Send>>,
}

impl Destination {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            inner: Mutex::new(Box::new(writer)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Write all of `text` and flush, holding the lock for both.
    pub fn write_flushed(&self, text: &str) -> io::Result<()> {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination").finish_non_exhaustive()
    }
}
