//! Test builders — ergonomic constructors for printables, channels and printers.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, Local, TimeZone};
use pressroom::{Channel, ChannelRef, Destination, Printable, Printer, Source};
use std::sync::Arc;

use super::CaptureBuffer;

// ---------------------------------------------------------------------------
// Printables
// ---------------------------------------------------------------------------

/// A fixed timestamp so rendered records are deterministic.
pub fn fixed_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap() + chrono::Duration::milliseconds(123)
}

pub fn test_source() -> Source {
    Source::new("app::jobs", "run", "src/jobs.rs", 27)
}

pub fn note(content: &str) -> Printable {
    Printable::note(content, test_source()).with_created_at(fixed_time())
}

pub fn raw(tag: &str, content: &str) -> Printable {
    Printable::raw(tag, content, test_source()).with_created_at(fixed_time())
}

/// A raw printable with every field chosen by the caller.
pub fn attributed(tag: &str, class: &str, method: &str, file: &str) -> Printable {
    Printable::raw(tag, "body", Source::new(class, method, file, 1)).with_created_at(fixed_time())
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// A channel that writes `[name] tag: content` lines and optionally accepts
/// only one tag.
pub struct RecordingChannel {
    name: String,
    only_tag: Option<String>,
    destination: Destination,
}

impl RecordingChannel {
    pub fn new(name: &str, out: CaptureBuffer) -> Self {
        Self {
            name: name.to_string(),
            only_tag: None,
            destination: Destination::new(out),
        }
    }

    pub fn only(mut self, tag: &str) -> Self {
        self.only_tag = Some(tag.to_string());
        self
    }

    pub fn into_ref(self) -> ChannelRef {
        Arc::new(self)
    }
}

impl Channel for RecordingChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn destination(&self) -> &Destination {
        &self.destination
    }

    fn accepts(&self, printable: &Printable) -> bool {
        self.only_tag.as_deref().map_or(true, |tag| printable.tag() == tag)
    }

    fn format(&self, printable: &Printable) -> String {
        format!("[{}] {}: {}\n", self.name, printable.tag(), printable.content())
    }
}

/// `n` recording channels named `c0..cn`, all writing to `out`.
pub fn recording_channels(n: usize, out: &CaptureBuffer) -> Vec<ChannelRef> {
    (0..n)
        .map(|i| RecordingChannel::new(&format!("c{i}"), out.clone()).into_ref())
        .collect()
}

/// A printer with every channel in `channels` registered.
pub fn printer_with(channels: &[ChannelRef]) -> Arc<Printer> {
    let printer = Arc::new(Printer::new());
    for channel in channels {
        printer.add_channel(Arc::clone(channel)).unwrap();
    }
    printer
}
