//! Log-file sink writing one semicolon-separated record per printable.
//!
//! ```text
//! tag;YYYY;MM;DD;HH;MM;SS;mmm;class;method;file;line;"content"
//! ```
//!
//! Records end in CRLF. In the quoted content `"`, CR and LF are
//! backslash-escaped (in that order), so every record is one physical line.
//! Each [`LogChannel`] only accepts printables passing its [`PatternFilter`].

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};
use pressroom_core::config::LogSinkConfig;
use pressroom_core::{Channel, ChannelRef, Destination, Print, Printable, Printer, Source};

use crate::{PatternFilter, SinkError};

/// Prefix of every log channel name; the file path follows it.
pub const CHANNEL_PREFIX: &str = "pressroom.log+";

const TIMESTAMP_FORMAT: &str = "%Y;%m;%d;%H;%M;%S;%3f";

/// Escape `"`, CR and LF with a backslash.
///
/// Backslashes themselves are left alone, so [`unescape_content`] only
/// restores content that contained none.
pub fn escape_content(content: &str) -> String {
    content
        .replace('"', "\\\"")
        .replace('\r', "\\r")
        .replace('\n', "\\n")
}

/// Undo [`escape_content`].
pub fn unescape_content(escaped: &str) -> String {
    escaped
        .replace("\\n", "\n")
        .replace("\\r", "\r")
        .replace("\\\"", "\"")
}

/// Render `printable` as a log record.
pub fn format_record(printable: &Printable) -> String {
    let source = printable.source();
    format!(
        "{};{};{};{};{};{};\"{}\"\r\n",
        printable.tag(),
        printable.created_at().format(TIMESTAMP_FORMAT),
        source.class(),
        source.method(),
        source.file(),
        source.line(),
        escape_content(printable.content()),
    )
}

/// Expand the strftime specifiers in a location template.
pub fn expand_location(template: &str, now: DateTime<Local>) -> Result<PathBuf, SinkError> {
    let mut expanded = String::new();
    write!(expanded, "{}", now.format(template)).map_err(|_| SinkError::Location {
        template: template.to_string(),
    })?;
    Ok(PathBuf::from(expanded))
}

/// Channel appending log records to a file it owns.
#[derive(Debug)]
pub struct LogChannel {
    name: String,
    path: Option<PathBuf>,
    filter: PatternFilter,
    destination: Destination,
}

impl LogChannel {
    /// Open the file described by `sink`, expanding its location with the
    /// current local time.
    pub fn open(sink: &LogSinkConfig) -> Result<Self, SinkError> {
        Self::open_at(sink, Local::now())
    }

    /// Open the file described by `sink`, expanding its location with `now`.
    ///
    /// Missing parent directories are created. An existing file at the
    /// expanded path is truncated.
    pub fn open_at(sink: &LogSinkConfig, now: DateTime<Local>) -> Result<Self, SinkError> {
        let filter = PatternFilter::from_config(sink)?;
        let path = expand_location(&sink.location, now)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SinkError::io(parent, e))?;
        }
        let file = File::create(&path).map_err(|e| SinkError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "log sink opened");

        Ok(Self {
            name: format!("{CHANNEL_PREFIX}{}", path.display()),
            path: Some(path),
            filter,
            destination: Destination::new(file),
        })
    }

    /// A log channel over an arbitrary writer, named `pressroom.log+<label>`.
    pub fn with_writer(label: &str, filter: PatternFilter, writer: impl Write + Send + 'static) -> Self {
        Self {
            name: format!("{CHANNEL_PREFIX}{label}"),
            path: None,
            filter,
            destination: Destination::new(writer),
        }
    }

    /// The file this channel writes to, if it was opened from a location.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Channel for LogChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn destination(&self) -> &Destination {
        &self.destination
    }

    fn accepts(&self, printable: &Printable) -> bool {
        self.filter.accepts(printable)
    }

    fn format(&self, printable: &Printable) -> String {
        format_record(printable)
    }
}

/// Producer-facing handle on the configured log channels.
#[derive(Debug, Clone)]
pub struct Log {
    printer: Arc<Printer>,
    channels: Vec<ChannelRef>,
}

impl Log {
    /// Open and register one [`LogChannel`] per sink description.
    pub fn install(printer: Arc<Printer>, sinks: &[LogSinkConfig]) -> Result<Self, SinkError> {
        Self::from_channels(printer, Self::open_channels(sinks)?)
    }

    /// Open one [`LogChannel`] per sink description without registering any.
    pub fn open_channels(sinks: &[LogSinkConfig]) -> Result<Vec<ChannelRef>, SinkError> {
        sinks
            .iter()
            .map(|sink| LogChannel::open(sink).map(|c| Arc::new(c) as ChannelRef))
            .collect()
    }

    /// Register already-built channels.
    ///
    /// Either all of them end up registered or none: on failure the
    /// channels registered so far are removed again.
    pub fn from_channels(printer: Arc<Printer>, channels: Vec<ChannelRef>) -> Result<Self, SinkError> {
        for (i, channel) in channels.iter().enumerate() {
            if let Err(err) = printer.add_channel(Arc::clone(channel)) {
                for added in &channels[..i] {
                    printer.remove_channel(added);
                }
                return Err(err.into());
            }
        }
        Ok(Self { printer, channels })
    }

    pub fn channels(&self) -> &[ChannelRef] {
        &self.channels
    }

    /// Write a raw record to every log channel whose filter accepts it.
    pub fn write(
        &self,
        tag: impl Into<String>,
        message: impl Into<String>,
        source: Source,
    ) -> pressroom_core::Result<Print> {
        self.printer
            .execute_print(Printable::raw(tag, message, source), &self.channels)
    }
}

/// Write a tagged record to a [`Log`], attributed to the call site.
///
/// ```rust,no_run
/// # let log = pressroom_sinks::Log::install(Default::default(), &[]).unwrap();
/// pressroom_sinks::log_write!(log, "audit", "user {} logged in", "alice").unwrap();
/// ```
#[macro_export]
macro_rules! log_write {
    ($log:expr, $tag:expr, $($arg:tt)+) => {
        $log.write($tag, ::std::format!($($arg)+), $crate::source!())
    };
}
