//! Console sink: human-oriented records on a terminal stream.
//!
//! Each record is a header line followed by the printable's rendered content
//! lines, all CRLF-terminated:
//!
//! ```text
//! NOTE    [ 2024.01.15 10:00:00:123 ] app::server#start (src/server.rs:42)
//!  : listening on 0.0.0.0:8080
//! ```
//!
//! [`Console`] is the façade producers use: `note`, `warning` and `error`
//! always write; `debug` writes only when debug output is enabled, and
//! otherwise hands back the compiled print unexecuted.

use std::io::Write;
use std::sync::Arc;

use pressroom_core::{Channel, ChannelRef, Destination, Print, Printable, Printer, Result, Source};

/// Name the console channel registers under.
pub const CHANNEL_NAME: &str = "pressroom.console";

const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S:%3f";

/// Render `printable` as a console record.
pub fn format_record(printable: &Printable) -> String {
    let source = printable.source();
    let mut out = format!(
        "{:<8.8}[ {} ] {}#{} ({}:{})\r\n",
        printable.tag().to_uppercase(),
        printable.created_at().format(TIMESTAMP_FORMAT),
        source.class(),
        source.method(),
        source.file(),
        source.line(),
    );
    for line in printable.lines() {
        out.push_str(&line);
        out.push_str("\r\n");
    }
    out
}

/// Channel writing console records; accepts every printable.
#[derive(Debug)]
pub struct ConsoleChannel {
    destination: Destination,
}

impl ConsoleChannel {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            destination: Destination::new(writer),
        }
    }

    pub fn stdout() -> Self {
        Self {
            destination: Destination::stdout(),
        }
    }
}

impl Channel for ConsoleChannel {
    fn name(&self) -> &str {
        CHANNEL_NAME
    }

    fn destination(&self) -> &Destination {
        &self.destination
    }

    fn format(&self, printable: &Printable) -> String {
        format_record(printable)
    }
}

/// Producer-facing handle on the console channel.
#[derive(Debug, Clone)]
pub struct Console {
    printer: Arc<Printer>,
    channel: ChannelRef,
    debug: bool,
}

impl Console {
    /// Register a console channel writing to `writer` with `printer`.
    pub fn install(printer: Arc<Printer>, debug: bool, writer: impl Write + Send + 'static) -> Result<Self> {
        let channel: ChannelRef = Arc::new(ConsoleChannel::new(writer));
        printer.add_channel(Arc::clone(&channel))?;
        Ok(Self {
            printer,
            channel,
            debug,
        })
    }

    /// Register a console channel writing to standard output.
    pub fn stdout(printer: Arc<Printer>, debug: bool) -> Result<Self> {
        Self::install(printer, debug, std::io::stdout())
    }

    pub fn channel(&self) -> &ChannelRef {
        &self.channel
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Compile and execute `printable` against the console channel.
    pub fn print(&self, printable: Printable) -> Result<Print> {
        self.printer
            .execute_print(printable, std::slice::from_ref(&self.channel))
    }

    pub fn note(&self, message: impl Into<String>, source: Source) -> Result<Print> {
        self.print(Printable::note(message, source))
    }

    pub fn warning(&self, message: impl Into<String>, source: Source) -> Result<Print> {
        self.print(Printable::warning(message, source))
    }

    /// Report `err` with its cause chain.
    pub fn error<E>(&self, err: &E, source: Source) -> Result<Print>
    where
        E: std::error::Error + ?Sized + 'static,
    {
        self.print(Printable::from_error(err, source))
    }

    /// Write a debug message if debug output is enabled.
    ///
    /// With debug disabled the print is compiled but not executed; callers
    /// may still [`execute`](Print::execute) it themselves.
    pub fn debug(&self, message: impl Into<String>, source: Source) -> Result<Print> {
        let print = self.printer.compile_print(
            Printable::debug(message, source),
            std::slice::from_ref(&self.channel),
        )?;
        if self.debug {
            print.execute()
        } else {
            Ok(print)
        }
    }
}

/// Write a note to a [`Console`], attributed to the call site.
///
/// ```rust,no_run
/// # let console = pressroom_sinks::Console::stdout(Default::default(), false).unwrap();
/// pressroom_sinks::note!(console, "listening on {}", 8080).unwrap();
/// ```
#[macro_export]
macro_rules! note {
    ($console:expr, $($arg:tt)+) => {
        $console.note(::std::format!($($arg)+), $crate::source!())
    };
}

/// Write a warning to a [`Console`], attributed to the call site.
#[macro_export]
macro_rules! warning {
    ($console:expr, $($arg:tt)+) => {
        $console.warning(::std::format!($($arg)+), $crate::source!())
    };
}

/// Write a debug message to a [`Console`], attributed to the call site.
#[macro_export]
macro_rules! debug {
    ($console:expr, $($arg:tt)+) => {
        $console.debug(::std::format!($($arg)+), $crate::source!())
    };
}

/// Report an error value to a [`Console`], attributed to the call site.
#[macro_export]
macro_rules! error {
    ($console:expr, $err:expr) => {
        $console.error($err, $crate::source!())
    };
}
