//! Printable — the immutable message handed to the [`Printer`](crate::Printer).
//!
//! A printable carries a tag, the raw content, its creation time and the
//! [`Source`] it was emitted from. How the content breaks into display lines
//! depends on its [`Kind`]:
//!
//! | Kind | Tag | Lines |
//! |------|-----|-------|
//! | `Note` | `note` | one per input line, prefixed `" : "` |
//! | `Warning` | `warning` | one per input line, prefixed `" ! "` |
//! | `Debug` | `debug` | one per input line, prefixed `" > "` |
//! | `Error` | `error` | `" : "` summary, then `" @ "` per [`Frame`] |
//! | `Raw` | any | none; sinks render the content as a whole |

use chrono::{DateTime, Local};
use std::fmt;

use crate::Source;

pub const NOTE: &str = "note";
pub const WARNING: &str = "warning";
pub const DEBUG: &str = "debug";
pub const ERROR: &str = "error";

/// One entry of an error trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub symbol: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl Frame {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            file: None,
            line: None,
        }
    }

    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{} ({}:{})", self.symbol, file, line),
            _ => write!(f, "{}", self.symbol),
        }
    }
}

/// How a printable's content renders into display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Note,
    Warning,
    Debug,
    Error { frames: Vec<Frame> },
    Raw,
}

impl Kind {
    fn prefix(&self) -> Option<&'static str> {
        match self {
            Kind::Note => Some(" : "),
            Kind::Warning => Some(" ! "),
            Kind::Debug => Some(" > "),
            Kind::Error { .. } | Kind::Raw => None,
        }
    }
}

/// An immutable, attributed message.
#[derive(Debug, Clone)]
pub struct Printable {
    tag: String,
    content: String,
    created_at: DateTime<Local>,
    source: Source,
    kind: Kind,
    // Pre-split content for the line-oriented kinds.
    segments: Vec<String>,
}

impl Printable {
    fn build(kind: Kind, tag: impl Into<String>, content: impl Into<String>, source: Source) -> Self {
        let content = content.into();
        let segments = match kind {
            Kind::Note | Kind::Warning | Kind::Debug => split_lines(&content),
            Kind::Error { .. } | Kind::Raw => Vec::new(),
        };
        Self {
            tag: tag.into(),
            content,
            created_at: Local::now(),
            source,
            kind,
            segments,
        }
    }

    pub fn note(content: impl Into<String>, source: Source) -> Self {
        Self::build(Kind::Note, NOTE, content, source)
    }

    pub fn warning(content: impl Into<String>, source: Source) -> Self {
        Self::build(Kind::Warning, WARNING, content, source)
    }

    pub fn debug(content: impl Into<String>, source: Source) -> Self {
        Self::build(Kind::Debug, DEBUG, content, source)
    }

    pub fn error(summary: impl Into<String>, frames: Vec<Frame>, source: Source) -> Self {
        Self::build(Kind::Error { frames }, ERROR, summary, source)
    }

    /// An error printable describing `err`.
    ///
    /// The summary is `"<message> (<type name>)"`; each error in the
    /// [`source`](std::error::Error::source) chain becomes one frame.
    pub fn from_error<E>(err: &E, source: Source) -> Self
    where
        E: std::error::Error + ?Sized + 'static,
    {
        let summary = format!("{} ({})", err, std::any::type_name::<E>());
        let mut frames = Vec::new();
        let mut cause = err.source();
        while let Some(e) = cause {
            frames.push(Frame::new(e.to_string()));
            cause = e.source();
        }
        Self::error(summary, frames, source)
    }

    /// A printable with a caller-chosen tag and no line decomposition.
    pub fn raw(tag: impl Into<String>, content: impl Into<String>, source: Source) -> Self {
        Self::build(Kind::Raw, tag, content, source)
    }

    /// Replace the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Local>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Number of display lines the content renders into.
    pub fn content_line_count(&self) -> usize {
        match &self.kind {
            Kind::Error { frames } => frames.len() + 1,
            Kind::Raw => 0,
            _ => self.segments.len(),
        }
    }

    /// Display line `index`, or `None` past [`content_line_count`](Self::content_line_count).
    pub fn line(&self, index: usize) -> Option<String> {
        match &self.kind {
            Kind::Error { frames } => match index {
                0 => Some(format!(" : {}", self.content)),
                n => frames.get(n - 1).map(|frame| format!(" @ {frame}")),
            },
            Kind::Raw => None,
            kind => {
                let prefix = kind.prefix()?;
                self.segments
                    .get(index)
                    .map(|segment| format!("{prefix}{segment}"))
            }
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.content_line_count()).filter_map(move |i| self.line(i))
    }
}

/// Split on `\n` or `\r\n`, dropping trailing empty segments. Empty content
/// yields a single empty segment.
fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return vec![String::new()];
    }
    let mut segments: Vec<String> = content
        .split('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s).to_string())
        .collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments
}
