//! Regex acceptance filters over a printable's tag and source.

use pressroom_core::config::LogSinkConfig;
use pressroom_core::Printable;
use regex::Regex;

use crate::SinkError;

/// Four optional full-match patterns: tag, class, method and file.
///
/// An empty pattern is unconstrained. A printable is accepted only if every
/// configured pattern matches its field in full.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    tag: Option<Regex>,
    class_name: Option<Regex>,
    method_name: Option<Regex>,
    file_name: Option<Regex>,
}

impl PatternFilter {
    /// A filter that accepts everything.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn new(tag: &str, class_name: &str, method_name: &str, file_name: &str) -> Result<Self, SinkError> {
        Ok(Self {
            tag: compile("tag", tag)?,
            class_name: compile("class name", class_name)?,
            method_name: compile("method name", method_name)?,
            file_name: compile("file name", file_name)?,
        })
    }

    pub fn from_config(sink: &LogSinkConfig) -> Result<Self, SinkError> {
        Self::new(&sink.tag, &sink.class_name, &sink.method_name, &sink.file_name)
    }

    pub fn accepts(&self, printable: &Printable) -> bool {
        let source = printable.source();
        matches(&self.tag, printable.tag())
            && matches(&self.class_name, source.class())
            && matches(&self.method_name, source.method())
            && matches(&self.file_name, source.file())
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Option<Regex>, SinkError> {
    if pattern.is_empty() {
        return Ok(None);
    }
    let invalid = |source| SinkError::Pattern {
        field,
        pattern: pattern.to_string(),
        source: Box::new(source),
    };
    // The raw pattern must parse on its own, otherwise unbalanced groups
    // could escape the anchoring group below.
    Regex::new(pattern).map_err(invalid)?;
    Regex::new(&format!("^(?:{pattern})$"))
        .map(Some)
        .map_err(invalid)
}

fn matches(pattern: &Option<Regex>, value: &str) -> bool {
    pattern.as_ref().map_or(true, |re| re.is_match(value))
}
