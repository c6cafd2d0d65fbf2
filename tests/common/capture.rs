//! In-memory writers used as channel destinations.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// A cloneable, thread-safe byte sink. Every clone shares the same buffer, so
/// the test keeps one handle while the channel owns another.
#[derive(Clone, Default)]
pub struct CaptureBuffer(Arc<Mutex<Vec<u8>>>);

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("captured output is UTF-8")
    }

    /// Captured output split on CRLF, without the trailing empty segment.
    pub fn crlf_lines(&self) -> Vec<String> {
        let text = self.text();
        let mut lines: Vec<String> = text.split("\r\n").map(str::to_string).collect();
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer whose flush always fails, as a closed pipe would.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "destination closed"))
    }
}
