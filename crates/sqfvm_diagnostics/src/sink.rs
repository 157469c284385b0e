//! Output targets for rendered diagnostics.
//!
//! A sink receives `(severity, text)` pairs that already passed the gate in
//! [`Logger`](crate::Logger). Sinks never fail: write errors are dropped so
//! that emission always completes.

use crate::severity::Severity;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// A destination for rendered diagnostic text.
pub trait LogSink {
    /// Writes one diagnostic line.
    fn write(&self, severity: Severity, text: &str);
}

/// Writes `"{tag} {text}"` followed by a newline to `out`.
fn write_line(out: &mut impl Write, severity: Severity, text: &str) -> io::Result<()> {
    writeln!(out, "{} {}", severity.tag(), text)
}

/// The default sink: one line per diagnostic on standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, severity: Severity, text: &str) {
        let stdout = io::stdout();
        let _ = write_line(&mut stdout.lock(), severity, text);
    }
}

/// A sink that formats lines like [`ConsoleSink`] into any [`Write`] implementor.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: RefCell<W>,
}

impl<W: Write> WriterSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> LogSink for WriterSink<W> {
    fn write(&self, severity: Severity, text: &str) {
        let _ = write_line(&mut *self.writer.borrow_mut(), severity, text);
    }
}

/// An in-memory sink that records every `(severity, text)` pair.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// [`Logger`](crate::Logger) and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    lines: Rc<RefCell<Vec<(Severity, String)>>>,
}

impl CaptureSink {
    /// Creates an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far.
    pub fn lines(&self) -> Vec<(Severity, String)> {
        self.lines.borrow().clone()
    }

    /// Returns the number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    /// Returns `true` if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Returns the recorded lines formatted the way [`ConsoleSink`] prints them.
    pub fn console_text(&self) -> String {
        let mut out = Vec::new();
        for (severity, text) in self.lines.borrow().iter() {
            let _ = write_line(&mut out, *severity, text);
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Discards all recorded lines.
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl LogSink for CaptureSink {
    fn write(&self, severity: Severity, text: &str) {
        self.lines.borrow_mut().push((severity, text.to_string()));
    }
}
