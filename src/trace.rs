//! Trace
//!
//! Every scoring decision made while naming a chord can be explained as one
//! line of text, e.g. `"+30 found major third, major chord"`. Where those
//! lines go is up to the caller: [`NoTrace`] drops them, [`TraceLog`] keeps
//! them, and anything implementing [`TraceSink`] can route them elsewhere.

use std::fmt;

/// Receiver for trace lines.
pub trait TraceSink {
    /// Whether lines should be formatted at all. Sinks that discard
    /// everything return `false` so no text is built for them.
    fn enabled(&self) -> bool {
        true
    }

    /// Accept one finished line.
    fn record(&mut self, line: String);
}

/// Sink that discards every line.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn enabled(&self) -> bool {
        false
    }

    fn record(&mut self, _line: String) {}
}

/// Sink that keeps every line in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TraceLog {
    lines: Vec<String>,
}

impl TraceLog {
    /// Empty log.
    pub fn new() -> Self {
        TraceLog { lines: Vec::new() }
    }

    /// Lines recorded so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the recorded lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl TraceSink for TraceLog {
    fn record(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl TraceSink for Vec<String> {
    fn record(&mut self, line: String) {
        self.push(line);
    }
}

/// Formats scoring decisions for a sink.
///
/// Each line starts with the signed score change padded to three columns,
/// then the message: `"-5  found dominant seventh"`.
pub(crate) struct Trace<'t> {
    sink: &'t mut dyn TraceSink,
}

impl<'t> Trace<'t> {
    pub(crate) fn new(sink: &'t mut dyn TraceSink) -> Self {
        Trace { sink }
    }

    pub(crate) fn line(&mut self, delta: i32, message: fmt::Arguments<'_>) {
        if !self.sink.enabled() {
            return;
        }
        let line = format!("{delta:<+3} {message}");
        log::trace!("{line}");
        self.sink.record(line);
    }
}
