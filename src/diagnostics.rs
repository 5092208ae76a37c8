//! A small sink for soft errors: unknown tokens, unmatched context,
//! mixed/overflowing probabilities, and unparseable lines in the flat
//! textual format. None of these abort a pipeline; they are reported
//! through a [`DiagnosticSink`] rather than printed directly, so that
//! neither core performs I/O on its own.

use std::fmt;

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Level::Info => f.write_str("INFO"),
            Level::Warn => f.write_str("WARN"),
            Level::Error => f.write_str("ERROR"),
        }
    }
}

/// Receives soft diagnostics emitted while rewriting or decoding.
///
/// Implement this yourself to collect diagnostics in a test, route them to a
/// UI, or otherwise avoid the default `log`-crate behavior.
pub trait DiagnosticSink {
    fn emit(&mut self, level: Level, message: String);

    fn info(&mut self, message: impl Into<String>) {
        self.emit(Level::Info, message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.emit(Level::Warn, message.into());
    }

    fn error(&mut self, message: impl Into<String>) {
        self.emit(Level::Error, message.into());
    }
}

/// Forwards diagnostics to the `log` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, level: Level, message: String) {
        match level {
            Level::Info => log::info!("{message}"),
            Level::Warn => log::warn!("{message}"),
            Level::Error => log::error!("{message}"),
        }
    }
}

/// Discards every diagnostic. Useful when a caller genuinely doesn't care.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _level: Level, _message: String) {}
}

/// Collects diagnostics into a `Vec` in emission order. Used by this crate's
/// own tests to assert on soft-error behavior without installing a logger.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    pub records: Vec<(Level, String)>,
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, level: Level, message: String) {
        self.records.push((level, message));
    }
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages_at(&self, level: Level) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(move |(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
    }
}
