//! The log writer capability and its chaining combinators

use super::filter::FilterWriter;
use super::format::{FormatWriter, LogFormatter};
use super::log_level::LogLevel;
use super::log_record::LogRecord;
use std::sync::Arc;

/// Write records to a log.
///
/// This single capability is shared by terminal sinks, decorators, and whole
/// composed pipelines, which is what makes the composition recursive: a
/// [`ForkWriter`](super::fork::ForkWriter) child may itself be a filter
/// wrapping a format wrapping another fork.
///
/// # Delivery contract
///
/// `deliver` has no return value and must never surface a failure to the
/// emitting call site. A sink that cannot complete delivery swallows the
/// failure, at most reporting it through a stderr diagnostic that is
/// distinguishable from the log stream itself. Logging must not crash or
/// divert control flow in the caller.
pub trait LogWriter: Send + Sync {
    /// Write a record to this log.
    fn deliver(&self, record: &LogRecord);

    /// Wrap the receiver so only records matching `predicate` are forwarded.
    ///
    /// ```
    /// use composite_logger::prelude::*;
    ///
    /// let writer = NullWriter.filter(|record| record.message.len() < 1024);
    /// ```
    fn filter<P>(self, predicate: P) -> FilterWriter
    where
        Self: Sized + 'static,
        P: Fn(&LogRecord) -> bool + Send + Sync + 'static,
    {
        FilterWriter::new(self, predicate)
    }

    /// Wrap the receiver so only records at `min_level` or above are
    /// forwarded (threshold inclusive).
    fn filter_level(self, min_level: LogLevel) -> FilterWriter
    where
        Self: Sized + 'static,
    {
        FilterWriter::by_level(self, min_level)
    }

    /// Wrap the receiver so only records tagged with one of `categories`
    /// are forwarded. Records without a category never pass.
    fn filter_categories<I, S>(self, categories: I) -> FilterWriter
    where
        Self: Sized + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterWriter::by_categories(self, categories)
    }

    /// Wrap the receiver so each record's rendered text is rewritten by
    /// `formatter` before it is forwarded.
    fn format(self, formatter: LogFormatter) -> FormatWriter
    where
        Self: Sized + 'static,
    {
        FormatWriter::new(self, formatter)
    }
}

impl<W: LogWriter + ?Sized> LogWriter for Box<W> {
    fn deliver(&self, record: &LogRecord) {
        (**self).deliver(record);
    }
}

impl<W: LogWriter + ?Sized> LogWriter for Arc<W> {
    fn deliver(&self, record: &LogRecord) {
        (**self).deliver(record);
    }
}

/// A writer that discards every record.
///
/// Useful as an explicit "log nowhere" binding and as a terminal sink in
/// benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullWriter;

impl LogWriter for NullWriter {
    fn deliver(&self, _record: &LogRecord) {}
}
