//! Record formatting and the format decorator

use super::clock::{Clock, SystemClock};
use super::log_record::LogRecord;
use super::writer::LogWriter;
use std::sync::Arc;

/// Timestamp pattern used by the `medium` and `full` formatters:
/// `HH:mm:ss:SSS dd.MM.yyyy`.
const TIMESTAMP_PATTERN: &str = "%H:%M:%S:%3f %d.%m.%Y";

/// A pure function from a record to its rendered text.
///
/// Applying a formatter never mutates the input record; it yields a new
/// record whose `formatted` field carries the computed text.
///
/// Three canonical formatters are provided:
///
/// - [`LogFormatter::simple`] - `LEVEL: [category: ]message`
/// - [`LogFormatter::medium`] - `simple` prefixed with a timestamp
/// - [`LogFormatter::full`] - `medium` plus `file:line:` before the message
#[derive(Clone)]
pub struct LogFormatter {
    formatter: Arc<dyn Fn(&LogRecord) -> String + Send + Sync>,
}

impl LogFormatter {
    pub fn new(formatter: impl Fn(&LogRecord) -> String + Send + Sync + 'static) -> Self {
        Self {
            formatter: Arc::new(formatter),
        }
    }

    /// `"<LEVEL>: [<category>: ]<message>"` - the category segment is
    /// omitted entirely when the record has no category.
    pub fn simple() -> Self {
        Self::new(|record| {
            format!(
                "{}: {}{}",
                record.level,
                category_segment(record),
                record.message
            )
        })
    }

    /// [`LogFormatter::simple`] prefixed with a wall-clock timestamp.
    pub fn medium() -> Self {
        Self::medium_with(SystemClock)
    }

    /// [`LogFormatter::medium`] with an explicit time source.
    pub fn medium_with<C: Clock + 'static>(clock: C) -> Self {
        Self::new(move |record| {
            format!(
                "{} {}: {}{}",
                clock.now().format(TIMESTAMP_PATTERN),
                record.level,
                category_segment(record),
                record.message
            )
        })
    }

    /// [`LogFormatter::medium`] with the call-site location inserted before
    /// the message.
    pub fn full() -> Self {
        Self::full_with(SystemClock)
    }

    /// [`LogFormatter::full`] with an explicit time source.
    pub fn full_with<C: Clock + 'static>(clock: C) -> Self {
        Self::new(move |record| {
            format!(
                "{} {}: {}{}:{}: {}",
                clock.now().format(TIMESTAMP_PATTERN),
                record.level,
                category_segment(record),
                basename(record.file),
                record.line,
                record.message
            )
        })
    }

    /// Compute the rendered text for `record`.
    pub fn format(&self, record: &LogRecord) -> String {
        (self.formatter)(record)
    }

    /// Produce a new record identical to `record` except for its rendered
    /// text.
    pub fn apply(&self, record: &LogRecord) -> LogRecord {
        record.clone().with_formatted(self.format(record))
    }
}

fn category_segment(record: &LogRecord) -> String {
    record
        .category
        .as_ref()
        .map(|category| format!("[{}]: ", category))
        .unwrap_or_default()
}

/// Last path component of `path`. Trailing separators are stripped before
/// the final segment is taken; a path without separators is returned as is.
fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed
        .rsplit_once('/')
        .map_or(trimmed, |(_, last)| last)
}

/// A [`LogWriter`] that rewrites each record's rendered text before passing
/// it on.
pub struct FormatWriter {
    inner: Box<dyn LogWriter>,
    formatter: LogFormatter,
}

impl FormatWriter {
    pub fn new<W: LogWriter + 'static>(inner: W, formatter: LogFormatter) -> Self {
        Self {
            inner: Box::new(inner),
            formatter,
        }
    }
}

impl LogWriter for FormatWriter {
    fn deliver(&self, record: &LogRecord) {
        self.inner.deliver(&self.formatter.apply(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::test_support::FixedClock;
    use crate::core::log_level::LogLevel;
    use crate::core::writer::test_support::CollectingWriter;

    fn record(category: Option<&str>) -> LogRecord {
        LogRecord::new(
            "Message",
            LogLevel::Debug,
            category.map(String::from),
            "/tmp/sources/main.rs",
            42,
        )
    }

    #[test]
    fn test_simple_without_category() {
        let text = LogFormatter::simple().format(&record(None));
        assert_eq!(text, "DEBUG: Message");
    }

    #[test]
    fn test_simple_with_category() {
        let text = LogFormatter::simple().format(&record(Some("Test")));
        assert_eq!(text, "DEBUG: [Test]: Message");
    }

    #[test]
    fn test_medium_prefixes_timestamp() {
        let formatter = LogFormatter::medium_with(FixedClock::reference());
        let text = formatter.format(&record(None));
        assert_eq!(text, "10:30:45:123 08.01.2025 DEBUG: Message");
    }

    #[test]
    fn test_full_inserts_location() {
        let formatter = LogFormatter::full_with(FixedClock::reference());
        let text = formatter.format(&record(Some("Test")));
        assert_eq!(text, "10:30:45:123 08.01.2025 DEBUG: [Test]: main.rs:42: Message");
    }

    #[test]
    fn test_apply_replaces_only_formatted() {
        let original = record(None);
        let applied = LogFormatter::simple().apply(&original);

        assert_eq!(applied.formatted, "DEBUG: Message");
        assert_eq!(applied.message, original.message);
        assert_eq!(original.formatted, "Message");
    }

    #[test]
    fn test_format_writer_forwards_new_record() {
        let collector = CollectingWriter::new();
        let writer = FormatWriter::new(collector.clone(), LogFormatter::simple());

        writer.deliver(&record(Some("Test")));

        let records = collector.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].formatted, "DEBUG: [Test]: Message");
        assert_eq!(records[0].message, "Message");
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename(""), "");
        assert_eq!(basename("/a/"), "a");
        assert_eq!(basename("a"), "a");
        assert_eq!(basename("a/b/c"), "c");
        assert_eq!(basename("/tmp/sources/main.rs"), "main.rs");
    }

    #[test]
    fn test_custom_formatter() {
        let formatter = LogFormatter::new(|record| record.message.to_uppercase());
        assert_eq!(formatter.format(&record(None)), "MESSAGE");
    }
}
