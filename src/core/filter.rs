//! Filtering decorator

use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::writer::LogWriter;

type Predicate = Box<dyn Fn(&LogRecord) -> bool + Send + Sync>;

/// A [`LogWriter`] that forwards records to an inner writer only when a
/// predicate accepts them. Rejected records are dropped silently; a drop is
/// a deliberate outcome, not an error.
///
/// Most easily built through the chaining combinators:
///
/// ```
/// use composite_logger::prelude::*;
///
/// let writer = NullWriter.filter_level(LogLevel::Warning);
/// ```
pub struct FilterWriter {
    predicate: Predicate,
    inner: Box<dyn LogWriter>,
}

impl FilterWriter {
    pub fn new<W, P>(inner: W, predicate: P) -> Self
    where
        W: LogWriter + 'static,
        P: Fn(&LogRecord) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            inner: Box::new(inner),
        }
    }

    /// Forward only records at `min_level` or above. The threshold is
    /// inclusive: a record exactly at `min_level` passes.
    pub fn by_level<W: LogWriter + 'static>(inner: W, min_level: LogLevel) -> Self {
        Self::new(inner, move |record| record.level >= min_level)
    }

    /// Forward only records whose category exactly matches a member of
    /// `categories`. A record without a category never passes, even when
    /// the allow-list is empty.
    pub fn by_categories<W, I, S>(inner: W, categories: I) -> Self
    where
        W: LogWriter + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        Self::new(inner, move |record| {
            record
                .category
                .as_ref()
                .is_some_and(|category| categories.contains(category))
        })
    }
}

impl LogWriter for FilterWriter {
    fn deliver(&self, record: &LogRecord) {
        if (self.predicate)(record) {
            self.inner.deliver(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::writer::test_support::CollectingWriter;

    fn record(level: LogLevel, category: Option<&str>) -> LogRecord {
        LogRecord::new(
            "Message",
            level,
            category.map(String::from),
            file!(),
            line!(),
        )
    }

    #[test]
    fn test_predicate_controls_forwarding() {
        let collector = CollectingWriter::new();
        let writer = FilterWriter::new(collector.clone(), |record| record.message == "Message");

        writer.deliver(&record(LogLevel::Info, None));
        writer.deliver(&record(LogLevel::Info, None).with_message("other"));

        assert_eq!(collector.count(), 1);
    }

    #[test]
    fn test_forwarded_record_is_unmodified() {
        let collector = CollectingWriter::new();
        let writer = FilterWriter::by_level(collector.clone(), LogLevel::Trace);

        let original = record(LogLevel::Warning, Some("NET"));
        writer.deliver(&original);

        assert_eq!(collector.records(), vec![original]);
    }

    #[test]
    fn test_level_threshold_is_inclusive() {
        let collector = CollectingWriter::new();
        let writer = FilterWriter::by_level(collector.clone(), LogLevel::Warning);

        writer.deliver(&record(LogLevel::Warning, None));

        assert_eq!(collector.count(), 1);
    }

    #[test]
    fn test_level_below_threshold_is_dropped() {
        let collector = CollectingWriter::new();
        let writer = FilterWriter::by_level(collector.clone(), LogLevel::Error);

        writer.deliver(&record(LogLevel::Debug, None));

        assert_eq!(collector.count(), 0);
    }

    #[test]
    fn test_category_allow_list() {
        let collector = CollectingWriter::new();
        let writer = FilterWriter::by_categories(collector.clone(), ["NET", "DB"]);

        writer.deliver(&record(LogLevel::Info, Some("NET")));
        writer.deliver(&record(LogLevel::Info, Some("UI")));
        writer.deliver(&record(LogLevel::Info, None));

        let records = collector.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category.as_deref(), Some("NET"));
    }

    #[test]
    fn test_absent_category_fails_even_empty_allow_list() {
        let collector = CollectingWriter::new();
        let writer = FilterWriter::by_categories(collector.clone(), Vec::<String>::new());

        writer.deliver(&record(LogLevel::Info, None));
        writer.deliver(&record(LogLevel::Info, Some("NET")));

        assert_eq!(collector.count(), 0);
    }
}
