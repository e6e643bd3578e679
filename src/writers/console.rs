//! Console writer implementation

use crate::core::{LogRecord, LogWriter};
use colored::Colorize;

type OutputFn = Box<dyn Fn(&str) + Send + Sync>;

/// A [`LogWriter`] that prints each record's rendered text to standard
/// output.
///
/// Delivery is synchronous and always succeeds from the caller's
/// perspective. The output function is injectable, so tests can capture
/// what would have been printed.
pub struct ConsoleWriter {
    output: OutputFn,
    use_colors: bool,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self {
            output: Box::new(|line| println!("{}", line)),
            use_colors: false,
        }
    }

    /// Color each line by the record's level.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Route output through `output` instead of `println!`.
    pub fn with_output(output: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            output: Box::new(output),
            use_colors: false,
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for ConsoleWriter {
    fn deliver(&self, record: &LogRecord) {
        if self.use_colors {
            let line = record
                .formatted
                .as_str()
                .color(record.level.color_code())
                .to_string();
            (self.output)(&line);
        } else {
            (self.output)(&record.formatted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn record(formatted: &str) -> LogRecord {
        LogRecord::new("Message", LogLevel::Info, None, file!(), line!())
            .with_formatted(formatted)
    }

    #[test]
    fn test_prints_formatted_text_verbatim() {
        let lines: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let writer = ConsoleWriter::with_output(move |line| sink.lock().push(line.to_string()));

        writer.deliver(&record("INFO: Message"));

        assert_eq!(*lines.lock(), vec!["INFO: Message".to_string()]);
    }

    #[test]
    fn test_default_writer_does_not_panic() {
        ConsoleWriter::new().deliver(&record("INFO: Message"));
    }
}
