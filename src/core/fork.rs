//! Fan-out decorator

use super::log_record::LogRecord;
use super::writer::LogWriter;

/// A [`LogWriter`] that broadcasts every record to an ordered list of child
/// writers.
///
/// Children receive the identical record in sequence order. Each child call
/// is isolated with `catch_unwind`, so a panicking child cannot prevent the
/// remaining children from receiving the record.
///
/// ```
/// use composite_logger::prelude::*;
///
/// let writer = ForkWriter::new(vec![
///     Box::new(NullWriter.format(LogFormatter::full())),
///     Box::new(NullWriter.filter_level(LogLevel::Warning)),
/// ]);
/// ```
#[derive(Default)]
pub struct ForkWriter {
    writers: Vec<Box<dyn LogWriter>>,
}

impl ForkWriter {
    pub fn new(writers: Vec<Box<dyn LogWriter>>) -> Self {
        Self { writers }
    }

    /// A fork with no children; records are accepted and go nowhere.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append another child writer to the fan-out order.
    pub fn push<W: LogWriter + 'static>(&mut self, writer: W) {
        self.writers.push(Box::new(writer));
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl LogWriter for ForkWriter {
    fn deliver(&self, record: &LogRecord) {
        for (idx, writer) in self.writers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                writer.deliver(record);
            }));

            if let Err(panic_info) = result {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Fork child #{} panicked: {}. \
                     Other children continue to function.",
                    idx, panic_msg
                );
            }
        }
    }
}
