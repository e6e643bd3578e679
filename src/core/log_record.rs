//! Log record structure

use super::log_level::LogLevel;
use serde::Serialize;

/// A record of the details to be logged.
///
/// All details are carried through the whole writer chain so that
/// formatting, filtering, and fan-out can each act on the original event in
/// isolation. Records are immutable: decorators that change a record (the
/// format decorator rewrites `formatted`) produce a new record via the
/// consuming `with_*` methods and leave the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Raw message to log
    pub message: String,
    /// Severity of the message
    pub level: LogLevel,
    /// Optional category tag
    pub category: Option<String>,
    /// Originating source file
    pub file: &'static str,
    /// Originating source line
    pub line: u32,
    /// Rendered text a sink should emit. Defaults to `message`, so every
    /// record is renderable from the moment it is constructed.
    pub formatted: String,
}

impl LogRecord {
    pub fn new(
        message: impl Into<String>,
        level: LogLevel,
        category: Option<String>,
        file: &'static str,
        line: u32,
    ) -> Self {
        let message = message.into();
        Self {
            formatted: message.clone(),
            message,
            level,
            category,
            file,
            line,
        }
    }

    /// Construct a record with an explicit pre-rendered text.
    pub fn with_formatted_text(
        message: impl Into<String>,
        level: LogLevel,
        category: Option<String>,
        file: &'static str,
        line: u32,
        formatted: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            level,
            category,
            file,
            line,
            formatted: formatted.into(),
        }
    }

    /// Replace the raw message, keeping every other field.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Replace the level, keeping every other field.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Replace the category, keeping every other field.
    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Replace the call-site origin, keeping every other field.
    #[must_use]
    pub fn with_origin(mut self, file: &'static str, line: u32) -> Self {
        self.file = file;
        self.line = line;
        self
    }

    /// Replace the rendered text, keeping every other field.
    #[must_use]
    pub fn with_formatted(mut self, formatted: impl Into<String>) -> Self {
        self.formatted = formatted.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> LogRecord {
        LogRecord::new("Message", LogLevel::Info, Some("NET".into()), "a/b.rs", 7)
    }

    #[test]
    fn test_formatted_defaults_to_message() {
        let record = record();
        assert_eq!(record.formatted, record.message);
    }

    #[test]
    fn test_explicit_formatted_text() {
        let record = LogRecord::with_formatted_text(
            "Message",
            LogLevel::Debug,
            None,
            "b.rs",
            1,
            "rendered",
        );
        assert_eq!(record.message, "Message");
        assert_eq!(record.formatted, "rendered");
    }

    #[test]
    fn test_clone_is_structurally_equal() {
        let record = record();
        assert_eq!(record.clone(), record);
    }

    #[test]
    fn test_override_changes_only_that_field() {
        let original = record();
        let updated = original.clone().with_formatted("new text");

        assert_eq!(updated.formatted, "new text");
        assert_eq!(updated.message, original.message);
        assert_eq!(updated.level, original.level);
        assert_eq!(updated.category, original.category);
        assert_eq!(updated.file, original.file);
        assert_eq!(updated.line, original.line);
        assert_ne!(updated, original);
    }

    #[test]
    fn test_override_each_field() {
        let original = record();

        assert_eq!(original.clone().with_level(LogLevel::Fatal).level, LogLevel::Fatal);
        assert_eq!(original.clone().with_message("other").message, "other");
        assert_eq!(original.clone().with_category(None).category, None);

        let moved = original.with_origin("c.rs", 99);
        assert_eq!((moved.file, moved.line), ("c.rs", 99));
    }
}
