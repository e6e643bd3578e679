//! Process-wide logging facade

use super::clock::{Clock, SystemClock};
use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::writer::LogWriter;
use parking_lot::RwLock;
use std::panic::Location;
use std::sync::{Arc, OnceLock};

struct Binding {
    writer: Option<Arc<dyn LogWriter>>,
    category: Option<String>,
    clock: Arc<dyn Clock>,
}

/// Simplified access to the pipeline via a rebindable writer and a default
/// category.
///
/// While no writer is bound, every logging call is a no-op; logging is never
/// an error. The writer, default category, and clock are all replaceable at
/// runtime; the last assignment wins. Rebinding while other threads are
/// logging is an accepted race: a call that raced a rebind may finish
/// delivering to the previously bound writer.
///
/// Example usage:
///
/// ```
/// use composite_logger::prelude::*;
///
/// let log = StaticLogger::new();
/// log.set_writer(ConsoleWriter::new().format(LogFormatter::simple()));
/// log.info("Reached checkpoint");
/// ```
///
/// To log to both a file and the console at different levels and formats:
///
/// ```no_run
/// use composite_logger::prelude::*;
///
/// let log = StaticLogger::global();
/// log.set_writer(ForkWriter::new(vec![
///     Box::new(FileWriter::new("app.log").format(LogFormatter::full())),
///     Box::new(
///         ConsoleWriter::new()
///             .format(LogFormatter::simple())
///             .filter_level(LogLevel::Warning),
///     ),
/// ]));
/// ```
#[derive(Clone)]
pub struct StaticLogger {
    binding: Arc<RwLock<Binding>>,
}

impl StaticLogger {
    /// A facade with no writer bound and no default category.
    pub fn new() -> Self {
        Self {
            binding: Arc::new(RwLock::new(Binding {
                writer: None,
                category: None,
                clock: Arc::new(SystemClock),
            })),
        }
    }

    /// The process-wide facade instance.
    pub fn global() -> &'static StaticLogger {
        static GLOBAL: OnceLock<StaticLogger> = OnceLock::new();
        GLOBAL.get_or_init(StaticLogger::new)
    }

    /// Bind the writer all subsequent calls deliver to.
    pub fn set_writer<W: LogWriter + 'static>(&self, writer: W) {
        self.binding.write().writer = Some(Arc::new(writer));
    }

    /// Unbind the writer; subsequent calls become no-ops.
    pub fn clear_writer(&self) {
        self.binding.write().writer = None;
    }

    /// Set the category applied to records logged without an explicit one.
    pub fn set_category(&self, category: impl Into<String>) {
        self.binding.write().category = Some(category.into());
    }

    pub fn clear_category(&self) {
        self.binding.write().category = None;
    }

    /// Replace the time source used by [`StaticLogger::time`].
    pub fn set_clock<C: Clock + 'static>(&self, clock: C) {
        self.binding.write().clock = Arc::new(clock);
    }

    /// Log `message` at `level` with the default category.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let location = Location::caller();
        self.dispatch(level, None, message.into(), location.file(), location.line());
    }

    /// Log `message` at `level` under an explicit category, overriding the
    /// default.
    #[track_caller]
    pub fn log_in(&self, level: LogLevel, category: impl Into<String>, message: impl Into<String>) {
        let location = Location::caller();
        self.dispatch(
            level,
            Some(category.into()),
            message.into(),
            location.file(),
            location.line(),
        );
    }

    /// Log a message at [`LogLevel::Trace`].
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        let location = Location::caller();
        self.dispatch(
            LogLevel::Trace,
            None,
            message.into(),
            location.file(),
            location.line(),
        );
    }

    /// Log a message at [`LogLevel::Debug`].
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        let location = Location::caller();
        self.dispatch(
            LogLevel::Debug,
            None,
            message.into(),
            location.file(),
            location.line(),
        );
    }

    /// Log a message at [`LogLevel::Info`].
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        let location = Location::caller();
        self.dispatch(
            LogLevel::Info,
            None,
            message.into(),
            location.file(),
            location.line(),
        );
    }

    /// Log a message at [`LogLevel::Warning`].
    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        let location = Location::caller();
        self.dispatch(
            LogLevel::Warning,
            None,
            message.into(),
            location.file(),
            location.line(),
        );
    }

    /// Log a message at [`LogLevel::Error`].
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        let location = Location::caller();
        self.dispatch(
            LogLevel::Error,
            None,
            message.into(),
            location.file(),
            location.line(),
        );
    }

    /// Log a message at [`LogLevel::Fatal`].
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        let location = Location::caller();
        self.dispatch(
            LogLevel::Fatal,
            None,
            message.into(),
            location.file(),
            location.line(),
        );
    }

    /// Execute `block`, bracketing it with trace-level `Enter`/`Exit`
    /// messages.
    ///
    /// The `Exit` message is emitted from a drop guard, so it fires even
    /// when the block panics; the block's outcome, value or panic,
    /// propagates to the caller unchanged.
    #[track_caller]
    pub fn scope<T>(&self, name: &str, block: impl FnOnce() -> T) -> T {
        let location = Location::caller();
        self.dispatch(
            LogLevel::Trace,
            None,
            format!("Enter {}", name),
            location.file(),
            location.line(),
        );

        let _guard = ExitGuard {
            logger: self.clone(),
            message: format!("Exit {}", name),
            file: location.file(),
            line: location.line(),
        };

        block()
    }

    /// Execute and time `block`, bracketing it like
    /// [`StaticLogger::scope`]; the `Exit` message carries the elapsed
    /// wall-clock milliseconds measured with the bound clock.
    #[track_caller]
    pub fn time<T>(&self, name: &str, block: impl FnOnce() -> T) -> T {
        let location = Location::caller();
        let clock = self.binding.read().clock.clone();
        let start = clock.now();

        self.dispatch(
            LogLevel::Trace,
            None,
            format!("Enter {}", name),
            location.file(),
            location.line(),
        );

        let _guard = TimedExitGuard {
            logger: self.clone(),
            name: name.to_string(),
            clock,
            start,
            file: location.file(),
            line: location.line(),
        };

        block()
    }

    fn dispatch(
        &self,
        level: LogLevel,
        category: Option<String>,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let (writer, category) = {
            let binding = self.binding.read();
            let category = category.or_else(|| binding.category.clone());
            (binding.writer.clone(), category)
        };

        if let Some(writer) = writer {
            writer.deliver(&LogRecord::new(message, level, category, file, line));
        }
    }
}

impl Default for StaticLogger {
    fn default() -> Self {
        Self::new()
    }
}

struct ExitGuard {
    logger: StaticLogger,
    message: String,
    file: &'static str,
    line: u32,
}

impl Drop for ExitGuard {
    fn drop(&mut self) {
        let message = std::mem::take(&mut self.message);
        // This may run during unwinding; a panicking writer must not abort.
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.logger
                .dispatch(LogLevel::Trace, None, message, self.file, self.line);
        }));
    }
}

struct TimedExitGuard {
    logger: StaticLogger,
    name: String,
    clock: Arc<dyn Clock>,
    start: chrono::DateTime<chrono::Utc>,
    file: &'static str,
    line: u32,
}

impl Drop for TimedExitGuard {
    fn drop(&mut self) {
        let elapsed = self.clock.now() - self.start;
        let millis = elapsed
            .num_microseconds()
            .map(|us| (us as f64 / 1000.0).round() as i64)
            .unwrap_or_else(|| elapsed.num_milliseconds());
        let message = format!("Exit {}: {}ms", self.name, millis);

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.logger
                .dispatch(LogLevel::Trace, None, message, self.file, self.line);
        }));
    }
}
