//! Platform (syslog) writer implementation

use crate::core::{LoggerError, LogLevel, LogRecord, LogWriter, Result};
use parking_lot::Mutex;
use syslog::{Facility, Formatter3164};

/// Severity tiers of the host logging facility.
///
/// The platform has no fatal tier; [`LogLevel::Fatal`] maps to
/// [`PlatformSeverity::Critical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSeverity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

/// The host logging facility: accepts a rendered string plus a severity
/// tier. Injectable so tests can observe what would have been logged.
pub trait PlatformLog: Send + Sync {
    fn log(&self, severity: PlatformSeverity, message: &str) -> Result<()>;
}

/// A [`LogWriter`] that maps each record to the nearest platform severity
/// and delegates rendering and storage to the host facility.
///
/// Backend failures are reported on stderr and otherwise swallowed.
pub struct PlatformWriter {
    backend: Box<dyn PlatformLog>,
}

impl PlatformWriter {
    /// Connect to the local syslog daemon, tagging messages with `process`.
    ///
    /// # Errors
    ///
    /// Returns an error when the syslog socket cannot be opened.
    pub fn new(process: impl Into<String>) -> Result<Self> {
        let formatter = Formatter3164 {
            facility: Facility::LOG_USER,
            hostname: None,
            process: process.into(),
            pid: std::process::id(),
        };

        let logger = syslog::unix(formatter)
            .map_err(|e| LoggerError::writer(format!("cannot open syslog: {}", e)))?;

        Ok(Self {
            backend: Box::new(SyslogBackend {
                inner: Mutex::new(logger),
            }),
        })
    }

    /// Use a custom platform backend instead of the local syslog daemon.
    pub fn with_backend(backend: Box<dyn PlatformLog>) -> Self {
        Self { backend }
    }

    fn severity_for(level: LogLevel) -> PlatformSeverity {
        match level {
            LogLevel::Trace | LogLevel::Debug => PlatformSeverity::Debug,
            LogLevel::Info => PlatformSeverity::Info,
            LogLevel::Warning => PlatformSeverity::Warning,
            LogLevel::Error => PlatformSeverity::Error,
            LogLevel::Fatal => PlatformSeverity::Critical,
        }
    }
}

impl LogWriter for PlatformWriter {
    fn deliver(&self, record: &LogRecord) {
        let severity = Self::severity_for(record.level);
        if let Err(e) = self.backend.log(severity, &record.formatted) {
            eprintln!("[LOGGER ERROR] Platform log rejected record: {}", e);
        }
    }
}

struct SyslogBackend {
    inner: Mutex<syslog::Logger<syslog::LoggerBackend, Formatter3164>>,
}

impl PlatformLog for SyslogBackend {
    fn log(&self, severity: PlatformSeverity, message: &str) -> Result<()> {
        let mut logger = self.inner.lock();
        let outcome = match severity {
            PlatformSeverity::Debug => logger.debug(message),
            PlatformSeverity::Info => logger.info(message),
            PlatformSeverity::Warning => logger.warning(message),
            PlatformSeverity::Error => logger.err(message),
            PlatformSeverity::Critical => logger.crit(message),
        };
        outcome.map_err(|e| LoggerError::writer(format!("syslog: {}", e)))
    }
}
