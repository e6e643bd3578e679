//! # Composite Logger
//!
//! A composable Rust logging pipeline: interchangeable writers that accept a
//! structured log record, optionally transform or filter it, and deliver it
//! to one or more sinks.
//!
//! ## Features
//!
//! - **One capability**: sinks, decorators, and whole pipelines all
//!   implement [`LogWriter`], so composition is recursive
//! - **Chainable decorators**: level and category filters, pluggable
//!   formatters, fan-out to multiple writers
//! - **Multiple sinks**: console, fire-and-forget file, platform syslog
//! - **Never in the way**: delivery swallows sink failures and a facade
//!   with no writer bound is a no-op, so logging cannot crash the caller

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        Clock, FilterWriter, ForkWriter, FormatWriter, LogFormatter, LogLevel, LogRecord,
        LogWriter, LoggerError, NullWriter, Result, StaticLogger, SystemClock,
    };
    #[cfg(feature = "console")]
    pub use crate::writers::ConsoleWriter;
    #[cfg(feature = "file")]
    pub use crate::writers::FileWriter;
    #[cfg(feature = "platform")]
    pub use crate::writers::{PlatformLog, PlatformSeverity, PlatformWriter};
    #[cfg(feature = "async-writers")]
    pub use crate::writers::TokioFileWriter;
}

pub use crate::core::{
    Clock, FilterWriter, ForkWriter, FormatWriter, LogFormatter, LogLevel, LogRecord, LogWriter,
    LoggerError, NullWriter, Result, StaticLogger, SystemClock,
};
#[cfg(feature = "console")]
pub use crate::writers::ConsoleWriter;
#[cfg(feature = "file")]
pub use crate::writers::FileWriter;
#[cfg(feature = "platform")]
pub use crate::writers::{PlatformLog, PlatformSeverity, PlatformWriter};
#[cfg(feature = "async-writers")]
pub use crate::writers::TokioFileWriter;
