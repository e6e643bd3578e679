//! Terminal sink implementations

#[cfg(feature = "console")]
pub mod console;

#[cfg(feature = "file")]
pub mod file;

#[cfg(feature = "platform")]
pub mod platform;

#[cfg(feature = "async-writers")]
pub mod tokio_file;

#[cfg(feature = "console")]
pub use console::ConsoleWriter;

#[cfg(feature = "file")]
pub use file::FileWriter;

#[cfg(feature = "platform")]
pub use platform::{PlatformLog, PlatformSeverity, PlatformWriter};

#[cfg(feature = "async-writers")]
pub use tokio_file::TokioFileWriter;

// Re-export the capability trait alongside its implementations
pub use crate::core::LogWriter;
