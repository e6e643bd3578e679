//! Tokio-backed file writer for async applications

use crate::core::{LoggerError, LogRecord, LogWriter, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::runtime::Handle;

/// Same terminator as the thread-backed file writer: newline then carriage
/// return, in that order, on purpose.
const LINE_TERMINATOR: &[u8] = b"\n\r";

/// A [`LogWriter`] that appends records to a file from detached tokio
/// tasks.
///
/// The runtime handle is captured at construction, so the writer must be
/// created inside a tokio runtime. Each `deliver` spawns an independent
/// task performing the open/append/close sequence; tasks outlive the
/// emitting caller and their failures are reported on stderr only.
///
/// Two concurrent deliveries may append in unspecified order; the sink is
/// append-only and best-effort by design.
pub struct TokioFileWriter {
    path: PathBuf,
    handle: Handle,
}

impl TokioFileWriter {
    /// # Errors
    ///
    /// Returns [`LoggerError::NoRuntime`] when called outside a tokio
    /// runtime.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let handle =
            Handle::try_current().map_err(|_| LoggerError::no_runtime("TokioFileWriter"))?;

        Ok(Self {
            path: path.into(),
            handle,
        })
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn append_record(path: &Path, payload: &str) -> std::io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;

    file.write_all(payload.as_bytes()).await?;
    file.write_all(LINE_TERMINATOR).await?;
    file.flush().await
}

impl LogWriter for TokioFileWriter {
    fn deliver(&self, record: &LogRecord) {
        let path = self.path.clone();
        let payload = record.formatted.clone();

        self.handle.spawn(async move {
            if let Err(e) = append_record(&path, &payload).await {
                eprintln!(
                    "[LOGGER ERROR] Failed to append to '{}': {}",
                    path.display(),
                    e
                );
            }
        });
    }
}
