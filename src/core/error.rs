//! Error types for the logging pipeline
//!
//! Errors exist only inside sink boundaries and at pipeline construction
//! time. The `deliver` contract swallows every runtime failure, so nothing
//! here ever reaches a logging call site.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writer or sink backend error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// A tokio-backed writer was constructed outside a runtime
    #[error("No tokio runtime available for '{component}'")]
    NoRuntime { component: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a missing-runtime error
    pub fn no_runtime(component: impl Into<String>) -> Self {
        LoggerError::NoRuntime {
            component: component.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::writer("backend unavailable");
        assert!(matches!(err, LoggerError::WriterError(_)));

        let err = LoggerError::no_runtime("TokioFileWriter");
        assert!(matches!(err, LoggerError::NoRuntime { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::writer("backend unavailable");
        assert_eq!(err.to_string(), "Writer error: backend unavailable");

        let err = LoggerError::no_runtime("TokioFileWriter");
        assert_eq!(
            err.to_string(),
            "No tokio runtime available for 'TokioFileWriter'"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("appending log file", "cannot write to file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("appending log file"));
        assert!(err.to_string().contains("cannot write to file"));
    }
}
