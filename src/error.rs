//! Error handling for the acquisition pipeline
//!
//! This module defines the fatal error type used at initialization
//! boundaries and a Result alias for use throughout the crate.
//!
//! Recoverable, component-local failures have their own enums close to the
//! component that produces them: [`crate::codec::DecodeError`] for rejected
//! hex payloads and [`crate::acquisition::SourceError`] for per-cycle
//! acquisition failures. Those are absorbed where they occur; only
//! `TofLogError` is allowed to abort pipeline startup.

use thiserror::Error;

/// Main error type for pipeline operations
#[derive(Error, Debug)]
pub enum TofLogError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors from the frame source driver layer
    #[error("Frame source error: {0}")]
    Source(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from the CSV record store
    #[error("Record store error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<TofLogError>,
    },
}

impl TofLogError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        TofLogError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, TofLogError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| TofLogError::Io(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TofLogError::Io(e).with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TofLogError::Config("missing accepted_statuses".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: missing accepted_statuses"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = TofLogError::Source("sensor not responding".to_string());
        let with_ctx = err.with_context("Failed to start ranging");
        assert!(with_ctx.to_string().contains("Failed to start ranging"));
    }

    #[test]
    fn test_io_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = result.context("Failed to open replay log").unwrap_err();
        assert!(err.to_string().contains("Failed to open replay log"));
    }
}
