//! Error module for the prefix heap crate.
//!
//! Each collection owns its own error enum next to its implementation; this
//! module ties them together with configuration and I/O failures into a
//! single crate-level error, and provides context-carrying error reporting
//! routed through `tracing`.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

use crate::data_structures::lanai_trie::LanaiTrieError;
use crate::data_structures::molokai_heap::MolokaiHeapError;

pub mod config;

/// Result type alias used throughout the crate.
pub type PrefixHeapResult<T> = Result<T, PrefixHeapError>;

/// Core error enum for the crate.
#[derive(Error, Debug)]
pub enum PrefixHeapError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the prefix trie.
    #[error("Trie error: {0}")]
    Trie(#[from] LanaiTrieError),

    /// Errors raised by the binary heap.
    #[error("Heap error: {0}")]
    Heap(#[from] MolokaiHeapError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: PrefixHeapError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: PrefixHeapError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter: Send + Sync {
    /// Report an error with context.
    fn report(&self, context: &ErrorContext);
}

/// Error reporter that logs errors using the tracing framework.
#[derive(Default, Debug, Clone, Copy)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Process-wide reporter; `None` until [`set_error_reporter`] is called.
static ERROR_REPORTER: Lazy<RwLock<Option<Arc<dyn ErrorReporter>>>> =
    Lazy::new(|| RwLock::new(None));

/// Set the global error reporter, replacing any previous one.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    *ERROR_REPORTER.write() = Some(reporter);
}

/// Report an error through the global reporter.
///
/// Falls back to standard error output when no reporter has been set.
pub fn report_error(context: ErrorContext) {
    match ERROR_REPORTER.read().as_ref() {
        Some(reporter) => reporter.report(&context),
        None => eprintln!("Error: {context}"),
    }
}
