//! Configuration error types.

/// Configuration error with source location.
///
/// Raised for missing or malformed configuration entries. Configuration
/// errors are fatal: they surface immediately and are never retried.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrivano_error::ConfigError;
    ///
    /// let err = ConfigError::new("missing primary_goal in [content_config]");
    /// assert!(err.message.contains("primary_goal"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
