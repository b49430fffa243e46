//! Generation-service error types and retry classification.

/// Failure kinds reported by the generation-service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ServiceErrorKind {
    /// Quota or rate limit exhausted
    #[display("quota exhausted")]
    Quota,
    /// Network-level failure reaching the service
    #[display("network failure")]
    Network,
    /// The service did not respond in time
    #[display("request timed out")]
    Timeout,
}

impl ServiceErrorKind {
    /// Check if this error kind should be retried by the caller.
    ///
    /// All three kinds are transient; the pipeline itself never retries
    /// them, it only classifies.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ServiceErrorKind::Quota | ServiceErrorKind::Network | ServiceErrorKind::Timeout
        )
    }

    /// Get retry strategy parameters for this error kind.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self {
            // Quota exhaustion needs patience, not persistence
            ServiceErrorKind::Quota => (5000, 3, 40),
            ServiceErrorKind::Network => (2000, 5, 60),
            ServiceErrorKind::Timeout => (2000, 4, 30),
        }
    }
}

/// Generation-service error with source location tracking.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ServiceError, ServiceErrorKind};
///
/// let err = ServiceError::new(ServiceErrorKind::Timeout, "no response after 30s");
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Service Error: {}: {} at line {} in {}", kind, message, line, file)]
pub struct ServiceError {
    /// The kind of error that occurred
    pub kind: ServiceErrorKind,
    /// Provider-supplied detail
    pub message: String,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServiceError {
    /// Create a new service error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// This trait lets error types specify whether they should trigger a retry
/// and what retry strategy parameters to use. The pipeline never retries
/// internally; callers consult this trait to drive their own backoff.
///
/// # Examples
///
/// ```
/// use scrivano_error::{RetryableError, ServiceError, ServiceErrorKind};
///
/// let err = ServiceError::new(ServiceErrorKind::Quota, "429 from provider");
/// assert!(err.is_retryable());
/// let (backoff, retries, max_delay) = err.retry_strategy_params();
/// assert_eq!(backoff, 5000);
/// assert_eq!(retries, 3);
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 5, 60)
    }
}

impl RetryableError for ServiceError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}
