//! Top-level error wrapper types.

use crate::{ConfigError, FileError, ServiceError, ValidationError};

/// The foundation error enum for the Scrivano workspace.
///
/// Callers branch on the kind, not on type identity.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ConfigError, ScrivanoError};
///
/// let cfg_err = ConfigError::new("missing cta list");
/// let err: ScrivanoError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScrivanoErrorKind {
    /// Missing or malformed configuration entry
    #[from(ConfigError)]
    Config(ConfigError),
    /// Prompt-construction or output-validation failure
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Generation-service failure
    #[from(ServiceError)]
    Service(ServiceError),
    /// Persistence failure
    #[from(FileError)]
    File(FileError),
}

/// Scrivano error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ConfigError, ScrivanoResult};
///
/// fn might_fail() -> ScrivanoResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scrivano Error: {}", _0)]
pub struct ScrivanoError(Box<ScrivanoErrorKind>);

impl ScrivanoError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivanoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivanoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScrivanoErrorKind
impl<T> From<T> for ScrivanoError
where
    T: Into<ScrivanoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivano operations.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ScrivanoResult, ServiceError, ServiceErrorKind};
///
/// fn call_service() -> ScrivanoResult<String> {
///     Err(ServiceError::new(ServiceErrorKind::Network, "connection reset"))?
/// }
/// ```
pub type ScrivanoResult<T> = std::result::Result<T, ScrivanoError>;
