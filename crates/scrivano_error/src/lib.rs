//! Error types for the Scrivano content pipeline.
//!
//! This crate provides the foundation error types used throughout the
//! Scrivano workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean
//! error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! There is no generic catch-all: every fallible operation in the pipeline
//! surfaces exactly one of `ConfigError`, `ValidationError`, `ServiceError`,
//! or `FileError`.
//!
//! # Examples
//!
//! ```
//! use scrivano_error::{ConfigError, ScrivanoResult};
//!
//! fn load_section() -> ScrivanoResult<String> {
//!     Err(ConfigError::new("missing [templates] section"))?
//! }
//!
//! match load_section() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod file;
mod service;
mod validation;

pub use config::ConfigError;
pub use error::{ScrivanoError, ScrivanoErrorKind, ScrivanoResult};
pub use file::{FileError, FileErrorKind};
pub use service::{RetryableError, ServiceError, ServiceErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
