//! Validation error types.
//!
//! Each kind names the failing field and carries the expected vs. actual
//! value, so callers can report exactly which structural rule broke without
//! re-inspecting the content.

/// Kinds of validation errors.
///
/// Covers both prompt construction (empty topic, bad structural parameter)
/// and output validation (shape mismatches against a content type spec).
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Topic is empty or whitespace-only
    #[display("topic must not be empty or whitespace-only")]
    EmptyTopic,
    /// A structural parameter resolved to a non-positive value
    #[display("{} must be positive, got {}", field, value)]
    NonPositiveParameter {
        /// Name of the offending parameter
        field: String,
        /// The resolved value
        value: i64,
    },
    /// Body shape does not match the content type
    #[display("expected {} body, got {}", expected, actual)]
    BodyShape {
        /// Shape the content type requires
        expected: String,
        /// Shape the service returned
        actual: String,
    },
    /// Generated body is empty
    #[display("{} body must not be empty", field)]
    EmptyBody {
        /// Name of the empty field
        field: String,
    },
    /// Generated text exceeds the per-type length cap
    #[display("body length {} exceeds maximum of {} characters", actual, max)]
    BodyTooLong {
        /// Maximum allowed characters
        max: usize,
        /// Actual character count
        actual: usize,
    },
    /// Section count does not match the configured value
    #[display("{}: expected {} sections, got {}", field, expected, actual)]
    SectionCount {
        /// Name of the section list (e.g. "slides")
        field: String,
        /// Expected section count
        expected: usize,
        /// Actual section count
        actual: usize,
    },
    /// A section has no content
    #[display("section '{}' is empty", name)]
    EmptySection {
        /// Heading of the empty section
        name: String,
    },
    /// Poll option count outside the allowed range
    #[display("poll options: expected between {} and {}, got {}", min, max, actual)]
    OptionCount {
        /// Minimum allowed options
        min: usize,
        /// Maximum allowed options
        max: usize,
        /// Actual option count
        actual: usize,
    },
    /// Two poll options compare equal case-insensitively
    #[display("duplicate poll option '{}'", option)]
    DuplicateOption {
        /// The duplicated option text
        option: String,
    },
    /// A required section is absent
    #[display("missing required section '{}'", name)]
    MissingSection {
        /// Heading of the missing section
        name: String,
    },
    /// Sections present but not in the required order
    #[display("section order: expected '{}', got '{}'", expected, actual)]
    SectionOrder {
        /// Heading expected at this position
        expected: String,
        /// Heading actually found
        actual: String,
    },
    /// A video script section has no timing window
    #[display("section '{}' has no timing window", name)]
    MissingTiming {
        /// Heading of the untimed section
        name: String,
    },
    /// Gap between consecutive timing windows
    #[display("timing gap at {} seconds", at_seconds)]
    TimingGap {
        /// Second at which coverage stops
        at_seconds: u32,
    },
    /// Overlap between consecutive timing windows
    #[display("timing overlap at {} seconds", at_seconds)]
    TimingOverlap {
        /// Second at which windows overlap
        at_seconds: u32,
    },
    /// Timings do not cover the configured duration
    #[display("timings cover {} seconds, expected {}", actual, expected)]
    DurationMismatch {
        /// Configured duration in seconds
        expected: u32,
        /// Seconds actually covered
        actual: u32,
    },
    /// Serialized content exceeds the storage size cap
    #[display("serialized content is {} bytes, cap is {}", actual_bytes, max_bytes)]
    OversizedContent {
        /// Maximum allowed serialized size
        max_bytes: usize,
        /// Actual serialized size
        actual_bytes: usize,
    },
}

/// Validation error with location tracking.
///
/// Validation reports the first failing rule only and never attempts
/// partial repair; the caller decides whether to regenerate.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyTopic);
/// assert!(format!("{}", err).contains("topic"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
