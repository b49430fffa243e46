//! Persistence error types.
//!
//! Each kind names the step of the save protocol that failed, so a caller
//! can tell a refused backup apart from a failed rename. Because `save` is
//! idempotent with respect to the final target state, every `FileError` is
//! safe to retry.

/// Kinds of persistence errors, one per save-protocol step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FileErrorKind {
    /// Failed to create an output or backup directory
    #[display("directory creation failed: {}", _0)]
    DirectoryCreation(String),
    /// Failed to copy the prior artifact to the backup location
    #[display("backup copy failed: {}", _0)]
    Backup(String),
    /// Failed to serialize content to its on-disk form
    #[display("serialization failed: {}", _0)]
    Serialize(String),
    /// Failed to write the temporary file
    #[display("temp write failed: {}", _0)]
    TempWrite(String),
    /// Failed to rename the temporary file over the target
    #[display("rename failed: {}", _0)]
    Rename(String),
    /// Written bytes did not match the computed checksum
    #[display("post-write verification failed: {}", _0)]
    Verify(String),
    /// Failed to append a record to the backup log
    #[display("backup log append failed: {}", _0)]
    LogAppend(String),
    /// Failed to remove stale temporary files
    #[display("temp cleanup failed: {}", _0)]
    Cleanup(String),
}

impl FileErrorKind {
    /// Name of the save-protocol step this kind belongs to.
    pub fn step(&self) -> &'static str {
        match self {
            FileErrorKind::DirectoryCreation(_) => "directory_creation",
            FileErrorKind::Backup(_) => "backup",
            FileErrorKind::Serialize(_) => "serialize",
            FileErrorKind::TempWrite(_) => "temp_write",
            FileErrorKind::Rename(_) => "rename",
            FileErrorKind::Verify(_) => "verify",
            FileErrorKind::LogAppend(_) => "log_append",
            FileErrorKind::Cleanup(_) => "cleanup",
        }
    }
}

/// Persistence error with location tracking.
///
/// # Examples
///
/// ```
/// use scrivano_error::{FileError, FileErrorKind};
///
/// let err = FileError::new(FileErrorKind::Rename("permission denied".into()));
/// assert_eq!(err.kind.step(), "rename");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("File Error: {} at line {} in {}", kind, line, file)]
pub struct FileError {
    /// The kind of error that occurred
    pub kind: FileErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FileError {
    /// Create a new file error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FileErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
