//! Atomic artifact persistence for Scrivano.
//!
//! Validated content is serialized to a content-type-specific directory
//! using a backup-then-temp-then-rename protocol, so a reader never
//! observes a half-written artifact and a failed save never disturbs the
//! prior one. Every save appends one record to an append-only backup log.
//!
//! # Example
//!
//! ```rust
//! use scrivano_core::{ContentBody, ContentMetadata, ContentType, GeneratedContent};
//! use scrivano_storage::OutputManager;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = OutputManager::new("/tmp/scrivano/output")?;
//! let content = GeneratedContent::new(
//!     ContentType::Text,
//!     "rust in production",
//!     ContentBody::Text("Shipping Rust taught us three things...".to_string()),
//!     ContentMetadata::now(None, vec![]),
//! );
//!
//! let artifact = manager.save(&content, "/tmp/scrivano/backups").await?;
//! assert!(artifact.primary_path().exists());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod manager;
mod paths;
mod render;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

pub use manager::OutputManager;
pub use paths::slugify;
pub use render::render_artifact;
pub use scrivano_error::{FileError, FileErrorKind};

/// The on-disk representation of one saved content artifact.
///
/// Later saves of the same logical content supersede the artifact; nothing
/// ever mutates an existing one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct OutputArtifact {
    /// Final artifact location under the output root
    primary_path: PathBuf,
    /// Where the prior artifact was copied, when one existed
    backup_path: Option<PathBuf>,
    /// SHA-256 of the serialized artifact
    checksum: String,
}

impl OutputArtifact {
    pub(crate) fn new(
        primary_path: PathBuf,
        backup_path: Option<PathBuf>,
        checksum: String,
    ) -> Self {
        Self {
            primary_path,
            backup_path,
            checksum,
        }
    }
}

/// One entry of the append-only backup log.
///
/// A record is appended per save operation; the log is never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct BackupRecord {
    /// Unique id for this save operation
    id: Uuid,
    /// The artifact path the save targeted
    original_path: PathBuf,
    /// Where the prior artifact was copied, when one existed
    backup_path: Option<PathBuf>,
    /// When the record was appended
    timestamp: DateTime<Utc>,
    /// SHA-256 of the serialized artifact
    checksum: String,
}

impl BackupRecord {
    pub(crate) fn new(
        original_path: PathBuf,
        backup_path: Option<PathBuf>,
        checksum: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_path,
            backup_path,
            timestamp: Utc::now(),
            checksum,
        }
    }
}
