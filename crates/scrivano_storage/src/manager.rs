//! The output manager and its save protocol.

use crate::{BackupRecord, OutputArtifact, paths, render_artifact, slugify};
use chrono::Utc;
use scrivano_core::GeneratedContent;
use scrivano_error::{FileError, FileErrorKind, ScrivanoResult};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Filename of the append-only backup log under the backup root.
const BACKUP_LOG: &str = "backup_log.jsonl";

/// Persists validated content atomically.
///
/// The save protocol, in order:
///
/// 1. Compute the target path from the content type's directory and a
///    deterministic filename (topic slug + `generated_at` timestamp).
/// 2. If a file already exists at the target, copy it into the backup
///    root first. This is the recovery point; a failed copy aborts the
///    save before the original is put at risk.
/// 3. Serialize to a `.tmp` file in the target directory and verify its
///    checksum.
/// 4. Replace the target with a single rename, so a reader never observes
///    a half-written artifact.
/// 5. Append one [`BackupRecord`] to the backup log.
///
/// Overlapping saves to the same target are serialized by a per-path
/// mutex; log appends go through a dedicated single-writer lock. The
/// manager never calls the generation service, so no lock is ever held
/// across that boundary.
///
/// `save` is idempotent with respect to the final state: re-running it
/// with identical content produces the same target bytes and a fresh log
/// record, never a duplicate corruption.
pub struct OutputManager {
    output_root: PathBuf,
    path_locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
    log_lock: Mutex<()>,
}

impl OutputManager {
    /// Create an output manager rooted at `output_root`.
    ///
    /// Creates the root directory and sweeps `.tmp` files left behind by
    /// interrupted saves.
    ///
    /// # Errors
    ///
    /// Returns `FileError` if the root cannot be created or stale
    /// temporaries cannot be removed.
    #[tracing::instrument(skip(output_root))]
    pub fn new(output_root: impl Into<PathBuf>) -> ScrivanoResult<Self> {
        let output_root = output_root.into();
        std::fs::create_dir_all(&output_root).map_err(|e| {
            FileError::new(FileErrorKind::DirectoryCreation(format!(
                "{}: {}",
                output_root.display(),
                e
            )))
        })?;
        sweep_temp_files(&output_root)?;

        tracing::info!(path = %output_root.display(), "output manager ready");
        Ok(Self {
            output_root,
            path_locks: Mutex::new(HashMap::new()),
            log_lock: Mutex::new(()),
        })
    }

    /// Save content and return the resulting artifact.
    ///
    /// # Errors
    ///
    /// Returns `FileError` naming the failed step. Every step is safe to
    /// retry by calling `save` again.
    #[tracing::instrument(
        skip(self, content, backup_root),
        fields(content_type = %content.content_type(), topic = %content.topic())
    )]
    pub async fn save(
        &self,
        content: &GeneratedContent,
        backup_root: impl AsRef<Path>,
    ) -> ScrivanoResult<OutputArtifact> {
        let backup_root = backup_root.as_ref();
        let target = paths::target_path(&self.output_root, content);

        let path_lock = self.path_lock(&target).await;
        let _guard = path_lock.lock().await;

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                FileError::new(FileErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let backup_path = backup_existing(&target, content, backup_root).await?;

        let serialized = render_artifact(content)?;
        let checksum = format!("{:x}", Sha256::digest(serialized.as_bytes()));
        let temp = temp_path(&target);
        if let Err(e) = tokio::fs::write(&temp, &serialized).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(FileError::new(FileErrorKind::TempWrite(format!(
                "{}: {}",
                temp.display(),
                e
            )))
            .into());
        }
        verify_temp(&temp, &checksum).await?;

        if let Err(e) = tokio::fs::rename(&temp, &target).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(FileError::new(FileErrorKind::Rename(format!(
                "rename {} to {}: {}",
                temp.display(),
                target.display(),
                e
            )))
            .into());
        }

        let record = BackupRecord::new(target.clone(), backup_path.clone(), checksum.clone());
        self.append_record(backup_root, &record).await?;

        tracing::info!(
            path = %target.display(),
            backed_up = backup_path.is_some(),
            "saved artifact"
        );
        Ok(OutputArtifact::new(target, backup_path, checksum))
    }

    /// Read every record from a backup log, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `FileError` if the log exists but cannot be read or parsed.
    pub async fn read_log(backup_root: impl AsRef<Path>) -> ScrivanoResult<Vec<BackupRecord>> {
        let path = backup_root.as_ref().join(BACKUP_LOG);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(Vec::new());
        }
        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            FileError::new(FileErrorKind::LogAppend(format!("{}: {}", path.display(), e)))
        })?;
        let mut records = Vec::new();
        for line in raw.lines().filter(|l| !l.trim().is_empty()) {
            let record: BackupRecord = serde_json::from_str(line).map_err(|e| {
                FileError::new(FileErrorKind::LogAppend(format!(
                    "malformed record in {}: {}",
                    path.display(),
                    e
                )))
            })?;
            records.push(record);
        }
        Ok(records)
    }

    async fn path_lock(&self, target: &Path) -> Arc<Mutex<()>> {
        let mut locks = self.path_locks.lock().await;
        locks
            .entry(target.to_path_buf())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn append_record(
        &self,
        backup_root: &Path,
        record: &BackupRecord,
    ) -> ScrivanoResult<()> {
        let _guard = self.log_lock.lock().await;
        tokio::fs::create_dir_all(backup_root).await.map_err(|e| {
            FileError::new(FileErrorKind::LogAppend(format!(
                "{}: {}",
                backup_root.display(),
                e
            )))
        })?;
        let mut line = serde_json::to_string(record)
            .map_err(|e| FileError::new(FileErrorKind::LogAppend(e.to_string())))?;
        line.push('\n');

        let path = backup_root.join(BACKUP_LOG);
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| {
                FileError::new(FileErrorKind::LogAppend(format!("{}: {}", path.display(), e)))
            })?;
        file.write_all(line.as_bytes()).await.map_err(|e| {
            FileError::new(FileErrorKind::LogAppend(format!("{}: {}", path.display(), e)))
        })?;
        file.flush().await.map_err(|e| {
            FileError::new(FileErrorKind::LogAppend(format!("{}: {}", path.display(), e)))
        })?;
        Ok(())
    }
}

/// Copy the existing target into the backup root, when one exists.
///
/// The copy happens before anything touches the target; a failure here
/// aborts the whole save with the original intact.
async fn backup_existing(
    target: &Path,
    content: &GeneratedContent,
    backup_root: &Path,
) -> ScrivanoResult<Option<PathBuf>> {
    if !tokio::fs::try_exists(target).await.unwrap_or(false) {
        return Ok(None);
    }

    let backup_dir = backup_root.join(content.content_type().dir_name());
    tokio::fs::create_dir_all(&backup_dir).await.map_err(|e| {
        FileError::new(FileErrorKind::Backup(format!(
            "{}: {}",
            backup_dir.display(),
            e
        )))
    })?;

    // Millisecond stamp keeps successive backups of the same target apart.
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3f").to_string();
    let backup_path = backup_dir.join(format!("{}-{}.bak", slugify(content.topic()), stamp));
    tokio::fs::copy(target, &backup_path).await.map_err(|e| {
        FileError::new(FileErrorKind::Backup(format!(
            "copy {} to {}: {}",
            target.display(),
            backup_path.display(),
            e
        )))
    })?;

    tracing::debug!(backup = %backup_path.display(), "backed up prior artifact");
    Ok(Some(backup_path))
}

/// Re-read the temp file and confirm its checksum before the rename.
async fn verify_temp(temp: &Path, checksum: &str) -> ScrivanoResult<()> {
    match tokio::fs::read(temp).await {
        Ok(bytes) if format!("{:x}", Sha256::digest(&bytes)) == checksum => Ok(()),
        Ok(_) => {
            let _ = tokio::fs::remove_file(temp).await;
            Err(FileError::new(FileErrorKind::Verify(format!(
                "checksum mismatch for {}",
                temp.display()
            )))
            .into())
        }
        Err(e) => {
            let _ = tokio::fs::remove_file(temp).await;
            Err(FileError::new(FileErrorKind::Verify(format!(
                "{}: {}",
                temp.display(),
                e
            )))
            .into())
        }
    }
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "artifact".to_string());
    name.push_str(".tmp");
    target.with_file_name(name)
}

/// Remove `.tmp` files left by interrupted saves.
///
/// Walks the output root one content-type directory deep, matching the
/// `<output_root>/<content_type>/<file>` layout.
fn sweep_temp_files(output_root: &Path) -> Result<(), FileError> {
    let entries = std::fs::read_dir(output_root)
        .map_err(|e| FileError::new(FileErrorKind::Cleanup(format!("{}: {}", output_root.display(), e))))?;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let files = std::fs::read_dir(&path)
            .map_err(|e| FileError::new(FileErrorKind::Cleanup(format!("{}: {}", path.display(), e))))?;
        for file in files.flatten() {
            let file_path = file.path();
            if file_path.extension().is_some_and(|ext| ext == "tmp") {
                std::fs::remove_file(&file_path).map_err(|e| {
                    FileError::new(FileErrorKind::Cleanup(format!(
                        "{}: {}",
                        file_path.display(),
                        e
                    )))
                })?;
                tracing::warn!(path = %file_path.display(), "removed stale temp file");
            }
        }
    }
    Ok(())
}
