//! Artifact path construction.

use scrivano_core::GeneratedContent;
use std::path::{Path, PathBuf};

/// Create a filesystem-safe slug from free text.
///
/// Lowercases, maps every run of non-alphanumeric characters to a single
/// dash, and trims leading/trailing dashes. Empty input slugs to
/// `untitled`.
///
/// # Examples
///
/// ```
/// use scrivano_storage::slugify;
///
/// assert_eq!(slugify("Zero-Downtime  Migrations!"), "zero-downtime-migrations");
/// assert_eq!(slugify("???"), "untitled");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

/// Compute the target path for a content artifact.
///
/// Layout: `<output_root>/<content_type>/<slug>-<timestamp>.<ext>`.
///
/// The timestamp comes from the content's `generated_at` metadata, not the
/// wall clock at save time, so saving the same content twice targets the
/// same path and `save` stays idempotent.
pub(crate) fn target_path(output_root: &Path, content: &GeneratedContent) -> PathBuf {
    let stamp = content
        .metadata()
        .generated_at()
        .format("%Y%m%dT%H%M%S")
        .to_string();
    let filename = format!(
        "{}-{}.{}",
        slugify(content.topic()),
        stamp,
        content.content_type().file_extension()
    );
    output_root
        .join(content.content_type().dir_name())
        .join(filename)
}
