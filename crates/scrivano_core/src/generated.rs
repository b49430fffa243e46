//! Validated generation output.

use crate::{ContentBody, ContentGoal, ContentType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated content produced by the pipeline.
///
/// Immutable once validated; owned exclusively by the caller until handed
/// to the output manager for persistence.
///
/// # Examples
///
/// ```
/// use scrivano_core::{ContentBody, ContentMetadata, ContentType, GeneratedContent};
///
/// let content = GeneratedContent::new(
///     ContentType::Text,
///     "rust in production",
///     ContentBody::Text("Shipping Rust taught us three things...".to_string()),
///     ContentMetadata::now(None, vec!["hooks.text[0]".to_string()]),
/// );
/// assert_eq!(*content.content_type(), ContentType::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedContent {
    /// The content type this body was validated against
    content_type: ContentType,
    /// The topic the content was generated for
    topic: String,
    /// The validated body
    body: ContentBody,
    /// Generation metadata
    metadata: ContentMetadata,
}

impl GeneratedContent {
    /// Assemble validated content.
    pub fn new(
        content_type: ContentType,
        topic: impl Into<String>,
        body: ContentBody,
        metadata: ContentMetadata,
    ) -> Self {
        Self {
            content_type,
            topic: topic.into(),
            body,
            metadata,
        }
    }
}

/// Metadata attached to validated content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ContentMetadata {
    /// When the content was generated
    generated_at: DateTime<Utc>,
    /// The goal the content was generated for, when one applied
    goal: Option<ContentGoal>,
    /// Identifiers of the template fragments used, e.g. `hooks.carousel[2]`
    template_ids: Vec<String>,
}

impl ContentMetadata {
    /// Metadata stamped with the current time.
    pub fn now(goal: Option<ContentGoal>, template_ids: Vec<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            goal,
            template_ids,
        }
    }

    /// Metadata with an explicit timestamp.
    pub fn at(
        generated_at: DateTime<Utc>,
        goal: Option<ContentGoal>,
        template_ids: Vec<String>,
    ) -> Self {
        Self {
            generated_at,
            goal,
            template_ids,
        }
    }
}
