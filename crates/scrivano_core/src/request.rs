//! Per-invocation generation requests.

use crate::{ContentGoal, ContentType, DocumentVariant};
use serde::{Deserialize, Serialize};

/// A single content-generation request.
///
/// Constructed per invocation and never persisted. The topic must be
/// non-empty; the prompt builder rejects whitespace-only topics.
///
/// # Examples
///
/// ```
/// use scrivano_core::{ContentRequest, ContentType};
///
/// let request = ContentRequest::builder()
///     .topic("zero-downtime migrations")
///     .content_type(ContentType::Carousel)
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.content_type(), ContentType::Carousel);
/// assert!(request.goal().is_none());
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ContentRequest {
    /// The subject to generate content about
    topic: String,
    /// Which content type to produce
    content_type: ContentType,
    /// Goal override; the configured primary goal applies when absent
    #[builder(default)]
    goal: Option<ContentGoal>,
    /// Structural-parameter overrides
    #[builder(default)]
    overrides: StructuralOverrides,
}

impl ContentRequest {
    /// Creates a new request builder.
    pub fn builder() -> ContentRequestBuilder {
        ContentRequestBuilder::default()
    }

    /// Creates a request directly from its parts.
    pub fn new(
        topic: impl Into<String>,
        content_type: ContentType,
        goal: Option<ContentGoal>,
        overrides: StructuralOverrides,
    ) -> Self {
        Self {
            topic: topic.into(),
            content_type,
            goal,
            overrides,
        }
    }
}

/// Caller-supplied overrides for a content type's structural parameters.
///
/// Every field is optional; configuration supplies the value when an
/// override is absent.
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(deny_unknown_fields)]
pub struct StructuralOverrides {
    /// Carousel slide count
    #[serde(default)]
    slide_count: Option<u32>,
    /// Poll option count
    #[serde(default)]
    option_count: Option<u32>,
    /// Video script duration in seconds
    #[serde(default)]
    duration_seconds: Option<u32>,
    /// Document page length
    #[serde(default)]
    page_length: Option<u32>,
    /// Poll structure family (e.g. "implementation")
    #[serde(default)]
    poll_structure: Option<String>,
    /// Document variant
    #[serde(default)]
    document_variant: Option<DocumentVariant>,
}

impl StructuralOverrides {
    /// Overrides with a custom slide count.
    pub fn with_slide_count(slide_count: u32) -> Self {
        Self {
            slide_count: Some(slide_count),
            ..Self::default()
        }
    }

    /// Overrides with a custom option count.
    pub fn with_option_count(option_count: u32) -> Self {
        Self {
            option_count: Some(option_count),
            ..Self::default()
        }
    }

    /// Overrides with a custom duration.
    pub fn with_duration_seconds(duration_seconds: u32) -> Self {
        Self {
            duration_seconds: Some(duration_seconds),
            ..Self::default()
        }
    }

    /// Overrides with a document variant.
    pub fn with_document_variant(variant: DocumentVariant) -> Self {
        Self {
            document_variant: Some(variant),
            ..Self::default()
        }
    }
}
