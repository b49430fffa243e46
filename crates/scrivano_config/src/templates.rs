//! Template fragments from the `[templates]` section.

use scrivano_core::{ContentGoal, ContentType, DocumentVariant};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The template fragment library.
///
/// Hook phrases are keyed by content type, call-to-action phrases by goal,
/// and section lists by the structure they describe. Fragments may contain
/// a `{topic}` placeholder that prompt building interpolates.
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct TemplateLibrary {
    /// Hook phrases per content type
    #[serde(default)]
    hooks: HashMap<ContentType, Vec<String>>,
    /// Call-to-action phrases per goal
    #[serde(default)]
    cta: HashMap<ContentGoal, Vec<String>>,
    /// Slide headings for carousels
    #[serde(default)]
    carousel_sections: Vec<String>,
    /// Poll option scaffolds per structure family
    #[serde(default)]
    poll_structures: HashMap<String, Vec<String>>,
    /// Section headings for newsletters
    #[serde(default)]
    newsletter_sections: Vec<String>,
    /// Section headings for video scripts
    #[serde(default)]
    video_script_sections: Vec<String>,
    /// Required section headings per document variant
    #[serde(default)]
    document_sections: HashMap<DocumentVariant, Vec<String>>,
}

impl TemplateLibrary {
    /// Hook candidates for a content type.
    pub fn hooks_for(&self, kind: ContentType) -> Option<&[String]> {
        self.hooks.get(&kind).map(Vec::as_slice)
    }

    /// Call-to-action candidates for a goal.
    pub fn cta_for(&self, goal: ContentGoal) -> Option<&[String]> {
        self.cta.get(&goal).map(Vec::as_slice)
    }

    /// Required document sections for a variant.
    pub fn document_sections_for(&self, variant: DocumentVariant) -> Option<&[String]> {
        self.document_sections.get(&variant).map(Vec::as_slice)
    }
}
