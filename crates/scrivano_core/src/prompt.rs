//! The prompt sent to the generation service.

use serde::{Deserialize, Serialize};

/// A fully assembled prompt.
///
/// The system half carries brand-voice and audience directives; the user
/// half carries the topic-specific instructions. Structural constraints
/// travel alongside so a service can shape its output without re-parsing
/// the instruction text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Prompt {
    /// Style and audience directives
    system: String,
    /// Topic-specific instructions
    user: String,
    /// Structural constraints on the output
    constraints: GenerationConstraints,
}

impl Prompt {
    /// Assemble a prompt.
    pub fn new(
        system: impl Into<String>,
        user: impl Into<String>,
        constraints: GenerationConstraints,
    ) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            constraints,
        }
    }

    /// True when the user instructions mention the given text.
    pub fn mentions(&self, text: &str) -> bool {
        self.user.contains(text)
    }
}

/// Structural constraints passed to the generation service.
///
/// All fields optional; only those relevant to the requested content type
/// are set.
///
/// # Examples
///
/// ```
/// use scrivano_core::GenerationConstraints;
///
/// let constraints = GenerationConstraints::default().slides(6);
/// assert_eq!(constraints.slide_count(), &Some(6));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct GenerationConstraints {
    /// Maximum character count for flat text
    max_chars: Option<usize>,
    /// Required carousel slide count
    slide_count: Option<u32>,
    /// Required poll option count
    option_count: Option<u32>,
    /// Required video duration in seconds
    duration_seconds: Option<u32>,
    /// Required document page length
    page_length: Option<u32>,
}

impl GenerationConstraints {
    /// Set the text length cap.
    pub fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// Set the slide count.
    pub fn slides(mut self, count: u32) -> Self {
        self.slide_count = Some(count);
        self
    }

    /// Set the poll option count.
    pub fn options(mut self, count: u32) -> Self {
        self.option_count = Some(count);
        self
    }

    /// Set the video duration.
    pub fn duration(mut self, seconds: u32) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    /// Set the document page length.
    pub fn pages(mut self, pages: u32) -> Self {
        self.page_length = Some(pages);
        self
    }
}
