//! Content body shapes.

use serde::{Deserialize, Serialize};

/// The body of generated content.
///
/// The generation service returns one of these shapes; validation checks
/// it against the content type's structural spec and the validated body
/// keeps the same shape inside [`crate::GeneratedContent`].
///
/// # Examples
///
/// ```
/// use scrivano_core::{ContentBody, Section};
///
/// let poll = ContentBody::Options(vec!["Build".to_string(), "Buy".to_string()]);
/// assert_eq!(poll.len(), 2);
///
/// let carousel = ContentBody::Sections(vec![Section::new("The Problem", "Teams drown in...")]);
/// assert!(!carousel.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "data", rename_all = "snake_case")]
pub enum ContentBody {
    /// A flat string body (text posts)
    Text(String),
    /// An ordered sequence of named sections (carousel, newsletter,
    /// video script, document)
    Sections(Vec<Section>),
    /// An ordered list of poll options
    Options(Vec<String>),
}

impl ContentBody {
    /// Number of units in the body: characters for text, sections or
    /// options otherwise.
    pub fn len(&self) -> usize {
        match self {
            ContentBody::Text(text) => text.chars().count(),
            ContentBody::Sections(sections) => sections.len(),
            ContentBody::Options(options) => options.len(),
        }
    }

    /// True when the body holds no content at all.
    pub fn is_empty(&self) -> bool {
        match self {
            ContentBody::Text(text) => text.trim().is_empty(),
            ContentBody::Sections(sections) => sections.is_empty(),
            ContentBody::Options(options) => options.is_empty(),
        }
    }
}

/// One named section of a sectioned body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Section {
    /// Section heading (e.g. a carousel slide title or newsletter section name)
    heading: String,
    /// Section text
    text: String,
    /// Timing window, present only for video-script sections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timing: Option<TimeWindow>,
}

impl Section {
    /// Create an untimed section.
    pub fn new(heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            text: text.into(),
            timing: None,
        }
    }

    /// Create a timed section for a video script.
    pub fn timed(
        heading: impl Into<String>,
        text: impl Into<String>,
        start_seconds: u32,
        end_seconds: u32,
    ) -> Self {
        Self {
            heading: heading.into(),
            text: text.into(),
            timing: Some(TimeWindow {
                start_seconds,
                end_seconds,
            }),
        }
    }
}

/// A half-open timing window `[start, end)` in seconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct TimeWindow {
    /// Window start, inclusive
    start_seconds: u32,
    /// Window end, exclusive
    end_seconds: u32,
}

impl TimeWindow {
    /// Create a new timing window.
    pub fn new(start_seconds: u32, end_seconds: u32) -> Self {
        Self {
            start_seconds,
            end_seconds,
        }
    }
}
