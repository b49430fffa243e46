//! Content type identifiers.

use serde::{Deserialize, Serialize};

/// The supported content types.
///
/// Each type carries structural parameters defined by configuration at
/// load time (slide count, option count, duration, page length). The wire
/// name is snake_case, matching configuration keys and output directories.
///
/// # Examples
///
/// ```
/// use scrivano_core::ContentType;
/// use std::str::FromStr;
///
/// assert_eq!(format!("{}", ContentType::VideoScript), "video_script");
/// assert_eq!(ContentType::from_str("carousel").unwrap(), ContentType::Carousel);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContentType {
    /// A flat text post
    Text,
    /// A slide carousel
    Carousel,
    /// A poll with 2-4 options
    Poll,
    /// A sectioned newsletter
    Newsletter,
    /// A timed video script
    VideoScript,
    /// A long-form document (whitepaper or case study)
    Document,
}

impl ContentType {
    /// Directory name for persisted artifacts of this type.
    pub fn dir_name(&self) -> String {
        self.to_string()
    }

    /// File extension for the rendered artifact.
    ///
    /// Text posts render verbatim; everything else is markdown.
    pub fn file_extension(&self) -> &'static str {
        match self {
            ContentType::Text => "txt",
            _ => "md",
        }
    }
}

/// Variant of a document-type artifact.
///
/// Selects which required-section list applies during template selection
/// and validation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentVariant {
    /// Evidence-led long-form document
    #[default]
    Whitepaper,
    /// Outcome-led customer story
    CaseStudy,
}
