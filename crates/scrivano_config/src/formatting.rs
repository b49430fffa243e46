//! Formatting rules from the `[formatting]` section.

use scrivano_core::ContentType;
use scrivano_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Layout and hashtag formatting rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct FormattingRules {
    /// Blank lines between assembled post parts
    line_breaks: usize,
    /// Prefix prepended to each body paragraph, when set
    emoji_prefix: Option<String>,
    /// Where hashtags land in the assembled post
    hashtag_style: HashtagStyle,
    /// How many hashtags to draw from the pool
    hashtag_count: usize,
    /// Per-type layout ratios apportioning the character budget
    layout: HashMap<ContentType, LayoutRatios>,
}

impl Default for FormattingRules {
    fn default() -> Self {
        Self {
            line_breaks: 2,
            emoji_prefix: None,
            hashtag_style: HashtagStyle::Separate,
            hashtag_count: 3,
            layout: HashMap::new(),
        }
    }
}

impl FormattingRules {
    /// Layout ratios for a content type, when configured.
    pub fn layout_for(&self, kind: ContentType) -> Option<&LayoutRatios> {
        self.layout.get(&kind)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.line_breaks == 0 {
            return Err(ConfigError::new("formatting.line_breaks must be positive"));
        }
        for (kind, ratios) in &self.layout {
            ratios.validate(*kind)?;
        }
        Ok(())
    }
}

/// Where hashtags are placed in an assembled post.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HashtagStyle {
    /// Hashtags woven into the prompt so the service integrates them
    Integrated,
    /// Hashtags appended as a trailing block after the body
    #[default]
    Separate,
}

/// Fractions of the character budget given to each part of a post.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LayoutRatios {
    /// Fraction for the hook
    hook: f32,
    /// Fraction for the main body
    body: f32,
    /// Fraction for the call to action
    cta: f32,
}

impl LayoutRatios {
    fn validate(&self, kind: ContentType) -> Result<(), ConfigError> {
        for (name, value) in [("hook", self.hook), ("body", self.body), ("cta", self.cta)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::new(format!(
                    "formatting.layout.{kind}.{name} must be within [0, 1], got {value}"
                )));
            }
        }
        let total = self.hook + self.body + self.cta;
        if total > 1.0 + f32::EPSILON {
            return Err(ConfigError::new(format!(
                "formatting.layout.{kind} ratios sum to {total}, expected at most 1.0"
            )));
        }
        Ok(())
    }
}
