//! The configuration model and its load-time validation.

use crate::{FormattingRules, TemplateLibrary};
use scrivano_core::{ContentGoal, ContentType};
use scrivano_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// Typed view over the loaded configuration.
///
/// Loaded once with [`ConfigModel::from_file`], validated, and read-only
/// thereafter. Generation never starts for a content type absent from
/// `content_types`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ConfigModel {
    /// Goals this deployment may generate for
    content_goals: Vec<ContentGoal>,
    /// Advisory metric names tracked for this deployment
    #[serde(default)]
    optimization_metrics: Vec<String>,
    /// Audience and goal settings
    content_config: ContentSettings,
    /// Brand-voice descriptors
    brand_voice: BrandVoiceProfile,
    /// Structural parameters per supported content type
    content_types: HashMap<ContentType, ContentTypeSpec>,
    /// Template fragments
    templates: TemplateLibrary,
    /// Layout and hashtag formatting rules
    #[serde(default)]
    formatting: FormattingRules,
}

impl ConfigModel {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, the TOML is
    /// invalid, or validation fails.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("failed to read {}: {}", path.display(), e)))?;
        content.parse()
    }

    /// Looks up the structural spec for a content type.
    ///
    /// Returns `None` for types this configuration does not support.
    pub fn content_type(&self, kind: ContentType) -> Option<&ContentTypeSpec> {
        self.content_types.get(&kind)
    }

    /// The goal used when a request carries none.
    pub fn primary_goal(&self) -> ContentGoal {
        *self.content_config.primary_goal()
    }

    /// Validates the loaded configuration.
    ///
    /// Violations surface immediately as `ConfigError`; nothing retries a
    /// bad configuration.
    #[tracing::instrument(skip(self), fields(types = self.content_types.len()))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_config.target_audience.is_empty() {
            return Err(ConfigError::new("target_audience must not be empty"));
        }
        if self.content_config.industry_context.trim().is_empty() {
            return Err(ConfigError::new("industry_context must not be empty"));
        }
        if self.brand_voice.tone.is_empty() {
            return Err(ConfigError::new("brand_voice.tone must not be empty"));
        }
        if self.content_goals.is_empty() {
            return Err(ConfigError::new("content_goals must not be empty"));
        }
        if !self
            .content_goals
            .contains(self.content_config.primary_goal())
        {
            return Err(ConfigError::new(format!(
                "primary_goal '{}' is not listed in content_goals",
                self.content_config.primary_goal()
            )));
        }
        for (kind, spec) in &self.content_types {
            spec.validate(*kind)?;
        }
        self.formatting.validate()?;
        tracing::debug!("configuration validated");
        Ok(())
    }
}

impl FromStr for ConfigModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let model: Self = toml::from_str(s)
            .map_err(|e| ConfigError::new(format!("failed to parse configuration: {}", e)))?;
        model.validate()?;
        Ok(model)
    }
}

/// Audience and goal settings from the `[content_config]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ContentSettings {
    /// Goal applied when a request supplies none
    primary_goal: ContentGoal,
    /// Who the content is written for
    target_audience: Vec<String>,
    /// Industry framing woven into prompts
    industry_context: String,
    /// Free-form deployment parameters
    #[serde(default)]
    custom_parameters: HashMap<String, serde_json::Value>,
}

/// Brand-voice descriptors from the `[brand_voice]` section.
///
/// Read-only input to prompt building; never mutated during generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct BrandVoiceProfile {
    /// Tone descriptors, in priority order
    tone: Vec<String>,
    /// Style descriptors, in priority order
    #[serde(default)]
    style: Vec<String>,
    /// Personality descriptors, in priority order
    #[serde(default)]
    personality: Vec<String>,
    /// Phrases the brand leans on
    #[serde(default)]
    key_phrases: Vec<String>,
    /// Emoji density policy (e.g. "none", "minimal", "expressive")
    #[serde(default = "default_emoji_style")]
    emoji_style: String,
    /// Hashtag pool, without the leading `#`
    #[serde(default)]
    industry_hashtags: Vec<String>,
}

fn default_emoji_style() -> String {
    "minimal".to_string()
}

/// Structural parameters for one content type.
///
/// Only the parameters relevant to the type are set; `validate` checks the
/// ones that are.
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(deny_unknown_fields)]
pub struct ContentTypeSpec {
    /// Carousel slide count
    #[serde(default)]
    slide_count: Option<u32>,
    /// Poll option count
    #[serde(default)]
    option_count: Option<u32>,
    /// Video script duration in seconds
    #[serde(default)]
    duration_seconds: Option<u32>,
    /// Document page length bounds
    #[serde(default)]
    page_length: Option<PageRange>,
}

impl ContentTypeSpec {
    fn validate(&self, kind: ContentType) -> Result<(), ConfigError> {
        if self.slide_count == Some(0) {
            return Err(ConfigError::new(format!(
                "content_types.{kind}: slide_count must be positive"
            )));
        }
        if let Some(options) = self.option_count {
            if !(2..=4).contains(&options) {
                return Err(ConfigError::new(format!(
                    "content_types.{kind}: option_count must be between 2 and 4, got {options}"
                )));
            }
        }
        if self.duration_seconds == Some(0) {
            return Err(ConfigError::new(format!(
                "content_types.{kind}: duration_seconds must be positive"
            )));
        }
        if let Some(range) = &self.page_length {
            range.validate(kind)?;
        }
        Ok(())
    }
}

/// Inclusive page-length bounds for document-type content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct PageRange {
    /// Minimum page count
    min: u32,
    /// Maximum page count
    max: u32,
}

impl PageRange {
    fn validate(&self, kind: ContentType) -> Result<(), ConfigError> {
        if self.min == 0 {
            return Err(ConfigError::new(format!(
                "content_types.{kind}: page_length.min must be positive"
            )));
        }
        if self.min > self.max {
            return Err(ConfigError::new(format!(
                "content_types.{kind}: page_length.min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}
