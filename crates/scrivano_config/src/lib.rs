//! Typed configuration model for the Scrivano content pipeline.
//!
//! Configuration is loaded once from a TOML file and read-only thereafter.
//! The model is pure data: beyond the `validate()` pass that runs at load
//! time it has no behavior, and nothing in the pipeline mutates it.
//!
//! # Example configuration
//!
//! ```toml
//! content_goals = ["engagement", "thought_leadership"]
//! optimization_metrics = ["impressions", "comments"]
//!
//! [content_config]
//! primary_goal = "engagement"
//! target_audience = ["engineering leaders"]
//! industry_context = "developer tooling"
//!
//! [brand_voice]
//! tone = ["professional"]
//! style = ["conversational"]
//! personality = ["authentic"]
//! emoji_style = "minimal"
//! industry_hashtags = ["DevTools", "Rust"]
//!
//! [content_types.carousel]
//! slide_count = 8
//!
//! [templates.hooks]
//! carousel = ["The {topic} playbook nobody shares"]
//!
//! [templates.cta]
//! engagement = ["What has {topic} looked like for you?"]
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod formatting;
mod model;
mod templates;

pub use formatting::{FormattingRules, HashtagStyle, LayoutRatios};
pub use model::{BrandVoiceProfile, ConfigModel, ContentSettings, ContentTypeSpec, PageRange};
pub use templates::TemplateLibrary;
