//! Template selection, prompt building, and output validation.
//!
//! This crate holds the pure middle of the pipeline: everything between
//! the loaded configuration and the generation-service boundary, plus the
//! validator that gates raw service output before it becomes a
//! [`scrivano_core::GeneratedContent`].
//!
//! All components here are pure functions of configuration and inputs;
//! none of them touch the filesystem or call the generation service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assemble;
mod params;
mod prompt;
mod select;
mod validate;

pub use assemble::{assemble_text_post, pick_hashtags};
pub use params::StructuralParams;
pub use prompt::{PromptBuilder, interpolate_topic};
pub use select::{SelectedTemplates, TemplateSelector, selection_index};
pub use validate::{ContentValidator, MAX_TEXT_CHARS};
