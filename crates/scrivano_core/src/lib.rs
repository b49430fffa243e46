//! Core data types for the Scrivano content pipeline.
//!
//! This crate provides the foundation data types shared across the
//! Scrivano workspace: content types and goals, generation requests,
//! content bodies, and the prompt sent to the generation service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod body;
mod content;
mod generated;
mod goal;
mod prompt;
mod request;
pub mod telemetry;

pub use body::{ContentBody, Section, TimeWindow};
pub use content::{ContentType, DocumentVariant};
pub use generated::{ContentMetadata, GeneratedContent};
pub use goal::ContentGoal;
pub use prompt::{GenerationConstraints, Prompt};
pub use request::{ContentRequest, ContentRequestBuilder, StructuralOverrides};
