//! Scrivano - brand-voiced content generation and persistence.
//!
//! Scrivano turns a topic string and a requested content type (text post,
//! carousel, poll, newsletter, video script, document) into a validated,
//! atomically persisted content artifact, shaped by configurable
//! brand-voice rules and per-type templates and backed by a pluggable
//! generative text service.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scrivano::{ConfigModel, ContentPipeline, ContentRequest, ContentType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigModel::from_file("scrivano.toml")?;
//!     let pipeline = ContentPipeline::new(config, my_client, "output")?;
//!
//!     let request = ContentRequest::builder()
//!         .topic("zero-downtime migrations")
//!         .content_type(ContentType::Carousel)
//!         .build()?;
//!
//!     let content = pipeline.generate(&request).await?;
//!     let artifact = pipeline.save(&content, "backups").await?;
//!     println!("saved to {}", artifact.primary_path().display());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Scrivano is organized as a workspace with focused crates:
//!
//! - `scrivano_core` - Core data types (requests, bodies, prompts)
//! - `scrivano_config` - Typed configuration loaded once from TOML
//! - `scrivano_interface` - The `GenerationClient` service boundary
//! - `scrivano_content` - Template selection, prompt building, validation
//! - `scrivano_storage` - Atomic persistence with backups
//! - `scrivano_error` - Error types
//!
//! This crate re-exports everything and adds [`ContentPipeline`], the
//! end-to-end entry point consumed by the CLI.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pipeline;

pub use pipeline::ContentPipeline;
pub use scrivano_config::*;
pub use scrivano_content::*;
pub use scrivano_core::*;
pub use scrivano_error::*;
pub use scrivano_interface::*;
pub use scrivano_storage::*;
