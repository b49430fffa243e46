//! Artifact serialization: TOML front matter plus a rendered body.

use scrivano_core::{ContentBody, ContentGoal, ContentType, GeneratedContent};
use scrivano_error::{FileError, FileErrorKind};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Front matter written ahead of the rendered body.
#[derive(Debug, Serialize)]
struct FrontMatter<'a> {
    topic: &'a str,
    content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    goal: Option<ContentGoal>,
    generated_at: String,
    template_ids: &'a [String],
    checksum: String,
}

/// Serialize content to its on-disk form.
///
/// The document opens with `+++`-delimited TOML front matter (topic, type,
/// goal, timestamp, template ids, and a SHA-256 of the rendered body),
/// followed by the body rendered per content type.
///
/// # Errors
///
/// Returns `FileError` with the `serialize` step when front-matter
/// encoding fails.
pub fn render_artifact(content: &GeneratedContent) -> Result<String, FileError> {
    let body = render_body(content.content_type(), content.body());

    let front = FrontMatter {
        topic: content.topic(),
        content_type: *content.content_type(),
        goal: *content.metadata().goal(),
        generated_at: content.metadata().generated_at().to_rfc3339(),
        template_ids: content.metadata().template_ids(),
        checksum: format!("{:x}", Sha256::digest(body.as_bytes())),
    };
    let front = toml::to_string(&front)
        .map_err(|e| FileError::new(FileErrorKind::Serialize(e.to_string())))?;

    Ok(format!("+++\n{front}+++\n\n{body}"))
}

fn render_body(content_type: &ContentType, body: &ContentBody) -> String {
    match (content_type, body) {
        (_, ContentBody::Text(text)) => text.clone(),
        (ContentType::Carousel, ContentBody::Sections(sections)) => {
            let mut out = String::new();
            for (i, section) in sections.iter().enumerate() {
                let _ = writeln!(out, "## Slide {}: {}", i + 1, section.heading());
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", section.text());
                let _ = writeln!(out);
            }
            out.trim_end().to_string()
        }
        (ContentType::VideoScript, ContentBody::Sections(sections)) => {
            let mut out = String::new();
            for section in sections {
                match section.timing() {
                    Some(window) => {
                        let _ = writeln!(
                            out,
                            "## {} ({}s-{}s)",
                            section.heading(),
                            window.start_seconds(),
                            window.end_seconds()
                        );
                    }
                    None => {
                        let _ = writeln!(out, "## {}", section.heading());
                    }
                }
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", section.text());
                let _ = writeln!(out);
            }
            out.trim_end().to_string()
        }
        (_, ContentBody::Sections(sections)) => {
            let mut out = String::new();
            for section in sections {
                let _ = writeln!(out, "## {}", section.heading());
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", section.text());
                let _ = writeln!(out);
            }
            out.trim_end().to_string()
        }
        (_, ContentBody::Options(options)) => {
            let mut out = String::from("## Options\n\n");
            for option in options {
                let _ = writeln!(out, "- {option}");
            }
            out.trim_end().to_string()
        }
    }
}
