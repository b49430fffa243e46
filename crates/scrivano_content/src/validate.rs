//! Per-type structural validation of raw service output.

use crate::{SelectedTemplates, StructuralParams};
use scrivano_core::{
    ContentBody, ContentGoal, ContentMetadata, ContentRequest, ContentType, GeneratedContent,
    Section,
};
use scrivano_error::{ValidationError, ValidationErrorKind};

/// Character cap for flat text posts.
pub const MAX_TEXT_CHARS: usize = 3000;

/// Byte cap on a body's combined text.
const MAX_CONTENT_BYTES: usize = 10 * 1024 * 1024;

/// Allowed poll option counts.
const POLL_OPTIONS_MIN: usize = 2;
const POLL_OPTIONS_MAX: usize = 4;

/// Enforces a content type's structural and length rules on raw output.
///
/// The first failing rule is reported as a single `ValidationError` naming
/// the field and the expected vs. actual value. There is no partial
/// auto-repair, and validation never calls the generation service;
/// regeneration is the caller's decision.
pub struct ContentValidator;

impl ContentValidator {
    /// Validate raw output against the request's content type.
    ///
    /// On success the body is wrapped into an immutable
    /// [`GeneratedContent`] stamped with the goal and the template ids
    /// that shaped the prompt.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` with the first violated rule.
    #[tracing::instrument(skip_all, fields(content_type = %request.content_type()))]
    pub fn validate(
        request: &ContentRequest,
        goal: ContentGoal,
        params: &StructuralParams,
        selection: &SelectedTemplates,
        raw: ContentBody,
    ) -> Result<GeneratedContent, ValidationError> {
        check_content_size(&raw)?;
        match request.content_type() {
            ContentType::Text => validate_text(&raw)?,
            ContentType::Carousel => validate_carousel(&raw, params)?,
            ContentType::Poll => validate_poll(&raw)?,
            ContentType::Newsletter => validate_newsletter(&raw, selection.sections())?,
            ContentType::VideoScript => validate_video_script(&raw, params)?,
            ContentType::Document => validate_document(&raw, selection.sections())?,
        }

        tracing::debug!(units = raw.len(), "output accepted");
        Ok(GeneratedContent::new(
            *request.content_type(),
            request.topic().clone(),
            raw,
            ContentMetadata::now(Some(goal), selection.template_ids().clone()),
        ))
    }
}

fn check_content_size(body: &ContentBody) -> Result<(), ValidationError> {
    let bytes = match body {
        ContentBody::Text(text) => text.len(),
        ContentBody::Sections(sections) => sections
            .iter()
            .map(|s| s.heading().len() + s.text().len())
            .sum(),
        ContentBody::Options(options) => options.iter().map(String::len).sum(),
    };
    if bytes > MAX_CONTENT_BYTES {
        return Err(ValidationError::new(ValidationErrorKind::OversizedContent {
            max_bytes: MAX_CONTENT_BYTES,
            actual_bytes: bytes,
        }));
    }
    Ok(())
}

fn shape_error(expected: &str, actual: &ContentBody) -> ValidationError {
    let actual = match actual {
        ContentBody::Text(_) => "text",
        ContentBody::Sections(_) => "sections",
        ContentBody::Options(_) => "options",
    };
    ValidationError::new(ValidationErrorKind::BodyShape {
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

fn validate_text(raw: &ContentBody) -> Result<(), ValidationError> {
    let text = match raw {
        ContentBody::Text(text) => text,
        other => return Err(shape_error("text", other)),
    };
    if text.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyBody {
            field: "text".to_string(),
        }));
    }
    let chars = text.chars().count();
    if chars > MAX_TEXT_CHARS {
        return Err(ValidationError::new(ValidationErrorKind::BodyTooLong {
            max: MAX_TEXT_CHARS,
            actual: chars,
        }));
    }
    Ok(())
}

fn validate_carousel(raw: &ContentBody, params: &StructuralParams) -> Result<(), ValidationError> {
    let sections = match raw {
        ContentBody::Sections(sections) => sections,
        other => return Err(shape_error("sections", other)),
    };
    let expected = *params.slide_count() as usize;
    if sections.len() != expected {
        return Err(ValidationError::new(ValidationErrorKind::SectionCount {
            field: "slides".to_string(),
            expected,
            actual: sections.len(),
        }));
    }
    check_no_empty_sections(sections)
}

fn validate_poll(raw: &ContentBody) -> Result<(), ValidationError> {
    let options = match raw {
        ContentBody::Options(options) => options,
        other => return Err(shape_error("options", other)),
    };
    if !(POLL_OPTIONS_MIN..=POLL_OPTIONS_MAX).contains(&options.len()) {
        return Err(ValidationError::new(ValidationErrorKind::OptionCount {
            min: POLL_OPTIONS_MIN,
            max: POLL_OPTIONS_MAX,
            actual: options.len(),
        }));
    }
    let mut seen: Vec<String> = Vec::with_capacity(options.len());
    for option in options {
        let folded = option.trim().to_lowercase();
        if folded.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptySection {
                name: "option".to_string(),
            }));
        }
        if seen.contains(&folded) {
            return Err(ValidationError::new(ValidationErrorKind::DuplicateOption {
                option: option.clone(),
            }));
        }
        seen.push(folded);
    }
    Ok(())
}

fn validate_newsletter(raw: &ContentBody, required: &[String]) -> Result<(), ValidationError> {
    let sections = match raw {
        ContentBody::Sections(sections) => sections,
        other => return Err(shape_error("sections", other)),
    };
    for name in required {
        if !sections.iter().any(|s| s.heading() == name) {
            return Err(ValidationError::new(ValidationErrorKind::MissingSection {
                name: name.clone(),
            }));
        }
    }
    check_no_empty_sections(sections)
}

fn validate_video_script(
    raw: &ContentBody,
    params: &StructuralParams,
) -> Result<(), ValidationError> {
    let sections = match raw {
        ContentBody::Sections(sections) => sections,
        other => return Err(shape_error("sections", other)),
    };
    if sections.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyBody {
            field: "script".to_string(),
        }));
    }
    check_no_empty_sections(sections)?;

    let duration = params.duration_seconds().unwrap_or(0);
    let mut cursor = 0u32;
    for section in sections {
        let window = section.timing().as_ref().ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::MissingTiming {
                name: section.heading().clone(),
            })
        })?;
        let start = *window.start_seconds();
        let end = *window.end_seconds();
        if start > cursor {
            return Err(ValidationError::new(ValidationErrorKind::TimingGap {
                at_seconds: cursor,
            }));
        }
        if start < cursor {
            return Err(ValidationError::new(ValidationErrorKind::TimingOverlap {
                at_seconds: start,
            }));
        }
        if end <= start {
            return Err(ValidationError::new(ValidationErrorKind::TimingOverlap {
                at_seconds: end,
            }));
        }
        cursor = end;
    }
    if cursor != duration {
        return Err(ValidationError::new(ValidationErrorKind::DurationMismatch {
            expected: duration,
            actual: cursor,
        }));
    }
    Ok(())
}

fn validate_document(raw: &ContentBody, required: &[String]) -> Result<(), ValidationError> {
    let sections = match raw {
        ContentBody::Sections(sections) => sections,
        other => return Err(shape_error("sections", other)),
    };
    if sections.len() != required.len() {
        return Err(ValidationError::new(ValidationErrorKind::SectionCount {
            field: "document_sections".to_string(),
            expected: required.len(),
            actual: sections.len(),
        }));
    }
    for (section, expected) in sections.iter().zip(required) {
        if section.heading() != expected {
            return Err(ValidationError::new(ValidationErrorKind::SectionOrder {
                expected: expected.clone(),
                actual: section.heading().clone(),
            }));
        }
    }
    check_no_empty_sections(sections)
}

fn check_no_empty_sections(sections: &[Section]) -> Result<(), ValidationError> {
    for section in sections {
        if section.text().trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptySection {
                name: section.heading().clone(),
            }));
        }
    }
    Ok(())
}
