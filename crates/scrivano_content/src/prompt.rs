//! Prompt assembly from templates, brand voice, and constraints.

use crate::{MAX_TEXT_CHARS, SelectedTemplates, StructuralParams, selection_index};
use scrivano_config::{ConfigModel, HashtagStyle};
use scrivano_core::{ContentRequest, ContentType, GenerationConstraints, Prompt};
use scrivano_error::{ValidationError, ValidationErrorKind};
use std::fmt::Write as _;

/// Composes the final prompt sent to the generation service.
///
/// The system half carries the brand voice and audience; the user half
/// carries the interpolated hook, structural instructions, and the call to
/// action. Structural requirements are stated explicitly so the service
/// produces content already shaped to the target structure.
pub struct PromptBuilder<'a> {
    config: &'a ConfigModel,
}

impl<'a> PromptBuilder<'a> {
    /// Create a builder over a loaded configuration.
    pub fn new(config: &'a ConfigModel) -> Self {
        Self { config }
    }

    /// Build the prompt for a request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the topic is empty or whitespace-only,
    /// or when a structural parameter the content type requires resolved to
    /// a non-positive value.
    #[tracing::instrument(skip_all, fields(content_type = %request.content_type()))]
    pub fn build(
        &self,
        request: &ContentRequest,
        selection: &SelectedTemplates,
        params: &StructuralParams,
    ) -> Result<Prompt, ValidationError> {
        let topic = request.topic().trim();
        if topic.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyTopic));
        }
        let content_type = *request.content_type();
        let constraints = self.check_constraints(content_type, params)?;

        let hook = interpolate_topic(selection.hook(), topic);
        let cta = interpolate_topic(selection.cta(), topic);

        let mut user = String::new();
        if content_type == ContentType::Text {
            // Text posts get the hook and call to action assembled around
            // the returned body, so the service writes the body alone.
            let _ = writeln!(user, "Starting hook, for context only: {hook}");
        } else {
            let _ = writeln!(user, "{hook}");
        }
        let _ = writeln!(user);
        let _ = writeln!(
            user,
            "Write a {} about {} for {}.",
            content_type,
            topic,
            self.config.content_config().target_audience().join(", ")
        );
        let _ = writeln!(
            user,
            "Industry context: {}.",
            self.config.content_config().industry_context()
        );
        self.write_structure(&mut user, content_type, selection, params, topic);
        if content_type != ContentType::Text {
            let _ = writeln!(user, "Close with this call to action: {cta}");
        }

        let voice = self.config.brand_voice();
        if !voice.key_phrases().is_empty() {
            let _ = writeln!(
                user,
                "Lean on these key phrases where natural: {}.",
                voice.key_phrases().join(", ")
            );
        }
        if *self.config.formatting().hashtag_style() == HashtagStyle::Integrated
            && !voice.industry_hashtags().is_empty()
        {
            let tags = crate::pick_hashtags(
                voice.industry_hashtags(),
                *self.config.formatting().hashtag_count(),
                selection_index(topic, content_type),
            );
            let _ = writeln!(user, "Work these hashtags in naturally: {}.", tags.join(" "));
        }

        let prompt = Prompt::new(self.system_directives(), user, constraints);
        tracing::debug!(chars = prompt.user().len(), "assembled prompt");
        Ok(prompt)
    }

    /// Brand-voice and audience directives shared by every prompt.
    fn system_directives(&self) -> String {
        let voice = self.config.brand_voice();
        let settings = self.config.content_config();
        let mut system = String::from("You are a professional brand content writer.\n");
        let _ = writeln!(system, "Tone: {}.", voice.tone().join(", "));
        if !voice.style().is_empty() {
            let _ = writeln!(system, "Style: {}.", voice.style().join(", "));
        }
        if !voice.personality().is_empty() {
            let _ = writeln!(system, "Personality: {}.", voice.personality().join(", "));
        }
        let _ = writeln!(system, "Emoji usage: {}.", voice.emoji_style());
        let _ = writeln!(
            system,
            "Write in a way that resonates with: {}.",
            settings.target_audience().join(", ")
        );
        system
    }

    /// Validate required structural parameters and express them as
    /// service-facing constraints.
    fn check_constraints(
        &self,
        content_type: ContentType,
        params: &StructuralParams,
    ) -> Result<GenerationConstraints, ValidationError> {
        let constraints = GenerationConstraints::default();
        match content_type {
            ContentType::Text => Ok(constraints.max_chars(MAX_TEXT_CHARS)),
            ContentType::Carousel => {
                let slides = *params.slide_count();
                if slides == 0 {
                    return Err(non_positive("slide_count", slides));
                }
                Ok(constraints.slides(slides))
            }
            ContentType::Poll => {
                let options = *params.option_count();
                if options == 0 {
                    return Err(non_positive("option_count", options));
                }
                Ok(constraints.options(options))
            }
            ContentType::VideoScript => {
                let duration = params.duration_seconds().unwrap_or(0);
                if duration == 0 {
                    return Err(non_positive("duration_seconds", duration));
                }
                Ok(constraints.duration(duration))
            }
            ContentType::Document => {
                if let Some(pages) = *params.page_length() {
                    if pages == 0 {
                        return Err(non_positive("page_length", pages));
                    }
                    Ok(constraints.pages(pages))
                } else {
                    Ok(constraints)
                }
            }
            ContentType::Newsletter => Ok(constraints),
        }
    }

    /// Per-type structural instructions.
    fn write_structure(
        &self,
        user: &mut String,
        content_type: ContentType,
        selection: &SelectedTemplates,
        params: &StructuralParams,
        topic: &str,
    ) {
        match content_type {
            ContentType::Text => {
                let _ = writeln!(
                    user,
                    "Use the PASS framework: problem, amplify, solution, success."
                );
                let _ = writeln!(
                    user,
                    "Keep paragraphs short and stay under {MAX_TEXT_CHARS} characters in total."
                );
                if let Some(ratios) = self.config.formatting().layout_for(ContentType::Text) {
                    let budget = MAX_TEXT_CHARS as f32;
                    let _ = writeln!(
                        user,
                        "Give roughly {} characters to the opening, {} to the body, and {} to the close.",
                        (budget * ratios.hook()).round() as usize,
                        (budget * ratios.body()).round() as usize,
                        (budget * ratios.cta()).round() as usize,
                    );
                }
            }
            ContentType::Carousel => {
                let _ = writeln!(
                    user,
                    "Produce exactly {} slides, one per heading, in this order: {}.",
                    params.slide_count(),
                    selection.sections().join("; ")
                );
                let _ = writeln!(user, "Each slide needs a main point and one concrete example.");
            }
            ContentType::Poll => {
                let _ = writeln!(
                    user,
                    "Produce exactly {} poll options, each under 30 characters, no two alike.",
                    params.option_count()
                );
                if !selection.option_scaffolds().is_empty() {
                    let scaffolds: Vec<String> = selection
                        .option_scaffolds()
                        .iter()
                        .map(|s| interpolate_topic(s, topic))
                        .collect();
                    let _ = writeln!(user, "Pattern the options on: {}.", scaffolds.join("; "));
                }
                let _ = writeln!(user, "Add one short paragraph of context before the options.");
            }
            ContentType::Newsletter => {
                let _ = writeln!(
                    user,
                    "Cover every one of these sections, in order: {}.",
                    selection.sections().join("; ")
                );
            }
            ContentType::VideoScript => {
                let _ = writeln!(
                    user,
                    "Script exactly {} seconds across these sections: {}.",
                    params.duration_seconds().unwrap_or(0),
                    selection.sections().join("; ")
                );
                let _ = writeln!(
                    user,
                    "Give each section a start and end time; the timings must cover the full duration with no gaps or overlaps."
                );
            }
            ContentType::Document => {
                let _ = writeln!(
                    user,
                    "Write a {} with these sections, in order: {}.",
                    params.document_variant(),
                    selection.sections().join("; ")
                );
                if let Some(pages) = *params.page_length() {
                    let _ = writeln!(user, "Target exactly {pages} pages.");
                } else if let Some(range) = params.page_range() {
                    let _ = writeln!(
                        user,
                        "Target between {} and {} pages.",
                        range.min(),
                        range.max()
                    );
                }
            }
        }
    }
}

fn non_positive(field: &str, value: u32) -> ValidationError {
    ValidationError::new(ValidationErrorKind::NonPositiveParameter {
        field: field.to_string(),
        value: value as i64,
    })
}

/// Interpolate the `{topic}` placeholder in a template fragment.
pub fn interpolate_topic(template: &str, topic: &str) -> String {
    template.replace("{topic}", topic)
}
