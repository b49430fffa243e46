//! The end-to-end generation pipeline.

use scrivano_config::{ConfigModel, HashtagStyle};
use scrivano_content::{
    ContentValidator, PromptBuilder, SelectedTemplates, StructuralParams, TemplateSelector,
    assemble_text_post, interpolate_topic, pick_hashtags, selection_index,
};
use scrivano_core::{
    ContentBody, ContentGoal, ContentRequest, ContentType, GeneratedContent, StructuralOverrides,
};
use scrivano_error::{ConfigError, ScrivanoResult};
use scrivano_interface::GenerationClient;
use scrivano_storage::{OutputArtifact, OutputManager};
use std::path::{Path, PathBuf};

/// The generation-and-persistence pipeline.
///
/// One logical pipeline per request: configuration lookup, template
/// selection, prompt building, one call to the generation client,
/// validation, and (separately) persistence. Nothing here retries a
/// failed service call, and a cancelled or failed generation persists
/// nothing. Concurrent invocations with different topics or content
/// types are safe; saves targeting the same path are serialized inside
/// the output manager.
pub struct ContentPipeline<C> {
    config: ConfigModel,
    client: C,
    output: OutputManager,
}

impl<C: GenerationClient> ContentPipeline<C> {
    /// Create a pipeline over a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `FileError` if the output root cannot be prepared.
    pub fn new(
        config: ConfigModel,
        client: C,
        output_root: impl Into<PathBuf>,
    ) -> ScrivanoResult<Self> {
        let output = OutputManager::new(output_root)?;
        Ok(Self {
            config,
            client,
            output,
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &ConfigModel {
        &self.config
    }

    /// Generate validated content for a request.
    ///
    /// # Errors
    ///
    /// - `ConfigError` when the content type is not configured or a
    ///   template list is missing; generation never starts in that case.
    /// - `ValidationError` when the prompt cannot be built or the service
    ///   output fails the content type's structural rules.
    /// - `ServiceError` as surfaced by the generation client; the caller
    ///   decides whether to retry.
    #[tracing::instrument(
        skip(self, request),
        fields(content_type = %request.content_type(), topic = %request.topic())
    )]
    pub async fn generate(&self, request: &ContentRequest) -> ScrivanoResult<GeneratedContent> {
        let content_type = *request.content_type();
        let spec = self.config.content_type(content_type).ok_or_else(|| {
            ConfigError::new(format!("content type '{content_type}' is not configured"))
        })?;
        let params = StructuralParams::resolve(spec, request.overrides());
        let goal = (*request.goal()).unwrap_or_else(|| self.config.primary_goal());

        let selection = TemplateSelector::new(&self.config).select(request, &params)?;
        let prompt = PromptBuilder::new(&self.config).build(request, &selection, &params)?;

        tracing::debug!(
            provider = self.client.provider_name(),
            model = self.client.model_name(),
            "dispatching to generation service"
        );
        let raw = self.client.generate(&prompt).await?;
        let body = self.finish_body(request, &selection, raw);

        let content = ContentValidator::validate(request, goal, &params, &selection, body)?;
        tracing::info!("content generated and validated");
        Ok(content)
    }

    /// Generate validated content from loose parts.
    ///
    /// Convenience over [`Self::generate`] for callers that have not built
    /// a [`ContentRequest`] themselves (the CLI entry point).
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate`].
    pub async fn generate_for(
        &self,
        content_type: ContentType,
        topic: &str,
        goal: Option<ContentGoal>,
        overrides: Option<StructuralOverrides>,
    ) -> ScrivanoResult<GeneratedContent> {
        let request =
            ContentRequest::new(topic, content_type, goal, overrides.unwrap_or_default());
        self.generate(&request).await
    }

    /// Persist validated content and return the artifact.
    ///
    /// # Errors
    ///
    /// Returns `FileError` naming the failed persistence step; safe to
    /// retry.
    pub async fn save(
        &self,
        content: &GeneratedContent,
        backup_root: impl AsRef<Path>,
    ) -> ScrivanoResult<OutputArtifact> {
        self.output.save(content, backup_root).await
    }

    /// Generate and persist in one call.
    ///
    /// # Errors
    ///
    /// Propagates the first error from either stage.
    pub async fn generate_and_save(
        &self,
        request: &ContentRequest,
        backup_root: impl AsRef<Path>,
    ) -> ScrivanoResult<(GeneratedContent, OutputArtifact)> {
        let content = self.generate(request).await?;
        let artifact = self.save(&content, backup_root).await?;
        Ok((content, artifact))
    }

    /// Assemble the final body for text posts.
    ///
    /// The service returns the main body alone; the hook, call to action,
    /// paragraph formatting, and (in `separate` style) the hashtag block
    /// are applied here. Sectioned bodies pass through untouched.
    fn finish_body(
        &self,
        request: &ContentRequest,
        selection: &SelectedTemplates,
        raw: ContentBody,
    ) -> ContentBody {
        if *request.content_type() != ContentType::Text {
            return raw;
        }
        let body = match &raw {
            ContentBody::Text(body) => body,
            _ => return raw,
        };

        let topic = request.topic().trim();
        let formatting = self.config.formatting();
        let hashtags = match formatting.hashtag_style() {
            // Integrated hashtags were woven into the prompt already.
            HashtagStyle::Integrated => Vec::new(),
            HashtagStyle::Separate => pick_hashtags(
                self.config.brand_voice().industry_hashtags(),
                *formatting.hashtag_count(),
                selection_index(topic, ContentType::Text),
            ),
        };

        ContentBody::Text(assemble_text_post(
            &interpolate_topic(selection.hook(), topic),
            body,
            &interpolate_topic(selection.cta(), topic),
            formatting,
            &hashtags,
        ))
    }
}
