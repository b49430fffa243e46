//! Deterministic template selection.

use crate::StructuralParams;
use scrivano_config::ConfigModel;
use scrivano_core::{ContentGoal, ContentRequest, ContentType};
use scrivano_error::ConfigError;
use sha2::{Digest, Sha256};

/// Template fragments selected for one request.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct SelectedTemplates {
    /// Hook phrase, `{topic}` not yet interpolated
    hook: String,
    /// Call-to-action phrase, `{topic}` not yet interpolated
    cta: String,
    /// Structural section headings for the content type (empty for text)
    sections: Vec<String>,
    /// Option scaffolds for polls (empty otherwise)
    option_scaffolds: Vec<String>,
    /// Identifiers of the chosen fragments, e.g. `hooks.carousel[2]`
    template_ids: Vec<String>,
}

/// Picks hook, call-to-action, and section templates from configuration.
///
/// Selection is a pure function of the configuration and the request: the
/// candidate index derives from a hash of the topic and content type, so a
/// fixed topic always selects the same fragments across runs. There is no
/// process-global random state.
pub struct TemplateSelector<'a> {
    config: &'a ConfigModel,
}

impl<'a> TemplateSelector<'a> {
    /// Create a selector over a loaded configuration.
    pub fn new(config: &'a ConfigModel) -> Self {
        Self { config }
    }

    /// Select templates for a request.
    ///
    /// The call-to-action falls back from the requested goal's list to the
    /// `engagement` list before failing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configuration carries no candidate
    /// list for the requested content type, goal, poll structure family,
    /// or document variant.
    #[tracing::instrument(skip(self, request), fields(content_type = %request.content_type(), topic = %request.topic()))]
    pub fn select(
        &self,
        request: &ContentRequest,
        params: &StructuralParams,
    ) -> Result<SelectedTemplates, ConfigError> {
        let content_type = *request.content_type();
        let goal = (*request.goal()).unwrap_or_else(|| self.config.primary_goal());
        let index = selection_index(request.topic(), content_type);

        let (hook, hook_id) = self.pick_hook(content_type, index)?;
        let (cta, cta_id) = self.pick_cta(goal, index)?;
        let (sections, option_scaffolds, section_id) = self.pick_sections(content_type, params)?;

        let mut template_ids = vec![hook_id, cta_id];
        template_ids.extend(section_id);

        tracing::debug!(index, ids = ?template_ids, "selected templates");

        Ok(SelectedTemplates {
            hook,
            cta,
            sections,
            option_scaffolds,
            template_ids,
        })
    }

    fn pick_hook(
        &self,
        content_type: ContentType,
        index: u64,
    ) -> Result<(String, String), ConfigError> {
        let hooks = self
            .config
            .templates()
            .hooks_for(content_type)
            .filter(|candidates| !candidates.is_empty())
            .ok_or_else(|| {
                ConfigError::new(format!("no hook templates configured for {content_type}"))
            })?;
        let slot = (index % hooks.len() as u64) as usize;
        Ok((
            hooks[slot].clone(),
            format!("hooks.{content_type}[{slot}]"),
        ))
    }

    fn pick_cta(&self, goal: ContentGoal, index: u64) -> Result<(String, String), ConfigError> {
        let templates = self.config.templates();
        let (candidates, family) = match templates.cta_for(goal).filter(|c| !c.is_empty()) {
            Some(candidates) => (candidates, goal),
            None => {
                // Fallback chain ends at the engagement family.
                let fallback = ContentGoal::Engagement;
                let candidates = templates
                    .cta_for(fallback)
                    .filter(|c| !c.is_empty())
                    .ok_or_else(|| {
                        ConfigError::new(format!(
                            "no cta templates configured for {goal} or {fallback}"
                        ))
                    })?;
                (candidates, fallback)
            }
        };
        let slot = (index % candidates.len() as u64) as usize;
        Ok((candidates[slot].clone(), format!("cta.{family}[{slot}]")))
    }

    fn pick_sections(
        &self,
        content_type: ContentType,
        params: &StructuralParams,
    ) -> Result<(Vec<String>, Vec<String>, Option<String>), ConfigError> {
        let templates = self.config.templates();
        match content_type {
            ContentType::Text => Ok((Vec::new(), Vec::new(), None)),
            ContentType::Carousel => {
                let all = templates.carousel_sections();
                let slides = *params.slide_count() as usize;
                if all.len() < slides {
                    return Err(ConfigError::new(format!(
                        "carousel_sections has {} entries, need {} slides",
                        all.len(),
                        slides
                    )));
                }
                Ok((
                    all[..slides].to_vec(),
                    Vec::new(),
                    Some("carousel_sections".to_string()),
                ))
            }
            ContentType::Poll => {
                let family = params.poll_structure();
                let scaffolds = templates.poll_structures().get(family).ok_or_else(|| {
                    ConfigError::new(format!("no poll structure family '{family}' configured"))
                })?;
                let count = (*params.option_count() as usize).min(scaffolds.len());
                Ok((
                    Vec::new(),
                    scaffolds[..count].to_vec(),
                    Some(format!("poll_structures.{family}")),
                ))
            }
            ContentType::Newsletter => {
                let sections = templates.newsletter_sections();
                if sections.is_empty() {
                    return Err(ConfigError::new("newsletter_sections must not be empty"));
                }
                Ok((
                    sections.clone(),
                    Vec::new(),
                    Some("newsletter_sections".to_string()),
                ))
            }
            ContentType::VideoScript => {
                let sections = templates.video_script_sections();
                if sections.is_empty() {
                    return Err(ConfigError::new("video_script_sections must not be empty"));
                }
                Ok((
                    sections.clone(),
                    Vec::new(),
                    Some("video_script_sections".to_string()),
                ))
            }
            ContentType::Document => {
                let variant = *params.document_variant();
                let sections = templates
                    .document_sections_for(variant)
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| {
                        ConfigError::new(format!(
                            "no document_sections configured for variant '{variant}'"
                        ))
                    })?;
                Ok((
                    sections.to_vec(),
                    Vec::new(),
                    Some(format!("document_sections.{variant}")),
                ))
            }
        }
    }
}

/// Deterministic candidate index for a topic and content type.
///
/// First eight bytes of `SHA-256(topic ":" content_type)` as a big-endian
/// `u64`. Stable across runs and platforms, so template selection is
/// reproducible for a fixed topic.
pub fn selection_index(topic: &str, content_type: ContentType) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(topic.as_bytes());
    hasher.update(b":");
    hasher.update(content_type.to_string().as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_stable_for_fixed_inputs() {
        let a = selection_index("rust in production", ContentType::Carousel);
        let b = selection_index("rust in production", ContentType::Carousel);
        assert_eq!(a, b);
    }

    #[test]
    fn index_varies_with_content_type() {
        let text = selection_index("rust in production", ContentType::Text);
        let poll = selection_index("rust in production", ContentType::Poll);
        assert_ne!(text, poll);
    }
}
