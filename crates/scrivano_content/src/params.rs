//! Structural-parameter resolution.

use scrivano_config::{ContentTypeSpec, PageRange};
use scrivano_core::{DocumentVariant, StructuralOverrides};

/// Fallback carousel slide count when neither configuration nor the
/// request supplies one.
const DEFAULT_SLIDE_COUNT: u32 = 8;

/// Fallback poll option count.
const DEFAULT_OPTION_COUNT: u32 = 4;

/// Fallback poll structure family.
const DEFAULT_POLL_STRUCTURE: &str = "implementation";

/// Structural parameters for one request, after merging the content
/// type's configured spec with the caller's overrides.
///
/// Overrides win; configuration fills the gaps; the remaining fields fall
/// back to the defaults the original deployment shipped with.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct StructuralParams {
    /// Resolved carousel slide count
    slide_count: u32,
    /// Resolved poll option count
    option_count: u32,
    /// Resolved video duration in seconds, when configured
    duration_seconds: Option<u32>,
    /// Exact page length, when overridden
    page_length: Option<u32>,
    /// Configured page bounds, when present
    page_range: Option<PageRange>,
    /// Poll structure family
    poll_structure: String,
    /// Document variant
    document_variant: DocumentVariant,
}

impl StructuralParams {
    /// Merge a content type's spec with request overrides.
    pub fn resolve(spec: &ContentTypeSpec, overrides: &StructuralOverrides) -> Self {
        Self {
            slide_count: (*overrides.slide_count())
                .or(*spec.slide_count())
                .unwrap_or(DEFAULT_SLIDE_COUNT),
            option_count: (*overrides.option_count())
                .or(*spec.option_count())
                .unwrap_or(DEFAULT_OPTION_COUNT),
            duration_seconds: (*overrides.duration_seconds()).or(*spec.duration_seconds()),
            page_length: *overrides.page_length(),
            page_range: *spec.page_length(),
            poll_structure: overrides
                .poll_structure()
                .clone()
                .unwrap_or_else(|| DEFAULT_POLL_STRUCTURE.to_string()),
            document_variant: (*overrides.document_variant()).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrivano_core::DocumentVariant;

    #[test]
    fn overrides_win_over_spec() {
        let spec: ContentTypeSpec = toml::from_str("slide_count = 8").unwrap();
        let overrides = StructuralOverrides::with_slide_count(6);
        let params = StructuralParams::resolve(&spec, &overrides);
        assert_eq!(*params.slide_count(), 6);
    }

    #[test]
    fn defaults_fill_gaps() {
        let spec = ContentTypeSpec::default();
        let params = StructuralParams::resolve(&spec, &StructuralOverrides::default());
        assert_eq!(*params.slide_count(), 8);
        assert_eq!(*params.option_count(), 4);
        assert_eq!(params.poll_structure(), "implementation");
        assert_eq!(*params.document_variant(), DocumentVariant::Whitepaper);
    }
}
