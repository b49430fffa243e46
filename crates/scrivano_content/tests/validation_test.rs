//! Tests for per-type output validation.

mod support;

use scrivano_content::{ContentValidator, MAX_TEXT_CHARS, SelectedTemplates, TemplateSelector};
use scrivano_core::{
    ContentBody, ContentGoal, ContentRequest, ContentType, Section, StructuralOverrides,
};
use scrivano_error::ValidationErrorKind;
use support::{config, params_for, request};

fn selection_for(request: &ContentRequest) -> SelectedTemplates {
    let config = config();
    let params = params_for(&config, request);
    TemplateSelector::new(&config)
        .select(request, &params)
        .unwrap()
}

fn validate(request: &ContentRequest, body: ContentBody) -> Result<(), ValidationErrorKind> {
    let config = config();
    let params = params_for(&config, request);
    let selection = selection_for(request);
    ContentValidator::validate(request, ContentGoal::Engagement, &params, &selection, body)
        .map(|_| ())
        .map_err(|e| e.kind)
}

fn sections(headings: &[&str]) -> ContentBody {
    ContentBody::Sections(
        headings
            .iter()
            .map(|h| Section::new(*h, format!("{h} content")))
            .collect(),
    )
}

#[test]
fn text_within_cap_is_accepted() {
    let request = request(ContentType::Text, "rust in production");
    let content = ContentBody::Text("A short, honest post.".to_string());
    assert!(validate(&request, content).is_ok());
}

#[test]
fn text_over_cap_is_rejected() {
    let request = request(ContentType::Text, "rust in production");
    let content = ContentBody::Text("x".repeat(MAX_TEXT_CHARS + 1));
    assert!(matches!(
        validate(&request, content),
        Err(ValidationErrorKind::BodyTooLong { max, actual })
            if max == MAX_TEXT_CHARS && actual == MAX_TEXT_CHARS + 1
    ));
}

#[test]
fn empty_text_is_rejected() {
    let request = request(ContentType::Text, "rust in production");
    assert!(matches!(
        validate(&request, ContentBody::Text("   ".to_string())),
        Err(ValidationErrorKind::EmptyBody { .. })
    ));
}

#[test]
fn wrong_shape_is_rejected() {
    let request = request(ContentType::Text, "rust in production");
    assert!(matches!(
        validate(&request, ContentBody::Options(vec!["A".to_string()])),
        Err(ValidationErrorKind::BodyShape { .. })
    ));
}

#[test]
fn carousel_with_exact_slide_count_is_accepted() {
    let request = ContentRequest::builder()
        .topic("incident reviews")
        .content_type(ContentType::Carousel)
        .overrides(StructuralOverrides::with_slide_count(6))
        .build()
        .unwrap();
    let body = sections(&["A", "B", "C", "D", "E", "F"]);
    assert!(validate(&request, body).is_ok());
}

#[test]
fn carousel_missing_a_slide_is_rejected() {
    let request = request(ContentType::Carousel, "incident reviews");
    let body = sections(&["A", "B", "C", "D", "E"]);
    assert!(matches!(
        validate(&request, body),
        Err(ValidationErrorKind::SectionCount { expected: 6, actual: 5, .. })
    ));
}

#[test]
fn carousel_with_empty_slide_is_rejected() {
    let request = request(ContentType::Carousel, "incident reviews");
    let mut slides: Vec<Section> = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|h| Section::new(*h, "body"))
        .collect();
    slides.push(Section::new("F", "   "));
    assert!(matches!(
        validate(&request, ContentBody::Sections(slides)),
        Err(ValidationErrorKind::EmptySection { name }) if name == "F"
    ));
}

#[test]
fn poll_with_duplicate_option_is_rejected_case_insensitively() {
    let request = request(ContentType::Poll, "build vs buy");
    let body = ContentBody::Options(
        ["Yes", "No", "Maybe", "yes"].iter().map(|s| s.to_string()).collect(),
    );
    assert!(matches!(
        validate(&request, body),
        Err(ValidationErrorKind::DuplicateOption { option }) if option == "yes"
    ));
}

#[test]
fn poll_with_unique_options_is_accepted() {
    let request = request(ContentType::Poll, "build vs buy");
    let body = ContentBody::Options(
        ["Build", "Buy", "Blend"].iter().map(|s| s.to_string()).collect(),
    );
    assert!(validate(&request, body).is_ok());
}

#[test]
fn poll_option_count_bounds_are_enforced() {
    let request = request(ContentType::Poll, "build vs buy");
    let one = ContentBody::Options(vec!["Only".to_string()]);
    assert!(matches!(
        validate(&request, one),
        Err(ValidationErrorKind::OptionCount { min: 2, max: 4, actual: 1 })
    ));

    let five = ContentBody::Options(
        ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect(),
    );
    assert!(matches!(
        validate(&request, five),
        Err(ValidationErrorKind::OptionCount { actual: 5, .. })
    ));
}

#[test]
fn newsletter_requires_every_configured_section() {
    let request = request(ContentType::Newsletter, "platform weekly");
    let body = sections(&["Headline", "Deep Dive", "Tool of the Week"]);
    assert!(matches!(
        validate(&request, body),
        Err(ValidationErrorKind::MissingSection { name }) if name == "Community"
    ));
}

#[test]
fn newsletter_with_all_sections_is_accepted() {
    let request = request(ContentType::Newsletter, "platform weekly");
    let body = sections(&["Headline", "Deep Dive", "Tool of the Week", "Community"]);
    assert!(validate(&request, body).is_ok());
}

#[test]
fn video_timings_covering_duration_are_accepted() {
    let request = request(ContentType::VideoScript, "ci pipelines");
    let body = ContentBody::Sections(vec![
        Section::timed("Opening", "...", 0, 27),
        Section::timed("Context", "...", 27, 81),
        Section::timed("Walkthrough", "...", 81, 171),
        Section::timed("Close", "...", 171, 180),
    ]);
    assert!(validate(&request, body).is_ok());
}

#[test]
fn video_timing_gap_is_rejected() {
    let request = request(ContentType::VideoScript, "ci pipelines");
    let body = ContentBody::Sections(vec![
        Section::timed("Opening", "...", 0, 27),
        Section::timed("Close", "...", 30, 180),
    ]);
    assert!(matches!(
        validate(&request, body),
        Err(ValidationErrorKind::TimingGap { at_seconds: 27 })
    ));
}

#[test]
fn video_timing_overlap_is_rejected() {
    let request = request(ContentType::VideoScript, "ci pipelines");
    let body = ContentBody::Sections(vec![
        Section::timed("Opening", "...", 0, 30),
        Section::timed("Close", "...", 27, 180),
    ]);
    assert!(matches!(
        validate(&request, body),
        Err(ValidationErrorKind::TimingOverlap { at_seconds: 27 })
    ));
}

#[test]
fn video_short_coverage_is_rejected() {
    let request = request(ContentType::VideoScript, "ci pipelines");
    let body = ContentBody::Sections(vec![
        Section::timed("Opening", "...", 0, 90),
        Section::timed("Close", "...", 90, 150),
    ]);
    assert!(matches!(
        validate(&request, body),
        Err(ValidationErrorKind::DurationMismatch { expected: 180, actual: 150 })
    ));
}

#[test]
fn video_section_without_timing_is_rejected() {
    let request = request(ContentType::VideoScript, "ci pipelines");
    let body = ContentBody::Sections(vec![Section::new("Opening", "...")]);
    assert!(matches!(
        validate(&request, body),
        Err(ValidationErrorKind::MissingTiming { name }) if name == "Opening"
    ));
}

#[test]
fn document_sections_must_match_variant_in_order() {
    let request = request(ContentType::Document, "migration strategy");
    let out_of_order = sections(&[
        "Executive Summary",
        "Analysis",
        "Background",
        "Recommendations",
        "Conclusion",
    ]);
    assert!(matches!(
        validate(&request, out_of_order),
        Err(ValidationErrorKind::SectionOrder { expected, actual })
            if expected == "Background" && actual == "Analysis"
    ));
}

#[test]
fn document_with_required_sections_is_accepted() {
    let request = request(ContentType::Document, "migration strategy");
    let body = sections(&[
        "Executive Summary",
        "Background",
        "Analysis",
        "Recommendations",
        "Conclusion",
    ]);
    assert!(validate(&request, body).is_ok());
}

#[test]
fn document_section_count_mismatch_is_rejected() {
    let request = request(ContentType::Document, "migration strategy");
    let body = sections(&["Executive Summary", "Background"]);
    assert!(matches!(
        validate(&request, body),
        Err(ValidationErrorKind::SectionCount { expected: 5, actual: 2, .. })
    ));
}
