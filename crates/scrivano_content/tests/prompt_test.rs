//! Tests for prompt assembly.

mod support;

use scrivano_content::{PromptBuilder, TemplateSelector};
use scrivano_core::{ContentRequest, ContentType, StructuralOverrides};
use scrivano_error::ValidationErrorKind;
use support::{config, params_for, request};

fn build_prompt(request: &ContentRequest) -> Result<scrivano_core::Prompt, ValidationErrorKind> {
    let config = config();
    let params = params_for(&config, request);
    let selection = TemplateSelector::new(&config)
        .select(request, &params)
        .unwrap();
    PromptBuilder::new(&config)
        .build(request, &selection, &params)
        .map_err(|e| e.kind)
}

#[test]
fn prompt_contains_the_topic() {
    for content_type in [
        ContentType::Text,
        ContentType::Carousel,
        ContentType::Poll,
        ContentType::Newsletter,
        ContentType::VideoScript,
        ContentType::Document,
    ] {
        let request = request(content_type, "zero-downtime migrations");
        let prompt = build_prompt(&request).unwrap();
        assert!(
            prompt.mentions("zero-downtime migrations"),
            "{content_type} prompt lacks topic"
        );
    }
}

#[test]
fn system_half_carries_brand_voice() {
    let request = request(ContentType::Text, "rust in production");
    let prompt = build_prompt(&request).unwrap();
    assert!(prompt.system().contains("professional"));
    assert!(prompt.system().contains("engineering leaders"));
}

#[test]
fn whitespace_topic_is_rejected() {
    let request = request(ContentType::Text, "   ");
    assert!(matches!(
        build_prompt(&request),
        Err(ValidationErrorKind::EmptyTopic)
    ));
}

#[test]
fn carousel_constraints_carry_slide_count() {
    let request = request(ContentType::Carousel, "incident reviews");
    let prompt = build_prompt(&request).unwrap();
    assert_eq!(*prompt.constraints().slide_count(), Some(6));
    assert!(prompt.mentions("exactly 6 slides"));
}

#[test]
fn video_duration_constraint_is_explicit() {
    let request = request(ContentType::VideoScript, "ci pipelines");
    let prompt = build_prompt(&request).unwrap();
    assert_eq!(*prompt.constraints().duration_seconds(), Some(180));
    assert!(prompt.mentions("180 seconds"));
}

#[test]
fn zero_duration_override_is_rejected() {
    let request = ContentRequest::builder()
        .topic("ci pipelines")
        .content_type(ContentType::VideoScript)
        .overrides(StructuralOverrides::with_duration_seconds(0))
        .build()
        .unwrap();
    assert!(matches!(
        build_prompt(&request),
        Err(ValidationErrorKind::NonPositiveParameter { field, .. }) if field == "duration_seconds"
    ));
}

#[test]
fn integrated_hashtags_land_in_the_prompt() {
    let integrated = support::SAMPLE.replace(
        "hashtag_style = \"separate\"",
        "hashtag_style = \"integrated\"",
    );
    let config: scrivano_config::ConfigModel = integrated.parse().unwrap();
    let request = request(ContentType::Text, "rust in production");
    let params = params_for(&config, &request);
    let selection = TemplateSelector::new(&config)
        .select(&request, &params)
        .unwrap();
    let prompt = PromptBuilder::new(&config)
        .build(&request, &selection, &params)
        .unwrap();
    assert!(prompt.mentions("#"));
    assert!(prompt.user().contains("hashtags"));
}

#[test]
fn separate_hashtags_stay_out_of_the_prompt() {
    let request = request(ContentType::Text, "rust in production");
    let prompt = build_prompt(&request).unwrap();
    assert!(!prompt.user().contains("hashtags"));
}

#[test]
fn document_prompt_targets_page_range() {
    let request = request(ContentType::Document, "migration strategy");
    let prompt = build_prompt(&request).unwrap();
    assert!(prompt.mentions("between 4 and 12 pages"));
}
