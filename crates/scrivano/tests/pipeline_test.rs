//! End-to-end pipeline tests with a scripted generation client.

use async_trait::async_trait;
use scrivano::{
    ConfigModel, ContentBody, ContentPipeline, ContentRequest, ContentType, GenerationClient,
    Prompt, ScrivanoErrorKind, ScrivanoResult, Section, ServiceError, ServiceErrorKind,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

const SAMPLE: &str = r#"
content_goals = ["engagement", "thought_leadership"]
optimization_metrics = ["impressions"]

[content_config]
primary_goal = "engagement"
target_audience = ["engineering leaders"]
industry_context = "developer tooling"

[brand_voice]
tone = ["professional"]
style = ["conversational"]
personality = ["authentic"]
emoji_style = "minimal"
industry_hashtags = ["DevTools", "PlatformEngineering", "Rust"]

[content_types.text]

[content_types.carousel]
slide_count = 3

[content_types.poll]
option_count = 3

[content_types.video_script]
duration_seconds = 180

[templates]
carousel_sections = ["The Problem", "The Approach", "Takeaways"]
video_script_sections = ["Opening", "Context", "Walkthrough", "Close"]

[templates.hooks]
text = ["What nobody tells you about {topic}"]
carousel = ["The {topic} playbook nobody shares"]
poll = ["Quick pulse check on {topic}"]
video_script = ["Three minutes on {topic}"]

[templates.cta]
engagement = ["What has {topic} looked like for you?"]

[templates.poll_structures]
implementation = ["We build {topic} in-house", "We buy {topic}", "We mix both for {topic}"]
"#;

/// Returns a fixed body and counts invocations.
struct ScriptedClient {
    body: ContentBody,
    calls: Arc<AtomicUsize>,
}

impl ScriptedClient {
    fn new(body: ContentBody) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                body,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn generate(&self, _prompt: &Prompt) -> ScrivanoResult<ContentBody> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-1"
    }
}

/// Fails every call with the given service error kind.
struct FailingClient {
    kind: ServiceErrorKind,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl GenerationClient for FailingClient {
    async fn generate(&self, _prompt: &Prompt) -> ScrivanoResult<ContentBody> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ServiceError::new(self.kind, "scripted failure"))?
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }

    fn model_name(&self) -> &str {
        "failing-1"
    }
}

fn config() -> ConfigModel {
    SAMPLE.parse().unwrap()
}

fn request(content_type: ContentType, topic: &str) -> ContentRequest {
    ContentRequest::builder()
        .topic(topic)
        .content_type(content_type)
        .build()
        .unwrap()
}

#[tokio::test]
async fn carousel_flows_end_to_end() {
    let out = TempDir::new().unwrap();
    let backups = TempDir::new().unwrap();
    let (client, calls) = ScriptedClient::new(ContentBody::Sections(vec![
        Section::new("The Problem", "Reviews stall."),
        Section::new("The Approach", "Timebox them."),
        Section::new("Takeaways", "Start small."),
    ]));
    let pipeline = ContentPipeline::new(config(), client, out.path()).unwrap();

    let request = request(ContentType::Carousel, "incident reviews");
    let (content, artifact) = pipeline
        .generate_and_save(&request, backups.path())
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(*content.content_type(), ContentType::Carousel);
    assert_eq!(content.body().len(), 3);
    assert!(
        content
            .metadata()
            .template_ids()
            .iter()
            .any(|id| id.starts_with("hooks.carousel["))
    );
    assert!(artifact.primary_path().exists());
}

#[tokio::test]
async fn unknown_content_type_never_reaches_the_client() {
    let out = TempDir::new().unwrap();
    let (client, calls) = ScriptedClient::new(ContentBody::Text("unused".to_string()));
    let pipeline = ContentPipeline::new(config(), client, out.path()).unwrap();

    // newsletter is not configured in SAMPLE
    let request = request(ContentType::Newsletter, "platform weekly");
    let err = pipeline.generate(&request).await.unwrap_err();

    assert!(matches!(err.kind(), ScrivanoErrorKind::Config(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn service_errors_surface_without_internal_retry() {
    let out = TempDir::new().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let client = FailingClient {
        kind: ServiceErrorKind::Quota,
        calls: calls.clone(),
    };
    let pipeline = ContentPipeline::new(config(), client, out.path()).unwrap();

    let request = request(ContentType::Text, "rust in production");
    let err = pipeline.generate(&request).await.unwrap_err();

    match err.kind() {
        ScrivanoErrorKind::Service(service_err) => {
            assert_eq!(service_err.kind, ServiceErrorKind::Quota);
        }
        other => panic!("expected service error, got {other:?}"),
    }
    // Exactly one attempt: retry policy belongs to the caller.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn text_posts_are_assembled_with_hook_cta_and_hashtags() {
    let out = TempDir::new().unwrap();
    let (client, _) = ScriptedClient::new(ContentBody::Text(
        "Most teams discover this the hard way.\nWe did too.".to_string(),
    ));
    let pipeline = ContentPipeline::new(config(), client, out.path()).unwrap();

    let request = request(ContentType::Text, "rust in production");
    let content = pipeline.generate(&request).await.unwrap();

    let body = match content.body() {
        ContentBody::Text(text) => text,
        other => panic!("expected text body, got {other:?}"),
    };
    assert!(body.contains("What nobody tells you about rust in production"));
    assert!(body.contains("Most teams discover this the hard way."));
    assert!(body.contains("What has rust in production looked like for you?"));
    assert!(body.contains('#'));
}

#[tokio::test]
async fn invalid_service_output_is_rejected_not_repaired() {
    let out = TempDir::new().unwrap();
    // Two slides for a three-slide carousel.
    let (client, calls) = ScriptedClient::new(ContentBody::Sections(vec![
        Section::new("The Problem", "Reviews stall."),
        Section::new("Takeaways", "Start small."),
    ]));
    let pipeline = ContentPipeline::new(config(), client, out.path()).unwrap();

    let request = request(ContentType::Carousel, "incident reviews");
    let err = pipeline.generate(&request).await.unwrap_err();

    assert!(matches!(err.kind(), ScrivanoErrorKind::Validation(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn video_script_example_timings_validate() {
    let out = TempDir::new().unwrap();
    let backups = TempDir::new().unwrap();
    let (client, _) = ScriptedClient::new(ContentBody::Sections(vec![
        Section::timed("Opening", "Welcome.", 0, 27),
        Section::timed("Context", "Where we started.", 27, 81),
        Section::timed("Walkthrough", "The pipeline.", 81, 171),
        Section::timed("Close", "Wrap up.", 171, 180),
    ]));
    let pipeline = ContentPipeline::new(config(), client, out.path()).unwrap();

    let request = request(ContentType::VideoScript, "ci pipelines");
    let (content, artifact) = pipeline
        .generate_and_save(&request, backups.path())
        .await
        .unwrap();

    assert_eq!(content.body().len(), 4);
    let stored = std::fs::read_to_string(artifact.primary_path()).unwrap();
    assert!(stored.contains("## Opening (0s-27s)"));
}

#[tokio::test]
async fn generate_for_builds_the_request_itself() {
    let out = TempDir::new().unwrap();
    let (client, _) = ScriptedClient::new(ContentBody::Text("A body.".to_string()));
    let pipeline = ContentPipeline::new(config(), client, out.path()).unwrap();

    let content = pipeline
        .generate_for(ContentType::Text, "rust in production", None, None)
        .await
        .unwrap();
    assert_eq!(content.topic(), "rust in production");
    assert_eq!(
        *content.metadata().goal(),
        Some(scrivano::ContentGoal::Engagement)
    );
}

#[tokio::test]
async fn duplicate_poll_options_from_the_service_fail_validation() {
    let out = TempDir::new().unwrap();
    let (client, _) = ScriptedClient::new(ContentBody::Options(
        ["Yes", "No", "yes"].iter().map(|s| s.to_string()).collect(),
    ));
    let pipeline = ContentPipeline::new(config(), client, out.path()).unwrap();

    let request = request(ContentType::Poll, "build vs buy");
    let err = pipeline.generate(&request).await.unwrap_err();
    assert!(matches!(err.kind(), ScrivanoErrorKind::Validation(_)));
}
