//! Shared fixtures for content tests.

use scrivano_config::ConfigModel;
use scrivano_content::StructuralParams;
use scrivano_core::{ContentRequest, ContentType};

pub const SAMPLE: &str = r#"
content_goals = ["engagement", "thought_leadership", "lead_generation"]
optimization_metrics = ["impressions", "comments"]

[content_config]
primary_goal = "engagement"
target_audience = ["engineering leaders"]
industry_context = "developer tooling"

[brand_voice]
tone = ["professional", "direct"]
style = ["conversational"]
personality = ["authentic"]
key_phrases = ["ship with confidence"]
emoji_style = "minimal"
industry_hashtags = ["DevTools", "PlatformEngineering", "Rust", "SRE"]

[content_types.text]

[content_types.carousel]
slide_count = 6

[content_types.poll]
option_count = 4

[content_types.newsletter]

[content_types.video_script]
duration_seconds = 180

[content_types.document]
page_length = { min = 4, max = 12 }

[templates]
carousel_sections = [
  "The Problem",
  "Why It Matters",
  "The Approach",
  "Step One",
  "Step Two",
  "Results",
  "Pitfalls",
  "Takeaways",
]
newsletter_sections = ["Headline", "Deep Dive", "Tool of the Week", "Community"]
video_script_sections = ["Opening", "Context", "Walkthrough", "Close"]

[templates.hooks]
text = ["What nobody tells you about {topic}", "The {topic} lesson we learned too late"]
carousel = ["The {topic} playbook nobody shares"]
poll = ["Quick pulse check on {topic}"]
newsletter = ["This week in {topic}"]
video_script = ["Three minutes on {topic}"]
document = ["A practical guide to {topic}"]

[templates.cta]
engagement = ["What has {topic} looked like for you?", "Tell us your {topic} story below"]
lead_generation = ["Book a walkthrough of our {topic} tooling"]

[templates.poll_structures]
implementation = [
  "We build {topic} in-house",
  "We buy {topic} off the shelf",
  "We mix both for {topic}",
  "We skip {topic} entirely",
]

[templates.document_sections]
whitepaper = ["Executive Summary", "Background", "Analysis", "Recommendations", "Conclusion"]
case_study = ["Challenge", "Solution", "Results"]

[formatting]
line_breaks = 2
hashtag_style = "separate"
hashtag_count = 3

[formatting.layout.text]
hook = 0.1
body = 0.8
cta = 0.1
"#;

pub fn config() -> ConfigModel {
    SAMPLE.parse().unwrap()
}

pub fn request(content_type: ContentType, topic: &str) -> ContentRequest {
    ContentRequest::builder()
        .topic(topic)
        .content_type(content_type)
        .build()
        .unwrap()
}

pub fn params_for(config: &ConfigModel, request: &ContentRequest) -> StructuralParams {
    let spec = config.content_type(*request.content_type()).unwrap();
    StructuralParams::resolve(spec, request.overrides())
}
