//! Final assembly of flat text posts.
//!
//! The generation service returns the main body; the hook, call to
//! action, paragraph formatting, and hashtag block are applied here so
//! the persisted post matches the configured layout.

use scrivano_config::{FormattingRules, HashtagStyle};

/// Assemble a text post from its parts.
///
/// Body paragraphs are trimmed, blank lines dropped, and the optional
/// emoji prefix applied, then hook, body, and call to action are joined
/// with the configured number of blank lines. Hashtags land according to
/// the configured style: `integrated` posts get a tight two-line gap,
/// `separate` posts get the full separator.
pub fn assemble_text_post(
    hook: &str,
    body: &str,
    cta: &str,
    formatting: &FormattingRules,
    hashtags: &[String],
) -> String {
    let separator = "\n".repeat(*formatting.line_breaks());

    let paragraphs: Vec<String> = body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match formatting.emoji_prefix() {
            Some(prefix) => format!("{} {}", prefix, line.trim()),
            None => line.trim().to_string(),
        })
        .collect();

    let mut parts = Vec::new();
    if !hook.trim().is_empty() {
        parts.push(hook.trim().to_string());
    }
    if !paragraphs.is_empty() {
        parts.push(paragraphs.join(&separator));
    }
    if !cta.trim().is_empty() {
        parts.push(cta.trim().to_string());
    }
    let mut post = parts.join(&separator);

    if !hashtags.is_empty() {
        match formatting.hashtag_style() {
            HashtagStyle::Integrated => post.push_str(&format!("\n\n{}", hashtags.join(" "))),
            HashtagStyle::Separate => post.push_str(&format!("{}{}", separator, hashtags.join(" "))),
        }
    }
    post
}

/// Pick hashtags from the pool, deterministically.
///
/// Starts at `index % pool.len()` and walks the pool cyclically, so a
/// fixed topic always yields the same tags while different topics rotate
/// through the pool. Replaces process-global random sampling.
pub fn pick_hashtags(pool: &[String], count: usize, index: u64) -> Vec<String> {
    if pool.is_empty() || count == 0 {
        return Vec::new();
    }
    let take = count.min(pool.len());
    let start = (index % pool.len() as u64) as usize;
    (0..take)
        .map(|offset| format!("#{}", pool[(start + offset) % pool.len()]))
        .collect()
}
