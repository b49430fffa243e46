//! Content goal identifiers.

use serde::{Deserialize, Serialize};

/// The goal a piece of content serves.
///
/// Selects the call-to-action template family during template selection.
/// When a request carries no goal, the configured primary goal applies.
///
/// # Examples
///
/// ```
/// use scrivano_core::ContentGoal;
/// use std::str::FromStr;
///
/// assert_eq!(format!("{}", ContentGoal::LeadGeneration), "lead_generation");
/// assert_eq!(
///     ContentGoal::from_str("engagement").unwrap(),
///     ContentGoal::Engagement
/// );
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContentGoal {
    /// Establish authority on a subject
    ThoughtLeadership,
    /// Maximize interaction
    Engagement,
    /// Capture prospects
    LeadGeneration,
    /// Grow brand recognition
    BrandAwareness,
    /// Attract candidates
    Recruitment,
}
