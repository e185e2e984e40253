//! Per-attempt grading results.

use serde::{Deserialize, Serialize};

use crate::curve::{FeedbackTier, Similarity};
use crate::model::AttemptKind;

/// The graded result of one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Attempt identifier.
    pub attempt_id: String,
    pub kind: AttemptKind,
    /// Whether the response was accepted.
    pub passed: bool,
    /// Points awarded (one per accepted response).
    pub points: u32,
    /// Stroke similarity, for trace attempts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<Similarity>,
    /// Feedback tier, for trace attempts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<FeedbackTier>,
    /// Edit distance between normalized response and target, for word attempts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_distance: Option<usize>,
}

impl Outcome {
    /// Short human-readable verdict.
    pub fn verdict(&self) -> String {
        match (self.similarity, self.tier) {
            (Some(score), Some(tier)) => format!("{score}/100 {}", tier.message()),
            _ if self.passed => "Correct!".to_string(),
            _ => "Try again!".to_string(),
        }
    }
}
