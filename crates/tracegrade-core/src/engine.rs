//! Grading engine.
//!
//! The `Evaluator` is constructed once with its configuration and handed to
//! whatever needs to grade attempts. It holds no mutable state, so a shared
//! reference can be used from any number of threads.

use std::time::Instant;

use anyhow::Result;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::curve::compare_with;
use crate::lexical::{edit_distance, is_token_sequence_match, is_word_match_with};
use crate::model::{Attempt, AttemptBatch, Response};
use crate::report::{BatchSummary, GradeReport, Summary};
use crate::results::Outcome;
use crate::token::normalize_token;

/// Grades attempts against their references.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EngineConfig,
}

impl Evaluator {
    /// Create an evaluator, rejecting out-of-range settings.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Grade a single attempt.
    pub fn evaluate(&self, attempt: &Attempt) -> Outcome {
        let outcome = match &attempt.response {
            Response::Trace { reference, student } => {
                if reference.is_empty() {
                    tracing::warn!(attempt = %attempt.id, "reference stroke is empty");
                }
                let similarity = compare_with(reference, student, &self.config.curve);
                let passed = similarity.earns_point(self.config.curve.pass_threshold);
                Outcome {
                    attempt_id: attempt.id.clone(),
                    kind: attempt.kind(),
                    passed,
                    points: u32::from(passed),
                    similarity: Some(similarity),
                    tier: Some(similarity.tier()),
                    edit_distance: None,
                }
            }
            Response::Word { spoken, target } => {
                let passed = is_word_match_with(spoken, target, &self.config.lexical);
                let distance = edit_distance(&normalize_token(spoken), &normalize_token(target));
                Outcome {
                    attempt_id: attempt.id.clone(),
                    kind: attempt.kind(),
                    passed,
                    points: u32::from(passed),
                    similarity: None,
                    tier: None,
                    edit_distance: Some(distance),
                }
            }
            Response::Syllables {
                selected,
                expected,
                target,
            } => {
                let passed = is_token_sequence_match(selected, expected, target);
                Outcome {
                    attempt_id: attempt.id.clone(),
                    kind: attempt.kind(),
                    passed,
                    points: u32::from(passed),
                    similarity: None,
                    tier: None,
                    edit_distance: None,
                }
            }
        };

        tracing::debug!(
            attempt = %outcome.attempt_id,
            kind = %outcome.kind,
            passed = outcome.passed,
            "graded attempt"
        );
        outcome
    }

    /// Grade every attempt in a batch and summarize the results.
    pub fn grade_batch(&self, batch: &AttemptBatch) -> GradeReport {
        let start = Instant::now();
        let outcomes: Vec<Outcome> = batch.attempts.iter().map(|a| self.evaluate(a)).collect();
        let summary = Summary::from_outcomes(&outcomes);

        tracing::info!(
            batch = %batch.id,
            attempts = summary.attempts,
            points = summary.points,
            "graded batch"
        );

        GradeReport {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            batch: BatchSummary {
                id: batch.id.clone(),
                name: batch.name.clone(),
                attempt_count: batch.attempts.len(),
            },
            outcomes,
            summary,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }
}
