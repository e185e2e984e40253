//! Grade report types with JSON persistence and summaries.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::curve::FeedbackTier;
use crate::results::Outcome;

/// The result of grading one attempt batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the graded batch.
    pub batch: BatchSummary,
    /// Individual outcomes, in batch order.
    pub outcomes: Vec<Outcome>,
    /// Aggregate figures.
    pub summary: Summary,
    /// Wall-clock grading time in milliseconds.
    pub duration_ms: u64,
}

/// Summary of an attempt batch (without the attempts themselves).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub id: String,
    pub name: String,
    pub attempt_count: usize,
}

/// Aggregate figures across a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub attempts: usize,
    pub passed: usize,
    pub points: u32,
    /// Mean trace similarity; `None` when the batch has no trace attempts.
    pub mean_similarity: Option<f64>,
    /// How many trace attempts landed in each tier, best tier first.
    pub tiers: Vec<TierCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierCount {
    pub tier: FeedbackTier,
    pub count: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let scores: Vec<f64> = outcomes
            .iter()
            .filter_map(|o| o.similarity)
            .map(|s| f64::from(s.value()))
            .collect();
        let mean_similarity = if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        };

        let tiers = [
            FeedbackTier::Perfect,
            FeedbackTier::Great,
            FeedbackTier::Good,
            FeedbackTier::GettingThere,
            FeedbackTier::KeepPracticing,
        ]
        .into_iter()
        .map(|tier| TierCount {
            tier,
            count: outcomes.iter().filter(|o| o.tier == Some(tier)).count(),
        })
        .filter(|t| t.count > 0)
        .collect();

        Summary {
            attempts: outcomes.len(),
            passed: outcomes.iter().filter(|o| o.passed).count(),
            points: outcomes.iter().map(|o| o.points).sum(),
            mean_similarity,
            tiers,
        }
    }

    /// Fraction of accepted attempts, `0.0` for an empty batch.
    pub fn pass_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.passed as f64 / self.attempts as f64
        }
    }
}

impl GradeReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: GradeReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.batch.name));
        md.push_str(&format!(
            "**Summary:** {} points, {}/{} accepted ({:.0}%)",
            self.summary.points,
            self.summary.passed,
            self.summary.attempts,
            self.summary.pass_rate() * 100.0
        ));
        if let Some(mean) = self.summary.mean_similarity {
            md.push_str(&format!(", mean trace similarity {mean:.1}"));
        }
        md.push_str("\n\n");

        md.push_str("| Attempt | Kind | Result | Points |\n");
        md.push_str("|---------|------|--------|--------|\n");
        for o in &self.outcomes {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                o.attempt_id,
                o.kind,
                o.verdict(),
                o.points
            ));
        }

        if !self.summary.tiers.is_empty() {
            md.push_str("\n### Trace feedback\n\n");
            for t in &self.summary.tiers {
                md.push_str(&format!("- {}: {}\n", t.tier, t.count));
            }
        }

        md
    }
}
