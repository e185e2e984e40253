//! Stroke similarity scoring.
//!
//! Both strokes are normalized into their own unit frame, resampled to the
//! same point count and compared index by index. The comparison is
//! direction-sensitive: a stroke traced backwards scores poorly unless
//! [`CurveConfig::allow_reversed`] is set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CurveConfig;
use crate::normalize::normalize;
use crate::point::Point;
use crate::resample::{resample_with, ShortStrokePolicy, DEFAULT_SAMPLE_COUNT};

/// Default similarity a trace needs to earn a point.
pub const DEFAULT_PASS_THRESHOLD: u8 = 80;

/// A similarity score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Similarity(u8);

impl Similarity {
    pub const ZERO: Similarity = Similarity(0);
    pub const MAX: Similarity = Similarity(100);

    /// Clamp `value` into `0..=100`.
    pub fn new(value: u8) -> Self {
        Similarity(value.min(100))
    }

    /// Convert a unit-range closeness (1.0 = identical) into a score.
    pub fn from_unit(closeness: f64) -> Self {
        Similarity((closeness.clamp(0.0, 1.0) * 100.0).round() as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> FeedbackTier {
        FeedbackTier::from_similarity(self)
    }

    /// Whether this score earns a point under the given threshold.
    pub fn earns_point(self, threshold: u8) -> bool {
        self.0 >= threshold
    }
}

impl From<Similarity> for u8 {
    fn from(s: Similarity) -> Self {
        s.0
    }
}

impl TryFrom<u8> for Similarity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 100 {
            Ok(Similarity(value))
        } else {
            Err(format!("similarity {value} is out of range 0..=100"))
        }
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse feedback shown to the learner for a trace score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    KeepPracticing,
    GettingThere,
    Good,
    Great,
    Perfect,
}

impl FeedbackTier {
    pub fn from_similarity(score: Similarity) -> Self {
        match score.value() {
            90..=u8::MAX => FeedbackTier::Perfect,
            80..=89 => FeedbackTier::Great,
            70..=79 => FeedbackTier::Good,
            50..=69 => FeedbackTier::GettingThere,
            _ => FeedbackTier::KeepPracticing,
        }
    }

    /// Message shown next to the score.
    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Perfect => "Perfect!",
            FeedbackTier::Great => "Great job!",
            FeedbackTier::Good => "Good!",
            FeedbackTier::GettingThere => "Getting there!",
            FeedbackTier::KeepPracticing => "Keep practicing!",
        }
    }
}

impl fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackTier::Perfect => write!(f, "perfect"),
            FeedbackTier::Great => write!(f, "great"),
            FeedbackTier::Good => write!(f, "good"),
            FeedbackTier::GettingThere => write!(f, "getting there"),
            FeedbackTier::KeepPracticing => write!(f, "keep practicing"),
        }
    }
}

/// Score `student` against `reference` with the default settings.
pub fn compare(reference: &[Point], student: &[Point]) -> Similarity {
    score(
        reference,
        student,
        DEFAULT_SAMPLE_COUNT,
        ShortStrokePolicy::Interpolate,
    )
}

/// Score `student` against `reference` using `config`.
///
/// With `allow_reversed`, the student stroke is also scored back to front
/// and the better of the two scores is kept.
pub fn compare_with(reference: &[Point], student: &[Point], config: &CurveConfig) -> Similarity {
    let forward = score(reference, student, config.sample_count, config.short_stroke);
    if !config.allow_reversed || forward == Similarity::MAX {
        return forward;
    }

    let reversed: Vec<Point> = student.iter().rev().copied().collect();
    let backward = score(reference, &reversed, config.sample_count, config.short_stroke);
    tracing::debug!(%forward, %backward, "scored stroke in both directions");
    forward.max(backward)
}

fn score(reference: &[Point], student: &[Point], n: usize, policy: ShortStrokePolicy) -> Similarity {
    if reference.is_empty() || student.is_empty() {
        return Similarity::ZERO;
    }

    let reference = resample_with(&normalize(reference), n, policy);
    let student = resample_with(&normalize(student), n, policy);

    let len = reference.len().min(student.len());
    if len == 0 {
        return Similarity::ZERO;
    }

    let total: f64 = reference
        .iter()
        .zip(&student)
        .map(|(r, s)| r.distance(*s))
        .sum();
    let avg = total / len as f64;

    Similarity::from_unit(1.0 - avg)
}
