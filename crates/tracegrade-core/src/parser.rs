//! Attempt batch parser.
//!
//! Loads attempt batches from TOML or JSON files and directories, and
//! validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::GradeError;
use crate::model::{Attempt, AttemptBatch, AttemptKind, Response};
use crate::point::Point;
use crate::token::normalize_token;

/// Intermediate structure for parsing attempt batch files.
#[derive(Debug, Deserialize)]
struct RawBatchFile {
    batch: RawBatchHeader,
    #[serde(default)]
    attempts: Vec<RawAttempt>,
}

#[derive(Debug, Deserialize)]
struct RawBatchHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct RawAttempt {
    id: String,
    kind: String,
    #[serde(default)]
    reference: Vec<Point>,
    #[serde(default)]
    student: Vec<Point>,
    #[serde(default)]
    spoken: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    selected: Vec<String>,
    #[serde(default)]
    expected: Vec<String>,
}

impl RawAttempt {
    fn into_attempt(self) -> Result<Attempt> {
        let kind: AttemptKind = self
            .kind
            .parse()
            .map_err(|e: String| anyhow::anyhow!("attempt '{}': {}", self.id, e))?;

        let response = match kind {
            AttemptKind::Trace => Response::Trace {
                reference: self.reference,
                student: self.student,
            },
            AttemptKind::Word => Response::Word {
                spoken: self.spoken.unwrap_or_default(),
                target: self
                    .target
                    .with_context(|| format!("attempt '{}': word attempt needs a target", self.id))?,
            },
            AttemptKind::Syllables => Response::Syllables {
                selected: self.selected,
                expected: self.expected,
                target: self.target.with_context(|| {
                    format!("attempt '{}': syllables attempt needs a target", self.id)
                })?,
            },
        };

        Ok(Attempt {
            id: self.id,
            response,
        })
    }
}

/// File formats an attempt batch can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    Toml,
    Json,
}

impl BatchFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, GradeError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(BatchFormat::Toml),
            Some("json") => Ok(BatchFormat::Json),
            other => Err(GradeError::UnknownFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Parse a single attempt batch file. The format follows the extension.
pub fn parse_attempt_batch(path: &Path) -> Result<AttemptBatch> {
    let format = BatchFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read attempt file: {}", path.display()))?;

    parse_attempt_batch_str(&content, format, path)
}

/// Parse attempt batch text (useful for testing).
pub fn parse_attempt_batch_str(
    content: &str,
    format: BatchFormat,
    source_path: &Path,
) -> Result<AttemptBatch> {
    let parsed: RawBatchFile = match format {
        BatchFormat::Toml => toml::from_str(content)
            .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?,
        BatchFormat::Json => serde_json::from_str(content)
            .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?,
    };

    let attempts = parsed
        .attempts
        .into_iter()
        .map(RawAttempt::into_attempt)
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("invalid attempt in {}", source_path.display()))?;

    Ok(AttemptBatch {
        id: parsed.batch.id,
        name: parsed.batch.name,
        description: parsed.batch.description,
        attempts,
    })
}

/// Recursively load all `.toml` and `.json` attempt batches from a directory.
pub fn load_attempt_directory(dir: &Path) -> Result<Vec<AttemptBatch>> {
    let mut batches = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            batches.extend(load_attempt_directory(&path)?);
        } else if BatchFormat::from_path(&path).is_ok() {
            match parse_attempt_batch(&path) {
                Ok(batch) => batches.push(batch),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(batches)
}

/// Load a batch file, or every batch under a directory.
pub fn load_attempts(path: &Path) -> Result<Vec<AttemptBatch>> {
    if path.is_dir() {
        load_attempt_directory(path)
    } else {
        Ok(vec![parse_attempt_batch(path)?])
    }
}

/// A warning from attempt batch validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The attempt ID (if applicable).
    pub attempt_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn for_attempt(attempt: &Attempt, message: impl Into<String>) -> Self {
        Self {
            attempt_id: Some(attempt.id.clone()),
            message: message.into(),
        }
    }
}

/// Validate an attempt batch for common issues.
pub fn validate_attempt_batch(batch: &AttemptBatch) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if batch.attempts.is_empty() {
        warnings.push(ValidationWarning {
            attempt_id: None,
            message: "batch has no attempts".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for attempt in &batch.attempts {
        if !seen_ids.insert(attempt.id.as_str()) {
            warnings.push(ValidationWarning::for_attempt(
                attempt,
                GradeError::DuplicateAttemptId(attempt.id.clone()).to_string(),
            ));
        }

        match &attempt.response {
            Response::Trace { reference, student } => {
                match reference.len() {
                    0 => warnings.push(ValidationWarning::for_attempt(
                        attempt,
                        "reference stroke is empty; it will always score 0",
                    )),
                    1 => warnings.push(ValidationWarning::for_attempt(
                        attempt,
                        "reference stroke is a single point",
                    )),
                    _ => {}
                }
                if student.is_empty() {
                    warnings.push(ValidationWarning::for_attempt(
                        attempt,
                        "student stroke is empty",
                    ));
                }
            }
            Response::Word { spoken, target } => {
                if target.trim().is_empty() {
                    warnings.push(ValidationWarning::for_attempt(attempt, "target word is empty"));
                }
                if normalize_token(spoken).is_empty() {
                    warnings.push(ValidationWarning::for_attempt(
                        attempt,
                        "spoken response is empty; it matches any target",
                    ));
                }
            }
            Response::Syllables {
                expected, target, ..
            } => {
                if expected.is_empty() {
                    warnings.push(ValidationWarning::for_attempt(
                        attempt,
                        "expected syllables are empty",
                    ));
                }
                if target.trim().is_empty() {
                    warnings.push(ValidationWarning::for_attempt(attempt, "target word is empty"));
                }
            }
        }
    }

    warnings
}
