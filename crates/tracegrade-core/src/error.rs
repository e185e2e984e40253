//! Grading error types.
//!
//! The scoring functions never fail; these errors come from loading
//! configuration and attempt batches, typed so callers can tell a bad
//! setting from a bad input file without string matching.

use thiserror::Error;

/// Errors raised while preparing a grading run.
#[derive(Debug, Error)]
pub enum GradeError {
    /// A configuration value is outside its allowed range.
    #[error("invalid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Two attempts in the same batch share an id.
    #[error("duplicate attempt id: {0}")]
    DuplicateAttemptId(String),

    /// The attempt batch file extension is not recognized.
    #[error("unsupported attempt file format: {0}")]
    UnknownFormat(String),
}

impl GradeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GradeError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error comes from configuration rather than input data.
    pub fn is_config(&self) -> bool {
        matches!(self, GradeError::InvalidConfig { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = GradeError::invalid("curve.sample_count", "must be at least 2");
        assert_eq!(
            err.to_string(),
            "invalid config: curve.sample_count must be at least 2"
        );
        assert!(err.is_config());
        assert!(!GradeError::DuplicateAttemptId("a".into()).is_config());
    }
}
