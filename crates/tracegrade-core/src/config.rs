//! Engine configuration and loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::curve::DEFAULT_PASS_THRESHOLD;
use crate::error::GradeError;
use crate::lexical::DEFAULT_SIMILARITY_THRESHOLD;
use crate::resample::{ShortStrokePolicy, DEFAULT_SAMPLE_COUNT};

/// Settings for stroke comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Number of points both strokes are resampled to.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    /// Handling of strokes with no more points than `sample_count`.
    #[serde(default)]
    pub short_stroke: ShortStrokePolicy,
    /// Also accept strokes traced in the opposite direction.
    #[serde(default)]
    pub allow_reversed: bool,
    /// Similarity needed to award a point.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: u8,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
            short_stroke: ShortStrokePolicy::default(),
            allow_reversed: false,
            pass_threshold: default_pass_threshold(),
        }
    }
}

/// Settings for spoken and typed word matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalConfig {
    /// Closeness a near miss must strictly exceed.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

impl Default for LexicalConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

/// Top-level tracegrade configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub curve: CurveConfig,
    #[serde(default)]
    pub lexical: LexicalConfig,
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}
fn default_pass_threshold() -> u8 {
    DEFAULT_PASS_THRESHOLD
}
fn default_similarity_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

impl EngineConfig {
    /// Check every value is in range.
    pub fn validate(&self) -> Result<(), GradeError> {
        if self.curve.sample_count < 2 {
            return Err(GradeError::invalid(
                "curve.sample_count",
                format!("must be at least 2, got {}", self.curve.sample_count),
            ));
        }
        if self.curve.pass_threshold > 100 {
            return Err(GradeError::invalid(
                "curve.pass_threshold",
                format!("must be at most 100, got {}", self.curve.pass_threshold),
            ));
        }
        let t = self.lexical.similarity_threshold;
        if !(t > 0.0 && t < 1.0) {
            return Err(GradeError::invalid(
                "lexical.similarity_threshold",
                format!("must be between 0 and 1 exclusive, got {t}"),
            ));
        }
        Ok(())
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `tracegrade.toml` in the current directory
/// 2. `~/.config/tracegrade/config.toml`
///
/// Environment variable overrides: `TRACEGRADE_SAMPLE_COUNT`, `TRACEGRADE_PASS_THRESHOLD`.
pub fn load_config_from(path: Option<&Path>) -> Result<EngineConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("tracegrade.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config_str(
                &std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config: {}", path.display()))?,
            )
            .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => EngineConfig::default(),
    };

    if let Ok(raw) = std::env::var("TRACEGRADE_SAMPLE_COUNT") {
        config.curve.sample_count = raw
            .trim()
            .parse()
            .with_context(|| format!("invalid TRACEGRADE_SAMPLE_COUNT: '{raw}'"))?;
    }
    if let Ok(raw) = std::env::var("TRACEGRADE_PASS_THRESHOLD") {
        config.curve.pass_threshold = raw
            .trim()
            .parse()
            .with_context(|| format!("invalid TRACEGRADE_PASS_THRESHOLD: '{raw}'"))?;
    }

    config.validate()?;
    Ok(config)
}

/// Parse a TOML string into an `EngineConfig` without validating it.
pub fn parse_config_str(content: &str) -> Result<EngineConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("tracegrade"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.curve.sample_count, 50);
        assert_eq!(config.curve.pass_threshold, 80);
        assert_eq!(config.curve.short_stroke, ShortStrokePolicy::Interpolate);
        assert!(!config.curve.allow_reversed);
        assert_eq!(config.lexical.similarity_threshold, 0.75);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config_str(
            r#"
[curve]
sample_count = 64
short_stroke = "preserve"
"#,
        )
        .unwrap();
        assert_eq!(config.curve.sample_count, 64);
        assert_eq!(config.curve.short_stroke, ShortStrokePolicy::Preserve);
        assert_eq!(config.curve.pass_threshold, 80);
        assert_eq!(config.lexical, LexicalConfig::default());
    }

    #[test]
    fn parse_empty_config() {
        assert_eq!(parse_config_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn reject_out_of_range_values() {
        let mut config = EngineConfig::default();
        config.curve.sample_count = 1;
        assert!(config.validate().unwrap_err().is_config());

        let mut config = EngineConfig::default();
        config.curve.pass_threshold = 101;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.lexical.similarity_threshold = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_unknown_policy() {
        assert!(parse_config_str("[curve]\nshort_stroke = \"stretch\"\n").is_err());
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracegrade.toml");
        std::fs::write(&path, "[curve]\nallow_reversed = true\npass_threshold = 70\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert!(config.curve.allow_reversed);
        assert_eq!(config.curve.pass_threshold, 70);
    }

    #[test]
    fn load_invalid_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[lexical]\nsimilarity_threshold = 2.5\n").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(err.downcast_ref::<GradeError>().is_some());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/tracegrade.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
