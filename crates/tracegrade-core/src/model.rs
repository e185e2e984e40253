//! Attempt data model.
//!
//! An attempt is one captured learner response together with the answer it
//! is graded against. Attempts are grouped into batches for grading runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::point::Point;

/// The kind of response an attempt carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptKind {
    Trace,
    Word,
    Syllables,
}

impl fmt::Display for AttemptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptKind::Trace => write!(f, "trace"),
            AttemptKind::Word => write!(f, "word"),
            AttemptKind::Syllables => write!(f, "syllables"),
        }
    }
}

impl FromStr for AttemptKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" | "stroke" => Ok(AttemptKind::Trace),
            "word" | "spoken" => Ok(AttemptKind::Word),
            "syllables" | "tiles" => Ok(AttemptKind::Syllables),
            other => Err(format!("unknown attempt kind: {other}")),
        }
    }
}

/// A learner response and the reference it is graded against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Response {
    /// A stroke traced over a template.
    Trace {
        reference: Vec<Point>,
        student: Vec<Point>,
    },
    /// A recognized or typed word.
    Word { spoken: String, target: String },
    /// Syllable tiles assembled into a word.
    Syllables {
        selected: Vec<String>,
        expected: Vec<String>,
        target: String,
    },
}

impl Response {
    pub fn kind(&self) -> AttemptKind {
        match self {
            Response::Trace { .. } => AttemptKind::Trace,
            Response::Word { .. } => AttemptKind::Word,
            Response::Syllables { .. } => AttemptKind::Syllables,
        }
    }
}

/// A single graded unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    /// Identifier, unique within its batch.
    pub id: String,
    pub response: Response,
}

impl Attempt {
    pub fn kind(&self) -> AttemptKind {
        self.response.kind()
    }
}

/// A collection of attempts graded together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptBatch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attempts: Vec<Attempt>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_and_parse() {
        assert_eq!(AttemptKind::Trace.to_string(), "trace");
        assert_eq!("Word".parse::<AttemptKind>().unwrap(), AttemptKind::Word);
        assert_eq!("tiles".parse::<AttemptKind>().unwrap(), AttemptKind::Syllables);
        assert!("drawing".parse::<AttemptKind>().is_err());
    }

    #[test]
    fn response_kind() {
        let r = Response::Word {
            spoken: "cat".into(),
            target: "cat".into(),
        };
        assert_eq!(r.kind(), AttemptKind::Word);
    }

    #[test]
    fn response_json_is_tagged() {
        let r = Response::Syllables {
            selected: vec!["sun".into(), "set".into()],
            expected: vec!["sun".into(), "set".into()],
            target: "sunset".into(),
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["kind"], "syllables");
        let back: Response = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
