//! tracegrade-core — stroke similarity and spoken-word matching.
//!
//! Pure grading functions for traced strokes ([`normalize`], [`resample`],
//! [`compare`]) and for spoken or typed words ([`normalize_token`],
//! [`edit_distance`], [`is_word_match`], [`is_token_sequence_match`]), plus
//! the configuration, attempt batches and reports built around them.

pub mod config;
pub mod curve;
pub mod engine;
pub mod error;
pub mod lexical;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod point;
pub mod report;
pub mod resample;
pub mod results;
pub mod token;

pub use config::{CurveConfig, EngineConfig, LexicalConfig};
pub use curve::{compare, compare_with, FeedbackTier, Similarity};
pub use engine::Evaluator;
pub use error::GradeError;
pub use lexical::{
    edit_distance, is_token_sequence_match, is_word_match, is_word_match_with, word_similarity,
};
pub use normalize::normalize;
pub use point::Point;
pub use resample::{resample, resample_with, ShortStrokePolicy};
pub use token::normalize_token;
