//! Opportunity scoring and ranking

pub mod engine;
pub mod keywords;
pub mod similarity;

pub use engine::{Confidence, MatchResult, Matcher};
