//! Normalized opportunity record shared by all source collectors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single externally published notice: a contract, tender, or job posting.
///
/// Records are immutable once produced by a collector, with one exception:
/// the relevance filter may overwrite `keywords` with the subset of target
/// keywords that triggered inclusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub title: String,
    pub description: String,
    /// Issuing organization or employer display name.
    pub agency: String,
    /// Deduplication key; the first record seen for an id wins.
    pub opportunity_id: String,
    /// Absent means unknown; unknown due dates sort last.
    pub due_date: Option<DateTime<Utc>>,
    pub estimated_value: Option<f64>,
    /// Classification codes, may be empty.
    pub codes: Vec<String>,
    /// Keywords attached by a relevance filter.
    pub keywords: Vec<String>,
    pub url: String,
    /// Identifies the originating collector.
    pub source: String,
}

impl Opportunity {
    /// Combined title and description, the text every scoring and
    /// classification step operates on.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}
