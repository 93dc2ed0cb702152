//! Organizational capability profile consumed by the matching engine

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Aggregated capability description built from an organization's documents.
///
/// The profile is produced upstream by the document pipeline and treated as
/// read-only for the duration of a matching batch. Replacing it invalidates
/// any vector space fitted against its content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityProfile {
    /// All extracted document text, concatenated.
    pub content: String,
    /// Deduplicated technical keywords, first occurrence order preserved.
    pub technical_keywords: Vec<String>,
    pub company_name: String,
}

impl CapabilityProfile {
    /// Create a profile, deduplicating keywords case-insensitively while
    /// keeping the order they were first seen in.
    pub fn new(content: String, keywords: Vec<String>, company_name: String) -> Self {
        let mut seen = HashSet::new();
        let technical_keywords = keywords
            .into_iter()
            .filter(|kw| seen.insert(kw.to_lowercase()))
            .collect();

        Self {
            content,
            technical_keywords,
            company_name,
        }
    }

    /// Build a profile from a capability statement by scanning it for known
    /// technical keywords, the same way the document pipeline attaches
    /// keywords to processed documents.
    pub fn from_text(content: &str, company_name: &str, known_keywords: &[String]) -> Self {
        let content_lower = content.to_lowercase();
        let keywords = known_keywords
            .iter()
            .filter(|kw| content_lower.contains(&kw.to_lowercase()))
            .cloned()
            .collect();

        Self::new(content.to_string(), keywords, company_name.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
