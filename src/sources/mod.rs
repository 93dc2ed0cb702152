//! Opportunity sources: record type, collector trait, merge and filtering

pub mod record;
pub mod sample;

pub use record::Opportunity;

use crate::error::Result;
use log::{error, info};
use std::collections::HashSet;

/// A collector producing normalized opportunity records from one source.
pub trait OpportunitySource {
    /// Display name used in logs and the record `source` field.
    fn name(&self) -> &str;

    /// Search the source for opportunities matching the given keywords.
    fn collect(&self, keywords: &[String], days_back: u32) -> Result<Vec<Opportunity>>;
}

/// Run every source in the order given and merge their results.
///
/// Sources are consulted in their configured order so that the merged
/// sequence, and therefore dedup winners, are reproducible regardless of how
/// long any one source takes. A failing source is logged and skipped.
pub fn collect_all(
    sources: &[Box<dyn OpportunitySource>],
    keywords: &[String],
    days_back: u32,
) -> Vec<Opportunity> {
    let mut merged = Vec::new();

    for source in sources {
        match source.collect(keywords, days_back) {
            Ok(opportunities) => {
                info!("{}: found {} opportunities", source.name(), opportunities.len());
                merged.extend(opportunities);
            }
            Err(e) => {
                error!("Source {} failed: {}", source.name(), e);
            }
        }
    }

    dedupe_by_id(merged)
}

/// Keep the first record seen for each opportunity id, preserving order.
pub fn dedupe_by_id(opportunities: Vec<Opportunity>) -> Vec<Opportunity> {
    let mut seen_ids = HashSet::new();
    opportunities
        .into_iter()
        .filter(|opp| seen_ids.insert(opp.opportunity_id.clone()))
        .collect()
}

/// Keep only records where at least one target keyword occurs in the title
/// or description, attaching the matched subset to each surviving record.
pub fn filter_relevant(
    opportunities: Vec<Opportunity>,
    target_keywords: &[String],
) -> Vec<Opportunity> {
    let total = opportunities.len();
    let relevant: Vec<Opportunity> = opportunities
        .into_iter()
        .filter_map(|mut opp| {
            let text = opp.search_text().to_lowercase();
            let matched: Vec<String> = target_keywords
                .iter()
                .filter(|kw| text.contains(&kw.to_lowercase()))
                .cloned()
                .collect();

            if matched.is_empty() {
                None
            } else {
                opp.keywords = matched;
                Some(opp)
            }
        })
        .collect();

    info!("Filtered {} opportunities to {} relevant ones", total, relevant.len());
    relevant
}
