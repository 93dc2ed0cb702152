//! Matching engine: score aggregation, decision policy, and the batch pipeline

use super::keywords::match_keywords;
use super::similarity::SimilarityScorer;
use crate::analysis::{FitLevel, RequirementAnalyzer};
use crate::error::{BidMatcherError, Result};
use crate::profile::CapabilityProfile;
use crate::sources::Opportunity;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant};

/// Weights combining the three signals into one score. They sum to 1.0 and
/// are business rules: changing them changes product behavior.
pub const SIMILARITY_WEIGHT: f64 = 0.3;
pub const KEYWORD_WEIGHT: f64 = 0.4;
pub const ASSESSMENT_WEIGHT: f64 = 0.3;

/// Confidence tier boundaries on the aggregated score.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Apply-decision boundaries. Both are inclusive.
pub const APPLY_THRESHOLD: f64 = 0.7;
pub const CONDITIONAL_APPLY_THRESHOLD: f64 = 0.5;

/// Tier derived from the final numeric score (distinct from the analyzer's
/// fit assessment, though both use the same labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::Low => write!(f, "Low"),
        }
    }
}

/// Result of matching one opportunity against the capability profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub opportunity: Opportunity,
    pub match_score: f64,
    pub confidence: Confidence,
    pub matching_keywords: Vec<String>,
    pub missing_requirements: Vec<String>,
    pub recommendations: Vec<String>,
    pub required_documents: Vec<String>,
    pub required_attachments: Vec<String>,
    pub should_apply: bool,
}

/// Weighted blend of the three signals, clamped to [0, 1].
pub fn aggregate_score(similarity: f64, keyword_score: f64, fit: FitLevel) -> f64 {
    let combined = similarity * SIMILARITY_WEIGHT
        + keyword_score * KEYWORD_WEIGHT
        + assessment_numeric(fit) * ASSESSMENT_WEIGHT;
    combined.clamp(0.0, 1.0)
}

/// Numeric value of a fit assessment for aggregation.
pub fn assessment_numeric(fit: FitLevel) -> f64 {
    match fit {
        FitLevel::High => 0.9,
        FitLevel::Medium => 0.6,
        FitLevel::Low => 0.3,
    }
}

pub fn confidence_for(score: f64) -> Confidence {
    if score >= HIGH_CONFIDENCE_THRESHOLD {
        Confidence::High
    } else if score >= MEDIUM_CONFIDENCE_THRESHOLD {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Apply when the score clears the main threshold, or clears the conditional
/// threshold with a High fit assessment.
pub fn should_apply(score: f64, fit: FitLevel) -> bool {
    score >= APPLY_THRESHOLD || (score >= CONDITIONAL_APPLY_THRESHOLD && fit == FitLevel::High)
}

/// Matches batches of opportunities against one capability profile.
///
/// The profile and its fitted vector space are set explicitly through
/// `set_profile` and shared read-only across a batch; re-fitting never
/// happens implicitly.
pub struct Matcher {
    scorer: SimilarityScorer,
    analyzer: RequirementAnalyzer,
    profile: Option<CapabilityProfile>,
}

impl Matcher {
    pub fn new(analyzer: RequirementAnalyzer) -> Self {
        Self {
            scorer: SimilarityScorer::new(),
            analyzer,
            profile: None,
        }
    }

    /// Replace the stored profile and re-fit the similarity vector space.
    pub fn set_profile(&mut self, profile: CapabilityProfile) {
        self.scorer.fit(&profile.content);
        self.profile = Some(profile);
        info!("Capability profile set for opportunity matching");
    }

    pub fn profile(&self) -> Option<&CapabilityProfile> {
        self.profile.as_ref()
    }

    /// Match every opportunity, ranked by score descending.
    ///
    /// `time_budget_secs` caps the wall-clock time available for expensive
    /// analysis across the whole batch. Once exhausted, the remaining
    /// opportunities use the heuristic strategy; the downgrade is permanent
    /// for the batch. Without a profile the batch returns empty.
    pub async fn match_all(
        &self,
        opportunities: &[Opportunity],
        use_expensive: bool,
        time_budget_secs: f64,
    ) -> Vec<MatchResult> {
        let profile = match &self.profile {
            Some(profile) => profile,
            None => {
                error!("Capability profile not set; call set_profile() first");
                return Vec::new();
            }
        };

        let start = Instant::now();
        let mut expensive_enabled = use_expensive;
        let mut expensive_used = 0usize;
        let mut results = Vec::with_capacity(opportunities.len());

        for opportunity in opportunities {
            let remaining = time_budget_secs - start.elapsed().as_secs_f64();
            let use_now = expensive_enabled && remaining > 0.0;
            if expensive_enabled && !use_now {
                info!(
                    "Expensive analysis time budget exceeded; using heuristic for remaining \
                     opportunities"
                );
                expensive_enabled = false;
            }

            // An unbounded budget maps to no request timeout.
            let timeout = if use_now {
                Duration::try_from_secs_f64(remaining).ok()
            } else {
                None
            };
            let result = self
                .match_single(opportunity, profile, use_now, timeout)
                .await;
            if use_now {
                expensive_used += 1;
            }
            results.push(result);
        }

        // Stable sort: equal scores keep their input-relative order.
        results.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });

        info!(
            "Matched {} opportunities (expensive analysis on {}, budget {}s)",
            results.len(),
            expensive_used,
            time_budget_secs
        );
        results
    }

    /// Match a single opportunity with the same scoring rules as a batch but
    /// no batch budget tracking.
    pub async fn match_one(
        &self,
        opportunity: &Opportunity,
        use_expensive: bool,
        timeout: Option<Duration>,
    ) -> Result<MatchResult> {
        let profile = self.profile.as_ref().ok_or_else(|| {
            BidMatcherError::Matching("capability profile not set".to_string())
        })?;

        Ok(self
            .match_single(opportunity, profile, use_expensive, timeout)
            .await)
    }

    async fn match_single(
        &self,
        opportunity: &Opportunity,
        profile: &CapabilityProfile,
        use_expensive: bool,
        timeout: Option<Duration>,
    ) -> MatchResult {
        let text = opportunity.search_text();

        let similarity = self.scorer.score(&text);
        let (keyword_score, matching_keywords) =
            match_keywords(&profile.technical_keywords, &text);

        let assessment = self
            .analyzer
            .analyze(
                opportunity,
                profile,
                similarity,
                keyword_score,
                use_expensive,
                timeout,
            )
            .await;

        let match_score = aggregate_score(similarity, keyword_score, assessment.fit);

        MatchResult {
            opportunity: opportunity.clone(),
            match_score,
            confidence: confidence_for(match_score),
            matching_keywords,
            missing_requirements: assessment.missing_requirements,
            recommendations: assessment.recommendations,
            required_documents: assessment.required_documents,
            required_attachments: assessment.required_attachments,
            should_apply: should_apply(match_score, assessment.fit),
        }
    }
}

/// The highest-ranked results recommended for application.
pub fn top_matches(results: &[MatchResult], limit: usize) -> Vec<&MatchResult> {
    results
        .iter()
        .filter(|result| result.should_apply)
        .take(limit)
        .collect()
}
