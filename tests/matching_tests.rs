//! Integration tests for the matching pipeline

use async_trait::async_trait;
use bid_matcher::analysis::backend::{AnalysisBackend, BackendError};
use bid_matcher::analysis::RequirementAnalyzer;
use bid_matcher::classify::Classifier;
use bid_matcher::config::Config;
use bid_matcher::matching::Matcher;
use bid_matcher::profile::CapabilityProfile;
use bid_matcher::sources::{dedupe_by_id, Opportunity};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn opportunity(id: &str, title: &str, description: &str) -> Opportunity {
    Opportunity {
        title: title.to_string(),
        description: description.to_string(),
        agency: "Test Agency".to_string(),
        opportunity_id: id.to_string(),
        due_date: None,
        estimated_value: None,
        codes: vec![],
        keywords: vec![],
        url: String::new(),
        source: "Test".to_string(),
    }
}

fn profile() -> CapabilityProfile {
    CapabilityProfile::new(
        "We provide cybersecurity assessment, penetration testing, incident response, and \
         cloud migration services for government and enterprise clients."
            .to_string(),
        vec![
            "cybersecurity".to_string(),
            "penetration testing".to_string(),
            "incident response".to_string(),
            "cloud migration".to_string(),
        ],
        "Acme Security".to_string(),
    )
}

fn heuristic_matcher() -> Matcher {
    let mut matcher = Matcher::new(RequirementAnalyzer::new(Config::default().analysis));
    matcher.set_profile(profile());
    matcher
}

/// Records how often the expensive path ran, and takes long enough per call
/// to exhaust small batch budgets.
struct SlowBackend {
    calls: AtomicUsize,
    delay: Duration,
}

#[async_trait]
impl AnalysisBackend for SlowBackend {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
        _timeout: Option<Duration>,
    ) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok("RECOMMENDATIONS: proceed\nASSESSMENT: High".to_string())
    }
}

#[tokio::test]
async fn match_all_without_profile_returns_empty() {
    let matcher = Matcher::new(RequirementAnalyzer::new(Config::default().analysis));
    let opportunities = vec![
        opportunity("A", "Cybersecurity services", "penetration testing"),
        opportunity("B", "Cloud migration", "cloud migration project"),
    ];

    let results = matcher.match_all(&opportunities, false, 60.0).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn match_all_on_empty_input_returns_empty() {
    let matcher = heuristic_matcher();
    let results = matcher.match_all(&[], false, 60.0).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn heuristic_matching_is_deterministic() {
    let matcher = heuristic_matcher();
    let opportunities = vec![
        opportunity("A", "Cybersecurity assessment", "penetration testing and incident response"),
        opportunity("B", "Cloud migration services", "cloud migration for agencies"),
        opportunity("C", "Catering contract", "daily meals"),
    ];

    let first = matcher.match_all(&opportunities, false, 60.0).await;
    let second = matcher.match_all(&opportunities, false, 60.0).await;

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.opportunity.opportunity_id, b.opportunity.opportunity_id);
        assert_eq!(a.match_score, b.match_score);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.should_apply, b.should_apply);
    }
}

#[tokio::test]
async fn scores_stay_within_bounds() {
    let matcher = heuristic_matcher();
    let opportunities = vec![
        opportunity(
            "A",
            "Cybersecurity penetration testing incident response cloud migration",
            "cybersecurity penetration testing incident response cloud migration services",
        ),
        opportunity("B", "Catering contract", "daily meals for staff"),
        opportunity("C", "", ""),
    ];

    let results = matcher.match_all(&opportunities, false, 60.0).await;

    assert_eq!(results.len(), 3);
    for result in &results {
        assert!(
            (0.0..=1.0).contains(&result.match_score),
            "score {} out of bounds",
            result.match_score
        );
    }
}

#[tokio::test]
async fn results_are_sorted_descending_with_stable_ties() {
    let matcher = heuristic_matcher();
    // A and B are identical texts and must tie; C scores higher.
    let opportunities = vec![
        opportunity("A", "cloud migration", "cloud migration"),
        opportunity("B", "cloud migration", "cloud migration"),
        opportunity(
            "C",
            "cybersecurity penetration testing incident response cloud migration",
            "cybersecurity penetration testing incident response cloud migration",
        ),
    ];

    let results = matcher.match_all(&opportunities, false, 60.0).await;

    for pair in results.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    assert_eq!(results[0].opportunity.opportunity_id, "C");
    // Stable sort keeps A before B.
    assert_eq!(results[1].opportunity.opportunity_id, "A");
    assert_eq!(results[2].opportunity.opportunity_id, "B");
    assert_eq!(results[1].match_score, results[2].match_score);
}

#[tokio::test]
async fn exhausted_budget_downgrades_remaining_opportunities() {
    let backend = Arc::new(SlowBackend {
        calls: AtomicUsize::new(0),
        delay: Duration::from_millis(120),
    });
    let analyzer =
        RequirementAnalyzer::with_backend(Config::default().analysis, backend.clone());
    let mut matcher = Matcher::new(analyzer);
    matcher.set_profile(profile());

    let opportunities: Vec<Opportunity> = (0..4)
        .map(|i| {
            opportunity(
                &format!("OPP-{}", i),
                "Cybersecurity services",
                "penetration testing engagement",
            )
        })
        .collect();

    // The budget covers the first call only; the first call's delay exhausts
    // it before the second check.
    let results = matcher.match_all(&opportunities, true, 0.05).await;

    assert_eq!(results.len(), 4);
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

    let heuristic_count = results
        .iter()
        .filter(|r| r.recommendations.iter().any(|rec| rec.contains("Heuristic")))
        .count();
    assert_eq!(heuristic_count, 3);
}

#[tokio::test]
async fn zero_budget_never_calls_backend() {
    let backend = Arc::new(SlowBackend {
        calls: AtomicUsize::new(0),
        delay: Duration::from_millis(10),
    });
    let analyzer =
        RequirementAnalyzer::with_backend(Config::default().analysis, backend.clone());
    let mut matcher = Matcher::new(analyzer);
    matcher.set_profile(profile());

    let opportunities = vec![
        opportunity("A", "Cybersecurity services", "penetration testing"),
        opportunity("B", "Cloud migration", "cloud migration project"),
    ];

    let results = matcher.match_all(&opportunities, true, 0.0).await;

    assert_eq!(results.len(), 2);
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn match_one_requires_profile() {
    let matcher = Matcher::new(RequirementAnalyzer::new(Config::default().analysis));
    let opp = opportunity("A", "Cybersecurity services", "penetration testing");

    assert!(matcher.match_one(&opp, false, None).await.is_err());
}

#[tokio::test]
async fn match_one_scores_like_batch() {
    let matcher = heuristic_matcher();
    let opp = opportunity(
        "A",
        "Cybersecurity assessment",
        "penetration testing and incident response",
    );

    let single = matcher.match_one(&opp, false, None).await.unwrap();
    let batch = matcher.match_all(std::slice::from_ref(&opp), false, 60.0).await;

    assert_eq!(single.match_score, batch[0].match_score);
    assert_eq!(single.should_apply, batch[0].should_apply);
}

#[test]
fn dedup_keeps_first_instance_and_is_idempotent() {
    let a = opportunity("A", "first", "");
    let b = opportunity("B", "second", "");
    let a_dup = opportunity("A", "later duplicate", "");

    let deduped = dedupe_by_id(vec![a, b, a_dup]);
    assert_eq!(deduped.len(), 2);
    assert_eq!(deduped[0].title, "first");

    let again = dedupe_by_id(deduped.clone());
    assert_eq!(
        deduped.iter().map(|o| &o.opportunity_id).collect::<Vec<_>>(),
        again.iter().map(|o| &o.opportunity_id).collect::<Vec<_>>()
    );
}

#[test]
fn technology_filter_scenario() {
    let classifier = Classifier::new().unwrap();

    let baker = opportunity("BAKER-1", "Senior Baker", "bake bread");
    let engineer = opportunity("NET-1", "Network Engineer", "maintain the LAN");

    assert!(!classifier.is_technology_related(&baker));
    assert!(classifier.is_technology_related(&engineer));
}

#[test]
fn government_classification_takes_priority_over_job_terms() {
    let classifier = Classifier::new().unwrap();

    let mut opp = opportunity("JOB-1", "Great job opening", "an exciting job in security");
    opp.source = "SAMGov".to_string();

    assert!(classifier.is_government_bid(&opp));
    assert!(!classifier.is_job_posting(&opp));
}

#[tokio::test]
async fn matching_keywords_follow_profile_order() {
    let matcher = heuristic_matcher();
    let opp = opportunity(
        "A",
        "incident response and cybersecurity",
        "we need incident response plus cybersecurity support",
    );

    let result = matcher.match_one(&opp, false, None).await.unwrap();

    // Profile order, not text order.
    assert_eq!(
        result.matching_keywords,
        vec!["cybersecurity", "incident response"]
    );
}
