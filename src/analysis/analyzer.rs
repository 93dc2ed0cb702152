//! Requirement analyzer: expensive backend analysis with a heuristic fallback

use super::backend::AnalysisBackend;
use super::parser::ResponseParser;
use super::prompts::{build_analysis_prompt, ANALYST_SYSTEM_PROMPT};
use super::{FitLevel, RequirementAssessment};
use crate::config::AnalysisConfig;
use crate::profile::CapabilityProfile;
use crate::sources::Opportunity;
use log::{debug, error};
use std::sync::Arc;
use std::time::Duration;

/// Blend thresholds for the heuristic assessment path.
const HEURISTIC_HIGH_THRESHOLD: f64 = 0.7;
const HEURISTIC_MEDIUM_THRESHOLD: f64 = 0.5;

/// Produces a qualitative fit assessment per opportunity.
///
/// With a backend attached and expensive analysis requested, one completion
/// call is issued per opportunity and its response parsed. Every failure on
/// that path degrades to a neutral assessment; the analyzer never errors to
/// the caller. Without a backend, or when the caller disables expensive
/// analysis, a cheap blend of the similarity and keyword signals decides the
/// fit level.
pub struct RequirementAnalyzer {
    backend: Option<Arc<dyn AnalysisBackend>>,
    parser: ResponseParser,
    config: AnalysisConfig,
}

impl RequirementAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            backend: None,
            parser: ResponseParser::new(),
            config,
        }
    }

    pub fn with_backend(config: AnalysisConfig, backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            backend: Some(backend),
            parser: ResponseParser::new(),
            config,
        }
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Assess one opportunity against the profile.
    ///
    /// `similarity` and `keyword_score` feed the heuristic path; `timeout`
    /// caps the backend request when the expensive path runs.
    pub async fn analyze(
        &self,
        opportunity: &Opportunity,
        profile: &CapabilityProfile,
        similarity: f64,
        keyword_score: f64,
        use_expensive: bool,
        timeout: Option<Duration>,
    ) -> RequirementAssessment {
        if use_expensive {
            if let Some(backend) = &self.backend {
                return self
                    .analyze_with_backend(backend.as_ref(), opportunity, profile, timeout)
                    .await;
            }
            debug!("Expensive analysis requested but no backend configured; using heuristic");
        }

        self.heuristic_assessment(similarity, keyword_score)
    }

    async fn analyze_with_backend(
        &self,
        backend: &dyn AnalysisBackend,
        opportunity: &Opportunity,
        profile: &CapabilityProfile,
        timeout: Option<Duration>,
    ) -> RequirementAssessment {
        let prompt = build_analysis_prompt(opportunity, profile);

        // Raise very small remaining budgets to a usable request timeout.
        let min_timeout = Duration::from_secs_f64(self.config.min_request_timeout_secs.max(0.0));
        let timeout = timeout.map(|t| t.max(min_timeout));

        match backend
            .complete(
                ANALYST_SYSTEM_PROMPT,
                &prompt,
                self.config.max_tokens,
                self.config.temperature,
                timeout,
            )
            .await
        {
            Ok(response) => self.parser.parse(&response),
            Err(e) => {
                error!(
                    "Analysis failed for opportunity {}: {}",
                    opportunity.opportunity_id, e
                );
                RequirementAssessment::unavailable()
            }
        }
    }

    /// Fast fallback assessment from the already-computed score signals.
    fn heuristic_assessment(&self, similarity: f64, keyword_score: f64) -> RequirementAssessment {
        let pre = 0.5 * similarity + 0.5 * keyword_score;
        let fit = if pre >= HEURISTIC_HIGH_THRESHOLD {
            FitLevel::High
        } else if pre >= HEURISTIC_MEDIUM_THRESHOLD {
            FitLevel::Medium
        } else {
            FitLevel::Low
        };

        RequirementAssessment {
            missing_requirements: Vec::new(),
            recommendations: vec![
                "Heuristic assessment used (quick match mode) - consider running full analysis \
                 for top results"
                    .to_string(),
            ],
            required_documents: Vec::new(),
            required_attachments: Vec::new(),
            fit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::backend::BackendError;
    use crate::config::Config;
    use async_trait::async_trait;
    use chrono::Utc;

    struct FixedBackend {
        response: String,
    }

    #[async_trait]
    impl AnalysisBackend for FixedBackend {
        async fn complete(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
            _max_tokens: u32,
            _temperature: f32,
            _timeout: Option<Duration>,
        ) -> Result<String, BackendError> {
            Ok(self.response.clone())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl AnalysisBackend for FailingBackend {
        async fn complete(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
            _max_tokens: u32,
            _temperature: f32,
            _timeout: Option<Duration>,
        ) -> Result<String, BackendError> {
            Err(BackendError::Transport("connection refused".to_string()))
        }
    }

    fn opportunity() -> Opportunity {
        Opportunity {
            title: "SOC Services".to_string(),
            description: "24/7 monitoring".to_string(),
            agency: "DHS".to_string(),
            opportunity_id: "DHS-1".to_string(),
            due_date: Some(Utc::now()),
            estimated_value: None,
            codes: vec![],
            keywords: vec![],
            url: String::new(),
            source: "SAM.gov".to_string(),
        }
    }

    fn profile() -> CapabilityProfile {
        CapabilityProfile::new(
            "Security operations".to_string(),
            vec!["soc".to_string()],
            "Acme".to_string(),
        )
    }

    #[test]
    fn test_heuristic_tiers() {
        let analyzer = RequirementAnalyzer::new(AnalysisConfig {
            max_tokens: 1000,
            temperature: 0.3,
            time_budget_secs: 180.0,
            min_request_timeout_secs: 5.0,
        });

        assert_eq!(analyzer.heuristic_assessment(0.8, 0.8).fit, FitLevel::High);
        assert_eq!(analyzer.heuristic_assessment(0.7, 0.7).fit, FitLevel::High);
        assert_eq!(analyzer.heuristic_assessment(0.5, 0.5).fit, FitLevel::Medium);
        assert_eq!(analyzer.heuristic_assessment(0.2, 0.2).fit, FitLevel::Low);
    }

    #[tokio::test]
    async fn test_expensive_path_parses_response() {
        let backend = Arc::new(FixedBackend {
            response: "MISSING_REQUIREMENTS: local office\nRECOMMENDATIONS: partner up\n\
                ASSESSMENT: High"
                .to_string(),
        });
        let analyzer =
            RequirementAnalyzer::with_backend(Config::default().analysis, backend);

        let assessment = analyzer
            .analyze(&opportunity(), &profile(), 0.0, 0.0, true, None)
            .await;

        assert_eq!(assessment.fit, FitLevel::High);
        assert_eq!(assessment.missing_requirements, vec!["local office"]);
        assert_eq!(assessment.recommendations, vec!["partner up"]);
    }

    #[tokio::test]
    async fn test_backend_failure_degrades_to_neutral() {
        let analyzer =
            RequirementAnalyzer::with_backend(Config::default().analysis, Arc::new(FailingBackend));

        let assessment = analyzer
            .analyze(&opportunity(), &profile(), 0.9, 0.9, true, None)
            .await;

        assert_eq!(assessment.fit, FitLevel::Medium);
        assert_eq!(assessment.recommendations.len(), 1);
        assert!(assessment.recommendations[0].contains("manual review"));
    }

    #[tokio::test]
    async fn test_no_backend_falls_back_to_heuristic() {
        let analyzer = RequirementAnalyzer::new(Config::default().analysis);

        let assessment = analyzer
            .analyze(&opportunity(), &profile(), 0.9, 0.9, true, None)
            .await;

        assert_eq!(assessment.fit, FitLevel::High);
        assert!(assessment.recommendations[0].contains("Heuristic"));
    }
}
