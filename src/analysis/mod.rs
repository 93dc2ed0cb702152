//! Requirement analysis: qualitative fit assessment per opportunity

pub mod analyzer;
pub mod backend;
pub mod parser;
pub mod prompts;

pub use analyzer::RequirementAnalyzer;
pub use backend::{AnalysisBackend, BackendError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative fit judgment for one opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for FitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitLevel::High => write!(f, "High"),
            FitLevel::Medium => write!(f, "Medium"),
            FitLevel::Low => write!(f, "Low"),
        }
    }
}

/// Fixed-shape result of requirement analysis, whichever strategy produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementAssessment {
    pub missing_requirements: Vec<String>,
    pub recommendations: Vec<String>,
    pub required_documents: Vec<String>,
    pub required_attachments: Vec<String>,
    pub fit: FitLevel,
}

impl RequirementAssessment {
    /// Neutral assessment used when analysis could not run.
    pub fn unavailable() -> Self {
        Self {
            missing_requirements: Vec::new(),
            recommendations: vec![
                "Analysis unavailable - manual review recommended".to_string(),
            ],
            required_documents: Vec::new(),
            required_attachments: Vec::new(),
            fit: FitLevel::Medium,
        }
    }
}
