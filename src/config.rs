//! Configuration management for the bid matcher

use crate::error::{BidMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub company: CompanyConfig,
    pub search: SearchConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    pub name: String,
    /// Classification codes the organization typically bids under.
    pub codes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub it_keywords: Vec<String>,
    pub cybersecurity_keywords: Vec<String>,
    pub days_back: u32,
    pub max_opportunities: usize,
    /// Keyword cap applied when quick search is requested.
    pub quick_search_keywords: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub max_tokens: u32,
    pub temperature: f32,
    /// Wall-clock budget shared by all expensive analysis calls in one batch.
    pub time_budget_secs: f64,
    /// Per-request timeouts below this are raised to it.
    pub min_request_timeout_secs: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company: CompanyConfig {
                name: "Your Company".to_string(),
                codes: vec![
                    "541511".to_string(),
                    "541512".to_string(),
                    "541519".to_string(),
                    "541690".to_string(),
                ],
            },
            search: SearchConfig {
                it_keywords: vec![
                    "information technology".to_string(),
                    "IT services".to_string(),
                    "software development".to_string(),
                    "system administration".to_string(),
                    "network administration".to_string(),
                    "database management".to_string(),
                    "cloud services".to_string(),
                    "digital transformation".to_string(),
                    "IT consulting".to_string(),
                ],
                cybersecurity_keywords: vec![
                    "cybersecurity".to_string(),
                    "information security".to_string(),
                    "cyber security".to_string(),
                    "security assessment".to_string(),
                    "penetration testing".to_string(),
                    "vulnerability assessment".to_string(),
                    "security monitoring".to_string(),
                    "incident response".to_string(),
                    "security consulting".to_string(),
                    "compliance".to_string(),
                    "risk assessment".to_string(),
                    "security operations center".to_string(),
                ],
                days_back: 7,
                max_opportunities: 50,
                quick_search_keywords: 8,
            },
            analysis: AnalysisConfig {
                max_tokens: 1000,
                temperature: 0.3,
                time_budget_secs: 180.0,
                min_request_timeout_secs: 5.0,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                BidMatcherError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            BidMatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("bid-matcher")
            .join("config.toml")
    }

    /// All search keywords in their configured order, IT first.
    pub fn search_keywords(&self) -> Vec<String> {
        let mut keywords = self.search.it_keywords.clone();
        keywords.extend(self.search.cybersecurity_keywords.iter().cloned());
        keywords
    }
}
