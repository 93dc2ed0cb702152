//! Sample sources providing deterministic records for demos and tests

use super::{filter_relevant, Opportunity, OpportunitySource};
use crate::error::Result;
use chrono::{Duration, Utc};
use log::info;

/// Mock federal procurement notices, patterned after real solicitations.
pub struct FederalSampleSource;

impl OpportunitySource for FederalSampleSource {
    fn name(&self) -> &str {
        "Federal Sample"
    }

    fn collect(&self, keywords: &[String], _days_back: u32) -> Result<Vec<Opportunity>> {
        info!("Generating sample federal opportunities");
        let now = Utc::now();

        let opportunities = vec![
            Opportunity {
                title: "Cybersecurity Assessment and Authorization Services".to_string(),
                description: "The Department of Defense requires comprehensive cybersecurity \
                    assessment and authorization services including security control assessment, \
                    continuous monitoring, and risk management framework implementation. Services \
                    must include vulnerability scanning, penetration testing, and compliance \
                    reporting."
                    .to_string(),
                agency: "Department of Defense".to_string(),
                opportunity_id: "DOD-CYBER-2025-001".to_string(),
                due_date: Some(now + Duration::days(30)),
                estimated_value: Some(2_500_000.0),
                codes: vec!["541511".to_string(), "541512".to_string()],
                keywords: vec![],
                url: "https://sam.gov/opp/DOD-CYBER-2025-001".to_string(),
                source: "SAM.gov".to_string(),
            },
            Opportunity {
                title: "IT Infrastructure Modernization and Cloud Migration".to_string(),
                description: "The General Services Administration seeks a contractor to provide \
                    IT infrastructure modernization services including cloud migration, system \
                    administration, network security, and digital transformation consulting. \
                    Experience with AWS, Azure, and hybrid cloud environments required."
                    .to_string(),
                agency: "General Services Administration".to_string(),
                opportunity_id: "GSA-IT-2025-002".to_string(),
                due_date: Some(now + Duration::days(45)),
                estimated_value: Some(1_800_000.0),
                codes: vec!["541511".to_string(), "541512".to_string()],
                keywords: vec![],
                url: "https://sam.gov/opp/GSA-IT-2025-002".to_string(),
                source: "SAM.gov".to_string(),
            },
            Opportunity {
                title: "Security Operations Center (SOC) Services".to_string(),
                description: "The Department of Homeland Security requires 24/7 Security \
                    Operations Center services including threat monitoring, incident response, \
                    security information and event management (SIEM), and security consulting. \
                    Must have experience with enterprise security tooling."
                    .to_string(),
                agency: "Department of Homeland Security".to_string(),
                opportunity_id: "DHS-SOC-2025-003".to_string(),
                due_date: Some(now + Duration::days(20)),
                estimated_value: Some(3_200_000.0),
                codes: vec!["541511".to_string(), "541512".to_string()],
                keywords: vec![],
                url: "https://sam.gov/opp/DHS-SOC-2025-003".to_string(),
                source: "SAM.gov".to_string(),
            },
            Opportunity {
                title: "Penetration Testing and Vulnerability Assessment".to_string(),
                description: "The Department of Veterans Affairs requires comprehensive \
                    penetration testing and vulnerability assessment services for network \
                    infrastructure, web applications, and mobile applications, including red \
                    team exercises and detailed remediation recommendations."
                    .to_string(),
                agency: "Department of Veterans Affairs".to_string(),
                opportunity_id: "VA-PENTEST-2025-004".to_string(),
                due_date: Some(now + Duration::days(25)),
                estimated_value: Some(850_000.0),
                codes: vec!["541511".to_string()],
                keywords: vec![],
                url: "https://sam.gov/opp/VA-PENTEST-2025-004".to_string(),
                source: "SAM.gov".to_string(),
            },
            Opportunity {
                title: "Software Development and Application Security".to_string(),
                description: "The Department of Agriculture requires software development \
                    services with a focus on application security, secure coding practices, and \
                    DevSecOps implementation. Must have experience with modern development \
                    frameworks, containerization, and application security testing."
                    .to_string(),
                agency: "Department of Agriculture".to_string(),
                opportunity_id: "USDA-DEV-2025-008".to_string(),
                due_date: Some(now + Duration::days(50)),
                estimated_value: Some(2_100_000.0),
                codes: vec!["541511".to_string(), "541512".to_string()],
                keywords: vec![],
                url: "https://sam.gov/opp/USDA-DEV-2025-008".to_string(),
                source: "SAM.gov".to_string(),
            },
        ];

        Ok(filter_relevant_or_all(opportunities, keywords))
    }
}

/// Mock Ugandan jobs and tenders for regional coverage.
pub struct UgandaSampleSource;

impl OpportunitySource for UgandaSampleSource {
    fn name(&self) -> &str {
        "Uganda Sample"
    }

    fn collect(&self, keywords: &[String], _days_back: u32) -> Result<Vec<Opportunity>> {
        info!("Generating sample Uganda opportunities");
        let now = Utc::now();

        let opportunities = vec![
            Opportunity {
                title: "ICT Support Specialist (Kampala, Remote-First)".to_string(),
                description: "Provide IT support, network administration, and helpdesk services \
                    for a distributed team in Uganda."
                    .to_string(),
                agency: "Uganda Tech Services Ltd.".to_string(),
                opportunity_id: "UG-ICT-2025-001".to_string(),
                due_date: Some(now + Duration::days(21)),
                estimated_value: None,
                codes: vec![],
                keywords: vec![],
                url: "https://example.ug/jobs/ict-support".to_string(),
                source: "Uganda Sample".to_string(),
            },
            Opportunity {
                title: "Government Tender: Network Upgrade for Municipal Offices".to_string(),
                description: "Supply and install network equipment, secure Wi-Fi, and provide a \
                    maintenance SLA for municipal offices."
                    .to_string(),
                agency: "Kampala Capital City Authority".to_string(),
                opportunity_id: "UG-TENDER-NET-2025-002".to_string(),
                due_date: Some(now + Duration::days(28)),
                estimated_value: None,
                codes: vec!["541512".to_string()],
                keywords: vec![],
                url: "https://example.ug/tenders/network-upgrade".to_string(),
                source: "Uganda Sample".to_string(),
            },
            Opportunity {
                title: "Software Developer - Public Health Reporting System".to_string(),
                description: "Build and maintain a reporting platform with data analytics \
                    dashboards for regional health centers."
                    .to_string(),
                agency: "Ministry of Health Uganda".to_string(),
                opportunity_id: "UG-SW-2025-003".to_string(),
                due_date: Some(now + Duration::days(30)),
                estimated_value: None,
                codes: vec!["541511".to_string()],
                keywords: vec![],
                url: "https://example.ug/jobs/health-software".to_string(),
                source: "Uganda Sample".to_string(),
            },
        ];

        Ok(filter_relevant_or_all(opportunities, keywords))
    }
}

fn filter_relevant_or_all(opportunities: Vec<Opportunity>, keywords: &[String]) -> Vec<Opportunity> {
    if keywords.is_empty() {
        opportunities
    } else {
        filter_relevant(opportunities, keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_federal_sample_is_deterministic() {
        let source = FederalSampleSource;
        let first = source.collect(&[], 7).unwrap();
        let second = source.collect(&[], 7).unwrap();

        let ids = |opps: &[Opportunity]| {
            opps.iter().map(|o| o.opportunity_id.clone()).collect::<Vec<_>>()
        };
        assert_eq!(ids(&first), ids(&second));
        assert!(!first.is_empty());
    }

    #[test]
    fn test_sample_sources_filter_by_keyword() {
        let source = FederalSampleSource;
        let keywords = vec!["penetration testing".to_string()];
        let results = source.collect(&keywords, 7).unwrap();

        assert!(!results.is_empty());
        for opp in &results {
            assert!(opp.search_text().to_lowercase().contains("penetration testing"));
            assert_eq!(opp.keywords, keywords);
        }
    }

    #[test]
    fn test_uganda_sample_includes_tender() {
        let source = UgandaSampleSource;
        let results = source.collect(&[], 7).unwrap();

        assert!(results.iter().any(|o| o.title.contains("Tender")));
    }
}
