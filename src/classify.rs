//! Domain classification and filtering predicates for opportunity records

use crate::error::{BidMatcherError, Result};
use crate::sources::Opportunity;
use aho_corasick::AhoCorasick;

/// Base technology terms, matched as substrings of title + description.
const TECHNOLOGY_TERMS: &[&str] = &[
    "information technology",
    "it services",
    "software development",
    "system administration",
    "network administration",
    "database management",
    "cloud services",
    "digital transformation",
    "it consulting",
    "cybersecurity",
    "information security",
    "cyber security",
    "security assessment",
    "penetration testing",
    "vulnerability assessment",
    "security monitoring",
    "incident response",
    "security consulting",
    "risk assessment",
    "security operations center",
    // Synonyms and short forms seen across sources
    "ict",
    "software",
    "network",
    "helpdesk",
    "devops",
    "cloud",
    "database",
    "web development",
    "data analytics",
    "infrastructure",
    "telecom",
    "programmer",
    "developer",
    "sysadmin",
];

/// Collector names known to carry government procurement notices, normalized
/// to lowercase alphanumerics.
const GOVERNMENT_SOURCES: &[&str] = &["samgov", "fbogov", "fbo", "grantsgov", "usaspending"];

/// Terms in an agency name indicating a public-sector issuer.
const GOVERNMENT_AGENCY_TERMS: &[&str] = &[
    "ministry",
    "department",
    "federal",
    "municipal",
    "public",
    "authority",
    "commission",
    "united nations",
    "undp",
    "unicef",
    "unops",
    "government",
    "council",
    "bureau",
];

/// Procurement instrument terms in the notice text.
const PROCUREMENT_TERMS: &[&str] = &[
    "rfp",
    "rfq",
    "rfi",
    "eoi",
    "ifb",
    "tender",
    "solicitation",
    "procurement notice",
    "procurement",
    "framework agreement",
    "request for proposal",
    "request for quotation",
    "expression of interest",
];

const JOB_TERMS: &[&str] = &[
    "job",
    "vacancy",
    "hiring",
    "career",
    "position",
    "employment",
    "recruit",
    "internship",
    "salary",
];

const JOB_BOARD_SOURCES: &[&str] = &["remotive", "remoteok", "brightermonday", "linkedin", "indeed"];

const CITIES: &[&str] = &["kampala", "entebbe", "jinja", "gulu", "mbarara", "mbale", "fort portal"];

const REMOTE_TERMS: &[&str] = &["remote", "work from home", "telecommute", "anywhere"];

/// Region reported when no explicit location signal is found.
const DEFAULT_REGION: &str = "Kampala, Uganda";

const REMOTE_SUFFIX: &str = " (Remote)";

/// Stateless classification predicates applied to opportunity records,
/// independent of the matching score. A presentation layer can use these to
/// tag and filter results without re-scoring.
pub struct Classifier {
    technology_matcher: AhoCorasick,
}

impl Classifier {
    pub fn new() -> Result<Self> {
        let technology_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(TECHNOLOGY_TERMS)
            .map_err(|e| {
                BidMatcherError::Configuration(format!("Failed to build term matcher: {}", e))
            })?;

        Ok(Self { technology_matcher })
    }

    /// Whether the record is IT/ICT relevant: a technology term occurs in
    /// the text, or one of the record's attached keywords matches the list.
    pub fn is_technology_related(&self, opportunity: &Opportunity) -> bool {
        if self.technology_matcher.is_match(&opportunity.search_text()) {
            return true;
        }

        opportunity
            .keywords
            .iter()
            .any(|kw| self.technology_matcher.is_match(kw.as_str()))
    }

    /// Whether the record is a government procurement notice: a known
    /// government source, a public-sector agency name, or a procurement
    /// instrument term in the text.
    pub fn is_government_bid(&self, opportunity: &Opportunity) -> bool {
        let source = normalize_source(&opportunity.source);
        if GOVERNMENT_SOURCES.iter().any(|token| source.contains(token)) {
            return true;
        }

        let agency = opportunity.agency.to_lowercase();
        if GOVERNMENT_AGENCY_TERMS.iter().any(|term| agency.contains(term)) {
            return true;
        }

        let text = opportunity.search_text().to_lowercase();
        PROCUREMENT_TERMS.iter().any(|term| text.contains(term))
    }

    /// Whether the record is a job posting. Government classification takes
    /// priority: the two are mutually exclusive.
    pub fn is_job_posting(&self, opportunity: &Opportunity) -> bool {
        if self.is_government_bid(opportunity) {
            return false;
        }

        let source = opportunity.source.to_lowercase();
        if JOB_BOARD_SOURCES.iter().any(|token| source.contains(token)) {
            return true;
        }

        let text = opportunity.search_text().to_lowercase();
        JOB_TERMS.iter().any(|term| text.contains(term))
    }

    /// Infer a display location from the notice text, defaulting to the base
    /// region; remote-work terms append a qualifier.
    pub fn infer_location(&self, opportunity: &Opportunity) -> String {
        let text = opportunity.search_text().to_lowercase();

        let mut location = CITIES
            .iter()
            .find(|city| text.contains(*city))
            .map(|city| format!("{}, Uganda", title_case(city)))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        if REMOTE_TERMS.iter().any(|term| text.contains(term)) {
            location.push_str(REMOTE_SUFFIX);
        }

        location
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new().expect("Failed to build default classifier")
    }
}

/// Lowercase a source tag and drop everything but alphanumerics, so
/// "SAM.gov", "SAMGov", and "sam gov" normalize identically.
fn normalize_source(source: &str) -> String {
    source
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

fn title_case(words: &str) -> String {
    words
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
