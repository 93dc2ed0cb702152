//! Parser for the labeled-section analysis response format

use super::{FitLevel, RequirementAssessment};
use regex::Regex;

/// The section labels the backend is instructed to emit, in response order.
const SECTION_LABELS: [&str; 5] = [
    "MISSING_REQUIREMENTS",
    "RECOMMENDATIONS",
    "REQUIRED_DOCUMENTS",
    "REQUIRED_ATTACHMENTS",
    "ASSESSMENT",
];

/// Parses free-text analysis responses into a fixed-shape assessment.
///
/// Each section is located by its label; its body runs to the next known
/// label or the end of the text. Bodies split on newlines and commas into
/// items, with bullet markers and surrounding whitespace stripped. A missing
/// or malformed assessment defaults to Medium.
pub struct ResponseParser {
    label_regex: Regex,
    assessment_regex: Regex,
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseParser {
    pub fn new() -> Self {
        let label_pattern = format!(r"(?i)({})\s*:", SECTION_LABELS.join("|"));
        Self {
            label_regex: Regex::new(&label_pattern).expect("Invalid label regex"),
            assessment_regex: Regex::new(r"(?i)ASSESSMENT\s*:\s*\[?\s*(High|Medium|Low)")
                .expect("Invalid assessment regex"),
        }
    }

    pub fn parse(&self, text: &str) -> RequirementAssessment {
        let sections = self.locate_sections(text);

        let items_for = |label: &str| -> Vec<String> {
            sections
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(label))
                .map(|(_, body)| split_items(body))
                .unwrap_or_default()
        };

        let fit = self
            .assessment_regex
            .captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| match m.as_str().to_lowercase().as_str() {
                "high" => FitLevel::High,
                "low" => FitLevel::Low,
                _ => FitLevel::Medium,
            })
            .unwrap_or(FitLevel::Medium);

        RequirementAssessment {
            missing_requirements: items_for("MISSING_REQUIREMENTS"),
            recommendations: items_for("RECOMMENDATIONS"),
            required_documents: items_for("REQUIRED_DOCUMENTS"),
            required_attachments: items_for("REQUIRED_ATTACHMENTS"),
            fit,
        }
    }

    /// First occurrence of each label paired with its body text.
    fn locate_sections<'a>(&self, text: &'a str) -> Vec<(String, &'a str)> {
        let matches: Vec<(String, usize, usize)> = self
            .label_regex
            .captures_iter(text)
            .map(|cap| {
                let whole = cap.get(0).expect("match group");
                let label = cap.get(1).expect("label group").as_str().to_uppercase();
                (label, whole.start(), whole.end())
            })
            .collect();

        let mut sections = Vec::new();
        for (index, (label, _, body_start)) in matches.iter().enumerate() {
            if sections.iter().any(|(seen, _)| seen == label) {
                continue;
            }
            let body_end = matches
                .get(index + 1)
                .map(|(_, next_start, _)| *next_start)
                .unwrap_or(text.len());
            sections.push((label.clone(), &text[*body_start..body_end]));
        }

        sections
    }
}

/// Split a section body on newlines and commas into cleaned items.
fn split_items(body: &str) -> Vec<String> {
    body.split(['\n', ','])
        .map(|item| {
            item.trim()
                .trim_matches(|c: char| c == '-' || c == '•' || c == '*' || c == '[' || c == ']')
                .trim()
                .to_string()
        })
        .filter(|item| !item.is_empty())
        .collect()
}
