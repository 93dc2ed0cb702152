//! Rendering of match results for the console and JSON export

use crate::classify::Classifier;
use crate::error::Result;
use crate::matching::engine::top_matches;
use crate::matching::MatchResult;
use colored::Colorize;

/// Print a ranked summary of match results to stdout.
pub fn render_console(results: &[MatchResult], classifier: &Classifier, detailed: bool) {
    if results.is_empty() {
        println!("No opportunities matched.");
        return;
    }

    println!("\n{}", "Opportunity Match Report".bold());
    println!("{}", "=".repeat(60));

    for (rank, result) in results.iter().enumerate() {
        let decision = if result.should_apply {
            "APPLY".green().bold()
        } else {
            "SKIP".red()
        };
        let confidence = match result.confidence {
            crate::matching::Confidence::High => result.confidence.to_string().green(),
            crate::matching::Confidence::Medium => result.confidence.to_string().yellow(),
            crate::matching::Confidence::Low => result.confidence.to_string().red(),
        };

        println!(
            "\n{}. {} [{}]",
            rank + 1,
            result.opportunity.title.bold(),
            decision
        );
        println!("   Agency: {}", result.opportunity.agency);
        println!(
            "   Score: {:.1}%  Confidence: {}",
            result.match_score * 100.0,
            confidence
        );

        if let Some(due) = result.opportunity.due_date {
            println!("   Due: {}", due.format("%Y-%m-%d"));
        }

        if detailed {
            let kind = if classifier.is_government_bid(&result.opportunity) {
                "Government bid"
            } else if classifier.is_job_posting(&result.opportunity) {
                "Job posting"
            } else {
                "Uncategorized"
            };
            println!("   Type: {}", kind);
            println!("   Location: {}", classifier.infer_location(&result.opportunity));
            println!("   Source: {}", result.opportunity.source);

            if !result.matching_keywords.is_empty() {
                println!("   Matching keywords: {}", result.matching_keywords.join(", "));
            }
            if !result.missing_requirements.is_empty() {
                println!("   Missing requirements:");
                for req in &result.missing_requirements {
                    println!("     - {}", req);
                }
            }
            if !result.recommendations.is_empty() {
                println!("   Recommendations:");
                for rec in &result.recommendations {
                    println!("     - {}", rec);
                }
            }
        }
    }

    let applicable = top_matches(results, usize::MAX).len();
    println!(
        "\n{} matched, {} recommended for application",
        results.len(),
        applicable
    );
}

/// Serialize the full result list as pretty JSON.
pub fn render_json(results: &[MatchResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Plain-text decision summary for one match, suitable for an application
/// package cover page.
pub fn application_summary(result: &MatchResult) -> String {
    let due_date = result
        .opportunity
        .due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let decision = if result.should_apply {
        "APPLY"
    } else {
        "DO NOT APPLY"
    };

    let recommendations = result
        .recommendations
        .iter()
        .map(|rec| format!("- {}", rec))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "OPPORTUNITY: {}\nAGENCY: {}\nMATCH SCORE: {:.2} ({} Confidence)\nDUE DATE: {}\n\n\
         MATCHING KEYWORDS: {}\n\nRECOMMENDATIONS:\n{}\n\nDECISION: {}",
        result.opportunity.title,
        result.opportunity.agency,
        result.match_score,
        result.confidence,
        due_date,
        result.matching_keywords.join(", "),
        recommendations,
        decision,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Confidence;
    use crate::sources::Opportunity;

    fn match_result(should_apply: bool) -> MatchResult {
        MatchResult {
            opportunity: Opportunity {
                title: "SOC Services".to_string(),
                description: "24/7 monitoring".to_string(),
                agency: "DHS".to_string(),
                opportunity_id: "DHS-1".to_string(),
                due_date: None,
                estimated_value: None,
                codes: vec![],
                keywords: vec![],
                url: String::new(),
                source: "SAM.gov".to_string(),
            },
            match_score: 0.82,
            confidence: Confidence::High,
            matching_keywords: vec!["soc".to_string(), "monitoring".to_string()],
            missing_requirements: vec![],
            recommendations: vec!["Highlight SOC experience".to_string()],
            required_documents: vec![],
            required_attachments: vec![],
            should_apply,
        }
    }

    #[test]
    fn test_application_summary_contents() {
        let summary = application_summary(&match_result(true));

        assert!(summary.contains("OPPORTUNITY: SOC Services"));
        assert!(summary.contains("MATCH SCORE: 0.82 (High Confidence)"));
        assert!(summary.contains("DUE DATE: Unknown"));
        assert!(summary.contains("soc, monitoring"));
        assert!(summary.contains("- Highlight SOC experience"));
        assert!(summary.contains("DECISION: APPLY"));
    }

    #[test]
    fn test_application_summary_negative_decision() {
        let summary = application_summary(&match_result(false));
        assert!(summary.contains("DECISION: DO NOT APPLY"));
    }

    #[test]
    fn test_render_json_roundtrips() {
        let json = render_json(&[match_result(true)]).unwrap();
        let parsed: Vec<MatchResult> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].opportunity.opportunity_id, "DHS-1");
        assert!(parsed[0].should_apply);
    }
}
