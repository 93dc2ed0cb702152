//! Profile keyword containment scoring

/// Fraction of profile keywords found in the opportunity text, plus the
/// matched keywords in profile order.
///
/// Matching is case-insensitive substring containment. A profile with no
/// keywords scores 0.0.
pub fn match_keywords(profile_keywords: &[String], opportunity_text: &str) -> (f64, Vec<String>) {
    if profile_keywords.is_empty() {
        return (0.0, Vec::new());
    }

    let text = opportunity_text.to_lowercase();
    let matched: Vec<String> = profile_keywords
        .iter()
        .filter(|kw| text.contains(&kw.to_lowercase()))
        .cloned()
        .collect();

    let score = matched.len() as f64 / profile_keywords.len() as f64;
    (score, matched)
}
