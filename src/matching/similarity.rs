//! Term-weighted text similarity between a profile and opportunity text

use log::warn;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Cap on distinct terms kept when fitting the vector space.
pub const MAX_VOCABULARY_TERMS: usize = 1000;

/// TF-IDF similarity scorer fitted once per capability profile.
///
/// `fit` builds a sparse vector space from the profile's aggregate text
/// (unigrams and bigrams, stop words removed, vocabulary capped). `score`
/// projects opportunity text into that space and returns cosine similarity.
/// Without a fitted space every score is 0.0.
pub struct SimilarityScorer {
    stop_words: HashSet<&'static str>,
    space: Option<FittedSpace>,
}

struct FittedSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    /// L2-normalized profile vector over the vocabulary.
    profile_vector: Vec<f64>,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self {
            stop_words: english_stop_words(),
            space: None,
        }
    }

    /// Fit the vector space on the profile's aggregate text, replacing any
    /// previously fitted space. Empty or degenerate text disables scoring
    /// until the next fit.
    pub fn fit(&mut self, profile_text: &str) {
        self.space = None;

        let terms = self.extract_terms(profile_text);
        if terms.is_empty() {
            warn!("Profile text produced no usable terms; similarity scoring disabled");
            return;
        }

        let mut counts: HashMap<String, usize> = HashMap::new();
        for term in terms {
            *counts.entry(term).or_insert(0) += 1;
        }

        // Keep the most frequent terms; break count ties alphabetically so
        // the fitted space is reproducible.
        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(MAX_VOCABULARY_TERMS);

        // Smoothed IDF over the single-document profile corpus.
        let doc_count = 1.0_f64;
        let mut vocabulary = HashMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        let mut profile_vector = Vec::with_capacity(ranked.len());

        for (index, (term, count)) in ranked.into_iter().enumerate() {
            let df = 1.0_f64;
            let term_idf = ((1.0 + doc_count) / (1.0 + df)).ln() + 1.0;
            vocabulary.insert(term, index);
            idf.push(term_idf);
            profile_vector.push(count as f64 * term_idf);
        }

        if !normalize(&mut profile_vector) {
            warn!("Profile vector has zero norm; similarity scoring disabled");
            return;
        }

        self.space = Some(FittedSpace {
            vocabulary,
            idf,
            profile_vector,
        });
    }

    /// Whether a profile vector is currently available.
    pub fn is_fitted(&self) -> bool {
        self.space.is_some()
    }

    /// Cosine similarity between the fitted profile vector and the given
    /// text, in [0, 1]. Returns 0.0 when no space is fitted or the text
    /// shares no vocabulary with the profile.
    pub fn score(&self, text: &str) -> f64 {
        let space = match &self.space {
            Some(space) => space,
            None => return 0.0,
        };

        let mut vector = vec![0.0_f64; space.profile_vector.len()];
        for term in self.extract_terms(text) {
            if let Some(&index) = space.vocabulary.get(&term) {
                vector[index] += 1.0;
            }
        }

        for (index, value) in vector.iter_mut().enumerate() {
            *value *= space.idf[index];
        }

        if !normalize(&mut vector) {
            return 0.0;
        }

        let cosine: f64 = vector
            .iter()
            .zip(space.profile_vector.iter())
            .map(|(a, b)| a * b)
            .sum();

        cosine.clamp(0.0, 1.0)
    }

    /// Unigrams plus bigrams over lowercased, stop-word-filtered tokens.
    fn extract_terms(&self, text: &str) -> Vec<String> {
        let tokens: Vec<String> = text
            .unicode_words()
            .map(|word| word.to_lowercase())
            .filter(|word| word.len() > 1 && !self.stop_words.contains(word.as_str()))
            .collect();

        let mut terms = tokens.clone();
        for pair in tokens.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }

        terms
    }
}

/// L2-normalize in place; false when the vector has zero norm.
fn normalize(vector: &mut [f64]) -> bool {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm <= f64::EPSILON {
        return false;
    }
    for value in vector.iter_mut() {
        *value /= norm;
    }
    true
}

fn english_stop_words() -> HashSet<&'static str> {
    [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "did", "do", "does", "doing", "down", "during", "each",
        "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
        "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it",
        "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not",
        "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
        "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
        "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
        "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
        "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
        "with", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
}
