// src/recommendation/tfidf.rs
//! Term-frequency / inverse-document-frequency scoring used to rank job
//! postings against a free-text query.

use std::collections::{HashMap, HashSet};

/// Tf-idf weights of one document over the fitted vocabulary, L2-normalized.
#[derive(Debug, Clone, Default)]
pub struct SparseVector {
    weights: HashMap<usize, f64>,
}

impl SparseVector {
    /// Both vectors are unit length, so cosine similarity reduces to a dot
    /// product over the shared terms.
    pub fn cosine_similarity(&self, other: &SparseVector) -> f64 {
        self.weights
            .iter()
            .filter_map(|(term, weight)| other.weights.get(term).map(|w| w * weight))
            .sum()
    }
}

/// Vectorizer fitted over a document corpus: term vocabulary plus smoothed
/// idf weights.
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn fit(documents: &[&str]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for document in documents {
            let mut seen: HashSet<usize> = HashSet::new();
            for token in tokenize(document) {
                let next_index = vocabulary.len();
                let index = *vocabulary.entry(token).or_insert(next_index);
                if index == document_frequency.len() {
                    document_frequency.push(0);
                }
                if seen.insert(index) {
                    document_frequency[index] += 1;
                }
            }
        }

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1, never zero or negative.
        let corpus_size = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + corpus_size) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Weights for one document. Terms outside the fitted vocabulary are
    /// ignored.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(document) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut weights: HashMap<usize, f64> = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();

        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in weights.values_mut() {
                *weight /= norm;
            }
        }

        SparseVector { weights }
    }
}

/// Lowercased word tokens of at least two characters.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_drops_short_tokens() {
        assert_eq!(
            tokenize("Build ML models in Rust, v2!"),
            vec!["build", "ml", "models", "in", "rust", "v2"]
        );
        assert_eq!(tokenize("a b c"), Vec::<String>::new());
    }

    #[test]
    fn identical_documents_have_unit_similarity() {
        let docs = ["analyze data and build models", "develop web applications"];
        let vectorizer = TfidfVectorizer::fit(&docs);
        let a = vectorizer.transform(docs[0]);
        let b = vectorizer.transform(docs[0]);
        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_documents_have_zero_similarity() {
        let docs = ["rust services", "pottery classes"];
        let vectorizer = TfidfVectorizer::fit(&docs);
        let a = vectorizer.transform(docs[0]);
        let b = vectorizer.transform(docs[1]);
        assert_eq!(a.cosine_similarity(&b), 0.0);
    }

    #[test]
    fn overlapping_document_scores_higher_than_unrelated_one() {
        let docs = [
            "analyze data and build machine learning models",
            "develop web applications using react",
            "build machine learning models",
        ];
        let vectorizer = TfidfVectorizer::fit(&docs);
        let query = vectorizer.transform("machine learning models");

        let related = vectorizer.transform(docs[0]);
        let unrelated = vectorizer.transform(docs[1]);
        assert!(related.cosine_similarity(&query) > unrelated.cosine_similarity(&query));
    }

    #[test]
    fn out_of_vocabulary_terms_are_ignored() {
        let vectorizer = TfidfVectorizer::fit(&["known words only"]);
        let vector = vectorizer.transform("entirely novel phrase");
        assert_eq!(vector.cosine_similarity(&vectorizer.transform("known words only")), 0.0);
    }
}
