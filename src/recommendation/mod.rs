// src/recommendation/mod.rs
pub mod store;
pub mod tfidf;

pub use store::{Job, JobStore};

use tfidf::TfidfVectorizer;
use tracing::info;

/// Result-page size of the search endpoint.
pub const DEFAULT_TOP_N: usize = 5;

/// Ranks the job collection against free-text queries.
pub struct JobRecommender {
    store: JobStore,
}

impl JobRecommender {
    pub fn new(store: JobStore) -> Self {
        Self { store }
    }

    /// Top `top_n` postings by tf-idf cosine similarity to the query. The
    /// vectorizer is refitted over the descriptions plus the query itself,
    /// so query terms absent from every posting still enter the vocabulary.
    /// Zero-similarity postings still fill the list up to `top_n`.
    pub fn recommend(&self, query: &str, top_n: usize) -> Vec<Job> {
        let jobs = self.store.jobs();
        if jobs.is_empty() {
            return Vec::new();
        }

        let mut documents: Vec<&str> =
            jobs.iter().map(|job| job.description.as_str()).collect();
        documents.push(query);

        let vectorizer = TfidfVectorizer::fit(&documents);
        let query_vector = vectorizer.transform(query);

        let mut scored: Vec<(f64, &Job)> = jobs
            .iter()
            .map(|job| {
                let similarity = vectorizer
                    .transform(&job.description)
                    .cosine_similarity(&query_vector);
                (similarity, job)
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        info!("Ranked {} postings for query", scored.len());

        scored
            .into_iter()
            .take(top_n)
            .map(|(_, job)| job.clone())
            .collect()
    }
}
