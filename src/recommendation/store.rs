// src/recommendation/store.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One searchable job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// In-memory collection backing the search endpoint.
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Placeholder postings used until a real collection is imported.
    pub fn with_seed_jobs() -> Self {
        Self::new(vec![
            Job {
                id: 1,
                title: "Software Engineer".to_string(),
                description: "Develop web applications using Python and React".to_string(),
            },
            Job {
                id: 2,
                title: "Data Scientist".to_string(),
                description: "Analyze data and build ML models".to_string(),
            },
        ])
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read jobs seed file: {}", path.display()))?;
        Self::from_csv_reader(content.as_bytes())
    }

    /// Import `id,title,description` rows. An empty file falls back to the
    /// seed postings, so the collection is never empty after an import.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let mut jobs = Vec::new();
        for record in csv_reader.deserialize() {
            let job: Job = record.context("Failed to parse jobs seed row")?;
            jobs.push(job);
        }

        if jobs.is_empty() {
            return Ok(Self::with_seed_jobs());
        }
        Ok(Self::new(jobs))
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }
}
