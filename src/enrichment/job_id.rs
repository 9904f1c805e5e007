// src/enrichment/job_id.rs
use regex::Regex;

const LINKEDIN_JOB_VIEW_BASE: &str = "https://www.linkedin.com/jobs/view/";

/// Pulls the numeric job ID out of the URL shapes users paste in: the
/// canonical posting path and the search-results query parameter.
pub struct JobIdExtractor {
    view_pattern: Regex,
    query_pattern: Regex,
}

impl JobIdExtractor {
    pub fn new() -> Self {
        let view_pattern =
            Regex::new(r"/jobs/view/(\d+)").expect("invalid job view pattern");
        let query_pattern =
            Regex::new(r"currentJobId=(\d+)").expect("invalid job query pattern");

        Self {
            view_pattern,
            query_pattern,
        }
    }

    /// First match wins: `/jobs/view/<digits>` takes precedence over
    /// `currentJobId=<digits>`.
    pub fn extract(&self, url: &str) -> Option<String> {
        Self::capture(&self.view_pattern, url).or_else(|| Self::capture(&self.query_pattern, url))
    }

    fn capture(pattern: &Regex, url: &str) -> Option<String> {
        pattern.captures(url).map(|caps| caps[1].to_string())
    }
}

/// Canonical posting URL sent to the enrichment API.
pub fn canonical_job_url(job_id: &str) -> String {
    format!("{}{}", LINKEDIN_JOB_VIEW_BASE, job_id)
}
