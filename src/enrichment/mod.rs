// src/enrichment/mod.rs
pub mod error;
pub mod job_id;
pub mod proxycurl;

pub use error::FetchJobError;
pub use job_id::{canonical_job_url, JobIdExtractor};
pub use proxycurl::{JobPosting, ProxycurlClient};
