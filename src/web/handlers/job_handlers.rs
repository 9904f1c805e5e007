// src/web/handlers/job_handlers.rs
use crate::enrichment::{canonical_job_url, FetchJobError, JobIdExtractor, ProxycurlClient};
use crate::web::types::{FetchJobRequest, JobDescriptionResponse};

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

pub async fn fetch_job_handler(
    request: Json<FetchJobRequest>,
    extractor: &State<JobIdExtractor>,
    client: &State<ProxycurlClient>,
) -> Result<Json<JobDescriptionResponse>, FetchJobError> {
    let url = match request.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => {
            error!("Request error: No URL provided");
            return Err(FetchJobError::MissingUrl);
        }
    };

    let job_id = match extractor.extract(url) {
        Some(job_id) => job_id,
        None => {
            error!("Request error: Invalid LinkedIn job URL: {}", url);
            return Err(FetchJobError::InvalidUrl);
        }
    };

    let job_url = canonical_job_url(&job_id);
    info!(
        "Fetching job description for job ID: {} (URL: {})",
        job_id, job_url
    );

    let posting = client.fetch_job(&job_url).await.map_err(|e| {
        error!("Error fetching job {}: {}", job_id, e);
        e
    })?;

    match posting.description() {
        Some(description) => {
            info!("Successfully fetched job description for job ID: {}", job_id);
            Ok(Json(JobDescriptionResponse {
                description: description.to_string(),
            }))
        }
        None => {
            warn!("No description found for job ID: {}", job_id);
            Err(FetchJobError::MissingDescription)
        }
    }
}
