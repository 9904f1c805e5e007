// src/enrichment/proxycurl.rs
use super::error::FetchJobError;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Job metadata returned by the Proxycurl LinkedIn job endpoint. Only the
/// flat fields this service relays are declared; the rest of the payload is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl JobPosting {
    /// Description text, if the posting carries a non-empty one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }
}

pub struct ProxycurlClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ProxycurlClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Fetch the posting behind a canonical LinkedIn job URL.
    pub async fn fetch_job(&self, job_url: &str) -> Result<JobPosting, FetchJobError> {
        info!("Calling Proxycurl job endpoint: {}", job_url);

        let response = self
            .client
            .get(&self.base_url)
            .bearer_auth(&self.api_key)
            .query(&[("url", job_url)])
            .send()
            .await
            .map_err(FetchJobError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Proxycurl API error {}: {}", status, body);
            return Err(FetchJobError::from_upstream_status(status.as_u16(), &body));
        }

        let posting = response
            .json::<JobPosting>()
            .await
            .map_err(FetchJobError::from_transport)?;

        info!("Received Proxycurl response for {}", job_url);
        Ok(posting)
    }
}
