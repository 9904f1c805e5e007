// src/enrichment/error.rs
use thiserror::Error;

/// Failures of the job-fetch flow. Each variant carries exactly one HTTP
/// status and user-facing message; nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum FetchJobError {
    #[error("No URL provided")]
    MissingUrl,

    #[error("Invalid LinkedIn job URL")]
    InvalidUrl,

    #[error("Job description not available")]
    MissingDescription,

    #[error("Invalid Proxycurl API key")]
    UpstreamAuth,

    #[error("Proxycurl API rate limit exceeded")]
    UpstreamRateLimit,

    #[error("Job not found on LinkedIn")]
    UpstreamNotFound,

    /// Any other non-2xx upstream status; relays the upstream message when
    /// the body carries one.
    #[error("{message}")]
    UpstreamError { status: u16, message: String },

    #[error("Cannot connect to Proxycurl API server")]
    Network,

    #[error("Proxycurl API request timed out")]
    Timeout,

    #[error("Failed to fetch job description")]
    Other(#[source] reqwest::Error),
}

impl FetchJobError {
    /// HTTP status surfaced to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingUrl | Self::InvalidUrl => 400,
            Self::UpstreamAuth => 401,
            Self::MissingDescription | Self::UpstreamNotFound => 404,
            Self::UpstreamRateLimit => 429,
            Self::UpstreamError { status, .. } => *status,
            Self::Network | Self::Timeout | Self::Other(_) => 500,
        }
    }

    /// Classify a non-2xx upstream response. Unmapped statuses probe the raw
    /// body for a `message` field before falling back to a generic string.
    pub fn from_upstream_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::UpstreamAuth,
            429 => Self::UpstreamRateLimit,
            404 => Self::UpstreamNotFound,
            _ => {
                let message = serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|value| {
                        value
                            .get("message")
                            .and_then(|message| message.as_str())
                            .map(str::to_string)
                    })
                    .unwrap_or_else(|| format!("Proxycurl API error (status {})", status));

                Self::UpstreamError { status, message }
            }
        }
    }

    /// Classify a transport-level failure of the upstream call.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Network
        } else {
            Self::Other(err)
        }
    }
}
