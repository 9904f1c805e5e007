// src/config.rs
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_PROXYCURL_API_URL: &str = "https://nubela.co/proxycurl/api/linkedin/job";

/// Process configuration, resolved from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub proxycurl_api_key: String,
    pub proxycurl_api_url: String,
    pub port: u16,
    pub jobs_seed_path: Option<PathBuf>,
}

impl Settings {
    /// The server cannot run without a Proxycurl credential; everything else
    /// has a default.
    pub fn from_env() -> Result<Self> {
        let proxycurl_api_key = env::var("PROXYCURL_API_KEY")
            .context("PROXYCURL_API_KEY environment variable not set")?;

        let proxycurl_api_url = env::var("PROXYCURL_API_URL")
            .unwrap_or_else(|_| DEFAULT_PROXYCURL_API_URL.to_string());

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let jobs_seed_path = env::var("JOBS_SEED_PATH").ok().map(PathBuf::from);

        Ok(Self {
            proxycurl_api_key,
            proxycurl_api_url,
            port,
            jobs_seed_path,
        })
    }
}
