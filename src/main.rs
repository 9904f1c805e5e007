use anyhow::Result;
use job_search::{start_web_server, Settings};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("job_search=info,rocket::server=off")),
        )
        .init();

    // Missing credential is fatal before the socket is bound.
    let settings = Settings::from_env()?;

    info!("Starting Job Search Backend");
    info!("Upstream enrichment API: {}", settings.proxycurl_api_url);
    info!("Server: http://0.0.0.0:{}", settings.port);

    start_web_server(settings).await
}
