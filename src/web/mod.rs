// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::config::Settings;
use crate::enrichment::{FetchJobError, JobIdExtractor, ProxycurlClient};
use crate::recommendation::{JobRecommender, JobStore};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

// Routes

#[get("/")]
pub async fn index() -> Json<WelcomeResponse> {
    handlers::index_handler().await
}

#[post("/fetch-job", data = "<request>")]
pub async fn fetch_job(
    request: Json<FetchJobRequest>,
    extractor: &State<JobIdExtractor>,
    client: &State<ProxycurlClient>,
) -> Result<Json<JobDescriptionResponse>, FetchJobError> {
    handlers::fetch_job_handler(request, extractor, client).await
}

#[post("/search", data = "<request>")]
pub async fn search_jobs(
    request: Json<JobSearchRequest>,
    recommender: &State<JobRecommender>,
) -> Json<JobSearchResponse> {
    handlers::search_jobs_handler(request, recommender).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request format".to_string()))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Resource not found".to_string()))
}

#[rocket::catch(422)]
pub fn unprocessable_entity() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Request body is missing required fields".to_string(),
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error".to_string()))
}

/// Assemble the Rocket instance: managed state, CORS, routes, catchers.
pub fn build_rocket(settings: &Settings) -> Result<Rocket<Build>> {
    let client = ProxycurlClient::new(
        settings.proxycurl_api_key.clone(),
        settings.proxycurl_api_url.clone(),
    )?;

    let store = match &settings.jobs_seed_path {
        Some(path) => JobStore::from_csv_path(path)?,
        None => JobStore::with_seed_jobs(),
    };

    let config = rocket::Config {
        port: settings.port,
        address: std::net::Ipv4Addr::UNSPECIFIED.into(),
        ..rocket::Config::default()
    };

    Ok(rocket::custom(config)
        .attach(Cors)
        .manage(JobIdExtractor::new())
        .manage(client)
        .manage(JobRecommender::new(store))
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable_entity, internal_error],
        )
        .mount("/", routes![index, fetch_job, options])
        .mount("/api/jobs", routes![search_jobs]))
}

// Main server start function
pub async fn start_web_server(settings: Settings) -> Result<()> {
    info!("Starting job search API server");
    info!("Server: http://0.0.0.0:{}", settings.port);
    info!("Proxycurl API key configured successfully");

    build_rocket(&settings)?.launch().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::ContentType;
    use rocket::local::blocking::Client;

    fn test_settings() -> Settings {
        Settings {
            proxycurl_api_key: "test-key".to_string(),
            proxycurl_api_url: "http://127.0.0.1:9/proxycurl/api/linkedin/job".to_string(),
            port: 3001,
            jobs_seed_path: None,
        }
    }

    fn test_client() -> Client {
        let rocket = build_rocket(&test_settings()).expect("valid rocket instance");
        Client::tracked(rocket).expect("valid rocket client")
    }

    #[test]
    fn index_returns_welcome_message() {
        let client = test_client();
        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body: serde_json::Value = response.into_json().expect("json body");
        assert_eq!(body["message"], "Welcome to the Job Search API");
    }

    #[test]
    fn fetch_job_without_url_is_rejected() {
        let client = test_client();
        let response = client
            .post("/fetch-job")
            .header(ContentType::JSON)
            .body(r#"{"someOtherField": "value"}"#)
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);

        let body: serde_json::Value = response.into_json().expect("json body");
        assert_eq!(body["error"], "No URL provided");
    }

    #[test]
    fn fetch_job_with_empty_url_is_rejected() {
        let client = test_client();
        let response = client
            .post("/fetch-job")
            .header(ContentType::JSON)
            .body(r#"{"url": ""}"#)
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);

        let body: serde_json::Value = response.into_json().expect("json body");
        assert_eq!(body["error"], "No URL provided");
    }

    #[test]
    fn fetch_job_with_unrecognized_url_is_rejected() {
        let client = test_client();
        let response = client
            .post("/fetch-job")
            .header(ContentType::JSON)
            .body(r#"{"url": "https://example.com/careers/12345"}"#)
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);

        let body: serde_json::Value = response.into_json().expect("json body");
        assert_eq!(body["error"], "Invalid LinkedIn job URL");
    }

    #[test]
    fn search_ranks_the_matching_posting_first() {
        let client = test_client();
        let response = client
            .post("/api/jobs/search")
            .header(ContentType::JSON)
            .body(r#"{"query": "build ML models from data"}"#)
            .dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body: serde_json::Value = response.into_json().expect("json body");
        let jobs = body["jobs"].as_array().expect("jobs array");
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0]["id"], 2);
        assert_eq!(jobs[0]["title"], "Data Scientist");
    }

    #[test]
    fn preflight_gets_cors_headers() {
        let client = test_client();
        let response = client.options("/fetch-job").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("*")
        );
    }
}
