// src/web/types.rs
use crate::enrichment::FetchJobError;
use crate::recommendation::Job;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::Request;

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct FetchJobRequest {
    // Optional: the handler owns the missing-URL error message.
    pub url: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct JobDescriptionResponse {
    pub description: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct JobSearchRequest {
    pub query: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct JobSearchResponse {
    pub jobs: Vec<Job>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self { error }
    }
}

impl<'r> Responder<'r, 'static> for FetchJobError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = Status::new(self.status_code());
        let mut response = Json(ErrorResponse::new(self.to_string())).respond_to(request)?;
        response.set_status(status);
        Ok(response)
    }
}
