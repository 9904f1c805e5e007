// src/web/handlers/search_handlers.rs
use crate::recommendation::{JobRecommender, DEFAULT_TOP_N};
use crate::web::types::{JobSearchRequest, JobSearchResponse};

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

pub async fn search_jobs_handler(
    request: Json<JobSearchRequest>,
    recommender: &State<JobRecommender>,
) -> Json<JobSearchResponse> {
    info!("Searching jobs for query: {}", request.query);

    let jobs = recommender.recommend(&request.query, DEFAULT_TOP_N);

    info!("Returning {} job matches", jobs.len());
    Json(JobSearchResponse { jobs })
}
