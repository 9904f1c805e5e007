pub mod config;
pub mod enrichment;
pub mod recommendation;
pub mod web;

pub use config::Settings;
pub use web::start_web_server;
