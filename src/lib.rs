//! speedlens: PageSpeed Insights proxy and Lighthouse report dashboard backend.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::FetchError;
pub use models::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::home_handler))
        .route("/health", get(api::health_handler))
        .route("/pagespeed", get(api::pagespeed_handler))
        .route("/pagespeed/summary", get(api::summary_handler))
        // the original dashboard points its API base at /api
        .route("/api/pagespeed", get(api::pagespeed_handler))
        .route("/api/pagespeed/summary", get(api::summary_handler))
        .route(
            "/live",
            post(api::set_live_updates).get(api::get_live_updates),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
