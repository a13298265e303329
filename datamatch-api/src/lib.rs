pub mod dto;
pub mod error;
pub mod handlers;
pub mod results;

pub use dto::*;
pub use error::{ApiError, ApiResult};

use axum::routing::{get, post};
use axum::Router;
use datamatch_storage::{DatasetStore, RunStore};

/// Shared state handed to every handler. `uploaded_by` is the injected
/// identity recorded on dataset descriptors; there is no authentication.
#[derive(Clone)]
pub struct AppState {
    pub datasets: DatasetStore,
    pub runs: RunStore,
    pub uploaded_by: String,
}

impl AppState {
    pub fn new(datasets: DatasetStore, runs: RunStore, uploaded_by: String) -> Self {
        Self {
            datasets,
            runs,
            uploaded_by,
        }
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::dashboard))
        .route("/datasets", get(handlers::pages::datasets))
        .route("/recent-runs", get(handlers::pages::recent_runs))
        .route("/results/:run_id", get(handlers::pages::results))
        .route("/api/datasets", get(handlers::datasets::list))
        .route("/api/datasets/upload", post(handlers::datasets::upload))
        .route("/api/runs", get(handlers::runs::list))
        .route("/api/runs/create", post(handlers::runs::create))
        .route("/api/runs/createcde", post(handlers::runs::create_preview))
        .route("/api/runs/:run_id", get(handlers::runs::get))
        .route("/api/runs/:run_id/results", get(handlers::runs::results))
        .with_state(state)
}
