pub mod assessment;
pub mod assistant;
pub mod auth;
pub mod candidate_routes;
pub mod dashboard;
pub mod health;
pub mod interview;
pub mod job_routes;
pub mod prediction;
pub mod resume_routes;
pub mod verification;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not_found", "message": "The requested route does not exist" })),
    )
}

/// Simulated processing pause used by the analysis-style stages. Purely
/// cosmetic; it cannot fail and is not cancellable.
pub(crate) async fn processing_delay() {
    let delay = crate::config::get_config().processing_delay_ms;
    tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
}
