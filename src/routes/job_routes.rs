use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::dto::job_dto::CreateJobPayload;
use crate::{error::Result, AppState};

#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let posting = state.job_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(posting)))
}

#[axum::debug_handler]
pub async fn list_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let postings = state.job_service.list().await?;
    Ok(Json(postings))
}
