use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::dto::candidate_dto::{CandidateListQuery, CreateCandidatePayload, CreateResumePayload};
use crate::{error::Result, AppState};

const DEFAULT_LIST_LIMIT: i64 = 10;

#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    payload.validate_links()?;
    let candidate = state.candidate_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<impl IntoResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let candidates = state.candidate_service.list(limit).await?;
    Ok(Json(candidates))
}

#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get(id).await?;
    Ok(Json(candidate))
}

/// Resume attached to a candidate, with loosely-typed lists normalized to
/// their placeholder defaults.
#[axum::debug_handler]
pub async fn get_candidate_resume(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.candidate_service.get(id).await?;
    let resume = state
        .resume_service
        .get_by_candidate(id)
        .await?
        .ok_or_else(|| crate::error::Error::NotFound("Resume not found".to_string()))?;

    let experience = resume.experience_entries();
    let education = resume.education_entries();
    Ok(Json(serde_json::json!({
        "resume_id": resume.resume_id,
        "candidate_id": resume.candidate_id,
        "skills": resume.skills,
        "experience": experience,
        "education": education,
        "achievements": resume.achievements,
        "certifications": resume.certifications,
    })))
}

#[axum::debug_handler]
pub async fn create_resume(
    State(state): State<AppState>,
    Json(payload): Json<CreateResumePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let resume = state.resume_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(resume)))
}
