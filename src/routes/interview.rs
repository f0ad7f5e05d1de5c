use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::interview_dto::{
    InterviewAnswerRequest, InterviewAnswerResponse, MediaToggleResponse, StartInterviewResponse,
};
use crate::models::wizard::WizardStage;
use crate::{error::Result, AppState};

#[axum::debug_handler]
pub async fn start_interview(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let (session_id, messages) = state.interview_service.start();
    Ok(Json(StartInterviewResponse {
        session_id,
        position: "Frontend Developer Position".to_string(),
        total_questions: crate::services::interview_service::QUESTION_COUNT,
        messages,
    }))
}

#[axum::debug_handler]
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<InterviewAnswerRequest>,
) -> Result<impl IntoResponse> {
    req.validate()?;
    let (messages, done) = state.interview_service.answer(session_id, &req.answer)?;
    if !done {
        return Ok(Json(InterviewAnswerResponse {
            stage: WizardStage::InProgress,
            messages,
            summary: None,
        }));
    }

    crate::routes::processing_delay().await;
    let summary = state.interview_service.finalize(session_id)?;
    Ok(Json(InterviewAnswerResponse {
        stage: WizardStage::Complete,
        messages,
        summary: Some(summary),
    }))
}

#[axum::debug_handler]
pub async fn toggle_camera(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let enabled = state.interview_service.toggle_camera(session_id)?;
    Ok(Json(MediaToggleResponse { enabled }))
}

#[axum::debug_handler]
pub async fn toggle_microphone(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let enabled = state.interview_service.toggle_microphone(session_id)?;
    Ok(Json(MediaToggleResponse { enabled }))
}

#[axum::debug_handler]
pub async fn interview_status(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let snapshot = state.interview_service.snapshot(session_id)?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn reset_interview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.interview_service.reset(session_id)?;
    Ok(Json(serde_json::json!({ "stage": "idle" })))
}
