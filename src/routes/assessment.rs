use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::dto::assessment_dto::{
    AssessmentStatusResponse, StartAssessmentResponse, SubmitAnswerRequest, SubmitAnswerResponse,
};
use crate::models::wizard::WizardStage;
use crate::services::assessment_service::AnswerOutcome;
use crate::{error::Result, AppState};

const TIME_LIMIT_SECONDS: u32 = 300;

#[axum::debug_handler]
pub async fn start_assessment(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let (session_id, questions) = state.assessment_service.start();
    Ok(Json(StartAssessmentResponse {
        session_id,
        stage: WizardStage::InProgress,
        questions,
        time_limit_seconds: TIME_LIMIT_SECONDS,
    }))
}

/// One answer per question, in order. The final answer triggers grading
/// after the simulated processing pause.
#[axum::debug_handler]
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<impl IntoResponse> {
    match state.assessment_service.submit_answer(session_id, req.selected)? {
        AnswerOutcome::Next(question) => Ok(Json(SubmitAnswerResponse {
            stage: WizardStage::InProgress,
            next_question: Some(question),
            result: None,
        })),
        AnswerOutcome::AllAnswered => {
            crate::routes::processing_delay().await;
            let result = state.assessment_service.finalize(session_id)?;
            Ok(Json(SubmitAnswerResponse {
                stage: WizardStage::Complete,
                next_question: None,
                result: Some(result),
            }))
        }
    }
}

#[axum::debug_handler]
pub async fn assessment_status(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let (stage, answered, total_questions, result) = state.assessment_service.status(session_id)?;
    Ok(Json(AssessmentStatusResponse {
        stage,
        answered,
        total_questions,
        result,
    }))
}

#[axum::debug_handler]
pub async fn reset_assessment(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.assessment_service.reset(session_id)?;
    Ok(Json(serde_json::json!({ "stage": "idle" })))
}
