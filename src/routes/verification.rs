use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Json},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use uuid::Uuid;
use validator::Validate;

use crate::dto::verification_dto::{
    CheckContactCodeRequest, SelfieUploadRequest, SendContactCodeRequest,
    StartVerificationResponse, UploadAcceptedResponse,
};
use crate::models::wizard::StepOutcome;
use crate::services::storage_service::validate_upload;
use crate::{
    error::{Error, Result},
    AppState,
};

const DOCUMENT_BUCKET: &str = "verification-documents";
const SELFIE_BUCKET: &str = "selfies";
const ALLOWED_DOCUMENT_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

#[axum::debug_handler]
pub async fn start_verification(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let session_id = state.verification_service.start();
    Ok(Json(StartVerificationResponse { session_id }))
}

/// Stores the ID document and marks the stage verified only once the
/// object is safely on disk.
#[axum::debug_handler]
pub async fn upload_document(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    while let Some(field) = multipart.next_field().await.map_err(Error::Multipart)? {
        if field.name().unwrap_or_default() != "file" {
            continue;
        }
        let filename = field.file_name().unwrap_or("document.bin").to_string();
        let data = field.bytes().await.map_err(Error::Multipart)?;

        let ext = validate_upload(&filename, &data, &ALLOWED_DOCUMENT_EXTENSIONS)?;
        let stored = state
            .storage_service
            .store(DOCUMENT_BUCKET, &ext, &data)
            .await?;
        state
            .verification_service
            .submit_document(session_id, &stored)?;
        return Ok(Json(UploadAcceptedResponse {
            url: stored.url,
            digest: stored.digest,
            verified: true,
        }));
    }

    Err(Error::BadRequest(
        "Please upload an ID document".to_string(),
    ))
}

#[axum::debug_handler]
pub async fn upload_selfie(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SelfieUploadRequest>,
) -> Result<impl IntoResponse> {
    req.validate()?;

    // Data URLs carry a `data:image/png;base64,` prefix; raw base64 is
    // accepted as-is.
    let encoded = req
        .image_data
        .rsplit_once("base64,")
        .map(|(_, tail)| tail)
        .unwrap_or(req.image_data.as_str());
    let data = BASE64
        .decode(encoded.trim())
        .map_err(|_| Error::BadRequest("Invalid selfie image data".to_string()))?;
    if data.is_empty() {
        return Err(Error::BadRequest("Invalid selfie image data".to_string()));
    }

    let stored = state.storage_service.store(SELFIE_BUCKET, "png", &data).await?;
    state.verification_service.submit_selfie(session_id, &stored)?;
    Ok(Json(UploadAcceptedResponse {
        url: stored.url,
        digest: stored.digest,
        verified: true,
    }))
}

#[axum::debug_handler]
pub async fn send_contact_code(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SendContactCodeRequest>,
) -> Result<impl IntoResponse> {
    req.validate()?;
    state
        .verification_service
        .send_contact_code(session_id, req.channel, &req.destination)?;
    Ok(Json(serde_json::json!({ "sent": true })))
}

#[axum::debug_handler]
pub async fn check_contact_code(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<CheckContactCodeRequest>,
) -> Result<impl IntoResponse> {
    let outcome = state
        .verification_service
        .check_contact_code(session_id, &req.code)?;

    if outcome == StepOutcome::AllCollected {
        crate::routes::processing_delay().await;
        let status = state.verification_service.finalize(session_id)?;
        return Ok(Json(serde_json::json!({
            "verified": true,
            "status": status,
        })));
    }
    let status = state.verification_service.status(session_id)?;
    Ok(Json(serde_json::json!({
        "verified": true,
        "status": status,
    })))
}

#[axum::debug_handler]
pub async fn verification_status(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let status = state.verification_service.status(session_id)?;
    Ok(Json(status))
}

#[axum::debug_handler]
pub async fn reset_verification(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.verification_service.reset(session_id)?;
    Ok(Json(serde_json::json!({ "stage": "idle" })))
}
