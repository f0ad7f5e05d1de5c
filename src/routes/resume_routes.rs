use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Json},
};

use crate::dto::analysis_dto::{AnalyzeResumeRequest, ResumeUploadResponse};
use crate::services::storage_service::validate_upload;
use crate::{
    error::{Error, Result},
    AppState,
};

const RESUME_BUCKET: &str = "resumes";
const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
const ALLOWED_RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Accepts a resume document and stores it in the resumes bucket. The
/// file is only persisted, never parsed; analysis is a separate call.
#[axum::debug_handler]
pub async fn upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    while let Some(field) = multipart.next_field().await.map_err(Error::Multipart)? {
        if field.name().unwrap_or_default() != "file" {
            continue;
        }
        let filename = field.file_name().unwrap_or("resume.bin").to_string();
        let data: bytes::Bytes = field.bytes().await.map_err(Error::Multipart)?;

        if data.len() > MAX_RESUME_BYTES {
            return Err(Error::BadRequest("File size exceeds 5MB limit".to_string()));
        }
        let ext = validate_upload(&filename, &data, &ALLOWED_RESUME_EXTENSIONS)?;
        let stored = state.storage_service.store(RESUME_BUCKET, &ext, &data).await?;
        return Ok(Json(ResumeUploadResponse {
            url: stored.url,
            digest: stored.digest,
        }));
    }

    Err(Error::BadRequest(
        "Please upload a PDF or Word document".to_string(),
    ))
}

/// Returns the fixed mock analysis after the simulated processing pause.
#[axum::debug_handler]
pub async fn analyze_resume(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeResumeRequest>,
) -> Result<impl IntoResponse> {
    let resume_url = req.resume_url.unwrap_or_default();
    let user_id = req.user_id.unwrap_or_default();

    let report = state.analysis_service.analyze(&resume_url, &user_id)?;
    crate::routes::processing_delay().await;
    Ok(Json(report))
}
