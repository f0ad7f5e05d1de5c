use crate::services::verification_service::ContactChannel;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartVerificationResponse {
    pub session_id: uuid::Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendContactCodeRequest {
    pub channel: ContactChannel,
    #[validate(length(min = 1, message = "A destination is required"))]
    pub destination: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckContactCodeRequest {
    pub code: String,
}

/// Selfies arrive as base64 payloads captured from the camera, optionally
/// wrapped in a data URL.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SelfieUploadRequest {
    #[validate(length(min = 1, message = "Image data is required"))]
    pub image_data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadAcceptedResponse {
    pub url: String,
    pub digest: String,
    pub verified: bool,
}
