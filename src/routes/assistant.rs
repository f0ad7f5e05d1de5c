use axum::response::{IntoResponse, Json};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;

/// Canned answer pool for the recruitment assistant chat.
const RESPONSES: [&str; 6] = [
    "Based on the candidate's resume, I recommend focusing on their technical skills during the interview. Their experience with React and Node.js is impressive.",
    "I analyzed the interview results and this candidate scored well in problem-solving but may need improvement in communication skills.",
    "The verification process for this candidate's credentials is complete. All educational qualifications have been confirmed.",
    "Looking at hiring trends for this position, candidates with cloud computing experience tend to perform better in the role.",
    "I've prepared a customized assessment for this position that focuses on both technical skills and cultural fit.",
    "For this senior position, I'd recommend including scenario-based questions about team leadership and conflict resolution.",
];

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssistantMessageRequest {
    #[validate(length(min = 1, message = "A message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantMessageResponse {
    pub reply: String,
}

#[axum::debug_handler]
pub async fn send_message(
    Json(req): Json<AssistantMessageRequest>,
) -> Result<impl IntoResponse> {
    req.validate()?;
    crate::routes::processing_delay().await;
    let reply = RESPONSES
        .choose(&mut rand::thread_rng())
        .expect("response pool is non-empty");
    Ok(Json(AssistantMessageResponse {
        reply: reply.to_string(),
    }))
}
