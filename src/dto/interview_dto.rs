use crate::models::wizard::WizardStage;
use crate::services::interview_service::ChatMessage;
use crate::services::scoring::InterviewSummary;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartInterviewResponse {
    pub session_id: uuid::Uuid,
    pub position: String,
    pub total_questions: usize,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InterviewAnswerRequest {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewAnswerResponse {
    pub stage: WizardStage,
    pub messages: Vec<ChatMessage>,
    pub summary: Option<InterviewSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaToggleResponse {
    pub enabled: bool,
}
