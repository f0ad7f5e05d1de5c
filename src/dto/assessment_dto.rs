use crate::models::question::{AssessmentQuestion, AssessmentSection, SelectionMode};
use crate::models::wizard::WizardStage;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Question as shown to the candidate; correct answers and explanations
/// stay server-side until grading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: String,
    pub section: AssessmentSection,
    #[serde(rename = "type")]
    pub mode: SelectionMode,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&AssessmentQuestion> for QuestionView {
    fn from(q: &AssessmentQuestion) -> Self {
        Self {
            id: q.id.clone(),
            section: q.section,
            mode: q.mode,
            question: q.question.clone(),
            options: q.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartAssessmentResponse {
    pub session_id: uuid::Uuid,
    pub stage: WizardStage,
    pub questions: Vec<QuestionView>,
    pub time_limit_seconds: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    pub selected: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub stage: WizardStage,
    pub next_question: Option<QuestionView>,
    pub result: Option<AssessmentResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub title: String,
    pub match_percentage: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub technical: i32,
    pub behavioral: i32,
    pub overall: i32,
    pub technical_strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub job_matches: Vec<JobMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentStatusResponse {
    pub stage: WizardStage,
    pub answered: usize,
    pub total_questions: usize,
    pub result: Option<AssessmentResult>,
}
