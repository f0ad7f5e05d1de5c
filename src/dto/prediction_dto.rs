use crate::services::scoring::{EducationLevel, JobRole};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeneratePredictionPayload {
    pub job_role: JobRole,
    #[validate(range(max = 15, message = "Years of experience must be between 0 and 15"))]
    pub years_experience: u32,
    pub education: EducationLevel,
    #[validate(range(max = 10, message = "Previous companies must be between 0 and 10"))]
    pub previous_companies: u32,
}
