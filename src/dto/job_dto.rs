use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 2, message = "Job title is required"))]
    pub job_title: String,
    #[validate(length(min = 2, message = "Company name is required"))]
    pub company_name: String,
    #[validate(length(min = 2, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 10, message = "Job description is required"))]
    pub job_description: String,
    #[validate(length(min = 5, message = "Required skills are required"))]
    pub required_skills: String,
    #[validate(length(min = 1, message = "Experience level is required"))]
    pub experience_level: String,
}
