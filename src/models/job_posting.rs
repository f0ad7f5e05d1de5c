use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub job_id: i64,
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub job_description: String,
    pub required_skills: String,
    pub experience_level: String,
    pub posted_at: Option<DateTime<Utc>>,
}
