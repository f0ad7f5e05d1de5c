use crate::dto::job_dto::CreateJobPayload;
use crate::error::Result;
use crate::models::job_posting::JobPosting;
use sqlx::PgPool;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<JobPosting> {
        let posting = sqlx::query_as::<_, JobPosting>(
            r#"
            INSERT INTO job_postings (job_title, company_name, location, job_description, required_skills, experience_level)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&payload.job_title)
        .bind(&payload.company_name)
        .bind(&payload.location)
        .bind(&payload.job_description)
        .bind(&payload.required_skills)
        .bind(&payload.experience_level)
        .fetch_one(&self.pool)
        .await?;
        Ok(posting)
    }

    pub async fn list(&self) -> Result<Vec<JobPosting>> {
        let postings = sqlx::query_as::<_, JobPosting>(
            r#"SELECT * FROM job_postings ORDER BY posted_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(postings)
    }
}
