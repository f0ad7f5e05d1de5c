use crate::dto::candidate_dto::CreateResumePayload;
use crate::error::{Error, Result};
use crate::models::resume::Resume;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ResumeService {
    pool: PgPool,
}

impl ResumeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateResumePayload) -> Result<Resume> {
        if let Some(candidate_id) = payload.candidate_id {
            let exists: Option<i64> =
                sqlx::query_scalar(r#"SELECT candidate_id FROM candidates WHERE candidate_id = $1"#)
                    .bind(candidate_id)
                    .fetch_optional(&self.pool)
                    .await?;
            if exists.is_none() {
                return Err(Error::NotFound("Candidate not found".to_string()));
            }
        }

        let resume = sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resumes (candidate_id, skills, experience, education, achievements, certifications, parsed_data)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(payload.candidate_id)
        .bind(&payload.skills)
        .bind(&payload.experience)
        .bind(&payload.education)
        .bind(&payload.achievements)
        .bind(&payload.certifications)
        .bind(&payload.parsed_data)
        .fetch_one(&self.pool)
        .await?;
        Ok(resume)
    }

    pub async fn get_by_candidate(&self, candidate_id: i64) -> Result<Option<Resume>> {
        let resume = sqlx::query_as::<_, Resume>(
            r#"SELECT * FROM resumes WHERE candidate_id = $1 ORDER BY resume_id DESC LIMIT 1"#,
        )
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(resume)
    }
}
