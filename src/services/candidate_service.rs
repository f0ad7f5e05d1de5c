use crate::dto::candidate_dto::CreateCandidatePayload;
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        let existing: Option<i64> =
            sqlx::query_scalar(r#"SELECT candidate_id FROM candidates WHERE email = $1"#)
                .bind(&payload.email)
                .fetch_optional(&self.pool)
                .await?;
        if existing.is_some() {
            return Err(Error::Conflict(
                "A candidate with this email address already exists".to_string(),
            ));
        }

        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            INSERT INTO candidates (first_name, last_name, email, phone, location, linkedin_profile, portfolio_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.location)
        .bind(none_if_blank(payload.linkedin_profile))
        .bind(none_if_blank(payload.portfolio_url))
        .fetch_one(&self.pool)
        .await?;

        Ok(candidate)
    }

    /// Most-recent-first listing, capped at `limit` rows.
    pub async fn list(&self, limit: i64) -> Result<Vec<Candidate>> {
        let candidates = sqlx::query_as::<_, Candidate>(
            r#"SELECT * FROM candidates ORDER BY created_at DESC LIMIT $1"#,
        )
        .bind(limit.clamp(1, 100))
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }

    pub async fn get(&self, candidate_id: i64) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"SELECT * FROM candidates WHERE candidate_id = $1"#,
        )
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?;
        candidate.ok_or_else(|| Error::NotFound("Candidate not found".to_string()))
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
