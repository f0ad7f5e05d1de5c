use crate::error::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_candidates: i64,
    pub new_this_month: i64,
    pub resumes_on_file: i64,
    pub open_positions: i64,
}

#[derive(Clone)]
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        let total_candidates: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM candidates"#)
            .fetch_one(&self.pool)
            .await?;
        let new_this_month: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM candidates WHERE created_at > NOW() - INTERVAL '30 days'"#,
        )
        .fetch_one(&self.pool)
        .await?;
        let resumes_on_file: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM resumes"#)
            .fetch_one(&self.pool)
            .await?;
        let open_positions: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM job_postings"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(DashboardStats {
            total_candidates,
            new_this_month,
            resumes_on_file,
            open_positions,
        })
    }
}
