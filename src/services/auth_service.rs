use crate::dto::auth_dto::{SignInPayload, SignUpPayload};
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::security;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

const SESSION_TTL_SECS: i64 = 60 * 60 * 24;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates an unconfirmed account. The caller is expected to confirm
    /// via the emailed token before a session can be issued.
    pub async fn sign_up(&self, payload: SignUpPayload) -> Result<User> {
        if payload.password != payload.confirm_password {
            return Err(Error::BadRequest("Passwords do not match".to_string()));
        }

        let existing: Option<Uuid> = sqlx::query_scalar(r#"SELECT id FROM users WHERE email = $1"#)
            .bind(&payload.email)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(Error::Conflict(
                "This email is already registered. Please login instead".to_string(),
            ));
        }

        let password_hash = security::hash_password(&payload.password)
            .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?;
        let confirmation_token = security::generate_token(32);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name, confirmation_token)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.email)
        .bind(&password_hash)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&confirmation_token)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(user_id = %user.id, "registered new account, confirmation pending");
        Ok(user)
    }

    pub async fn confirm_email(&self, email: &str, token: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Account not found".to_string()))?;

        if user.is_confirmed() {
            return Ok(user);
        }

        let stored = user
            .confirmation_token
            .as_deref()
            .ok_or_else(|| Error::BadRequest("No confirmation is pending".to_string()))?;
        if !security::tokens_match(token, stored) {
            return Err(Error::Unauthorized("Invalid confirmation token".to_string()));
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email_confirmed_at = NOW(), confirmation_token = NULL
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user.id)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    /// Rotates the confirmation token for an unconfirmed account. Always
    /// reports success so the endpoint does not leak which addresses
    /// exist.
    pub async fn resend_confirmation(&self, email: &str) -> Result<()> {
        let token = security::generate_token(32);
        let _ = sqlx::query(
            r#"
            UPDATE users
            SET confirmation_token = $1
            WHERE email = $2 AND email_confirmed_at IS NULL
            "#,
        )
        .bind(&token)
        .bind(email)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn sign_in(&self, payload: SignInPayload) -> Result<(User, String)> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(&payload.email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::Unauthorized("invalid_credentials".to_string()))?;

        let ok = security::verify_password(&payload.password, &user.password_hash)
            .map_err(|e| Error::Internal(format!("Password verification failed: {}", e)))?;
        if !ok {
            return Err(Error::Unauthorized("invalid_credentials".to_string()));
        }
        if !user.is_confirmed() {
            return Err(Error::EmailNotConfirmed);
        }

        let token = self.issue_token(&user)?;
        Ok((user, token))
    }

    fn issue_token(&self, user: &User) -> Result<String> {
        let config = crate::config::get_config();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            exp: (Utc::now().timestamp() + SESSION_TTL_SECS) as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .map_err(|e| Error::Internal(format!("Failed to issue session token: {}", e)))
    }
}
