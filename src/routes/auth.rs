use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use serde_json::json;
use validator::Validate;

use crate::dto::auth_dto::{
    ConfirmEmailPayload, ResendConfirmationPayload, SessionResponse, SignInPayload, SignUpPayload,
    SignUpResponse,
};
use crate::services::auth_service::Claims;
use crate::{error::Result, AppState};

#[axum::debug_handler]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.auth_service.sign_up(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            user_id: user.id,
            confirmation_required: true,
            message: "Account created successfully! Please check your email to confirm your account."
                .to_string(),
        }),
    ))
}

#[axum::debug_handler]
pub async fn confirm_email(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmEmailPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .auth_service
        .confirm_email(&payload.email, &payload.token)
        .await?;
    Ok(Json(json!({
        "confirmed": user.is_confirmed(),
        "email": user.email,
    })))
}

#[axum::debug_handler]
pub async fn resend_confirmation(
    State(state): State<AppState>,
    Json(payload): Json<ResendConfirmationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.auth_service.resend_confirmation(&payload.email).await?;
    Ok(Json(json!({
        "message": "If the address is registered, a new confirmation email has been sent"
    })))
}

#[axum::debug_handler]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let (user, token) = state.auth_service.sign_in(payload).await?;
    Ok(Json(SessionResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        user_id: user.id,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
    }))
}

/// Echoes the session behind the bearer middleware.
#[axum::debug_handler]
pub async fn session(Extension(claims): Extension<Claims>) -> Result<impl IntoResponse> {
    Ok(Json(json!({
        "user_id": claims.sub,
        "email": claims.email,
        "expires_at": claims.exp,
    })))
}
