use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::dto::prediction_dto::GeneratePredictionPayload;
use crate::{error::Result, AppState};

/// Formula-derived "prediction" for a candidate profile. The numbers come
/// from the scoring stub, after the simulated processing pause.
#[axum::debug_handler]
pub async fn generate_prediction(
    State(state): State<AppState>,
    Json(payload): Json<GeneratePredictionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    crate::routes::processing_delay().await;
    let prediction = state.prediction_service.generate(&payload);
    Ok(Json(prediction))
}
