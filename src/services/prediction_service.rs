use crate::dto::prediction_dto::GeneratePredictionPayload;
use crate::services::scoring::{Prediction, PredictionInput, Scoring};
use std::sync::Arc;

#[derive(Clone)]
pub struct PredictionService {
    scoring: Arc<dyn Scoring>,
}

impl PredictionService {
    pub fn new(scoring: Arc<dyn Scoring>) -> Self {
        Self { scoring }
    }

    pub fn generate(&self, payload: &GeneratePredictionPayload) -> Prediction {
        let input = PredictionInput {
            job_role: payload.job_role,
            years_experience: payload.years_experience,
            education: payload.education,
            previous_companies: payload.previous_companies,
        };
        self.scoring.hiring_prediction(&input)
    }
}
