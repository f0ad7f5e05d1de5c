pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    analysis_service::AnalysisService, assessment_service::AssessmentService,
    auth_service::AuthService, candidate_service::CandidateService,
    dashboard_service::DashboardService, interview_service::InterviewService,
    job_service::JobService, prediction_service::PredictionService, resume_service::ResumeService,
    scoring::StubScoring, storage_service::StorageService,
    verification_service::VerificationService,
};
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth_service: AuthService,
    pub candidate_service: CandidateService,
    pub job_service: JobService,
    pub resume_service: ResumeService,
    pub storage_service: StorageService,
    pub analysis_service: AnalysisService,
    pub assessment_service: AssessmentService,
    pub interview_service: InterviewService,
    pub verification_service: VerificationService,
    pub prediction_service: PredictionService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        let scoring = Arc::new(StubScoring);

        Self {
            auth_service: AuthService::new(pool.clone()),
            candidate_service: CandidateService::new(pool.clone()),
            job_service: JobService::new(pool.clone()),
            resume_service: ResumeService::new(pool.clone()),
            storage_service: StorageService::new(&config.uploads_dir),
            analysis_service: AnalysisService::new(),
            assessment_service: AssessmentService::new(),
            interview_service: InterviewService::new(scoring.clone()),
            verification_service: VerificationService::new(),
            prediction_service: PredictionService::new(scoring),
            dashboard_service: DashboardService::new(pool.clone()),
            pool,
        }
    }
}

/// All `/api` routes. The caller attaches state, rate limiting, and the
/// outer tower layers.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // auth
        .route("/api/auth/signup", post(routes::auth::sign_up))
        .route("/api/auth/login", post(routes::auth::sign_in))
        .route("/api/auth/confirm", post(routes::auth::confirm_email))
        .route("/api/auth/resend", post(routes::auth::resend_confirmation))
        // candidates
        .route(
            "/api/candidates",
            get(routes::candidate_routes::list_candidates)
                .post(routes::candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            get(routes::candidate_routes::get_candidate),
        )
        .route(
            "/api/candidates/:id/resume",
            get(routes::candidate_routes::get_candidate_resume),
        )
        // job postings
        .route(
            "/api/jobs",
            get(routes::job_routes::list_jobs).post(routes::job_routes::create_job),
        )
        // resume tools
        .route("/api/resumes", post(routes::candidate_routes::create_resume))
        .route("/api/resumes/upload", post(routes::resume_routes::upload_resume))
        .route("/api/resumes/analyze", post(routes::resume_routes::analyze_resume))
        // skill assessment wizard
        .route("/api/assessment/start", post(routes::assessment::start_assessment))
        .route(
            "/api/assessment/:id/answer",
            post(routes::assessment::submit_answer),
        )
        .route(
            "/api/assessment/:id",
            get(routes::assessment::assessment_status),
        )
        .route(
            "/api/assessment/:id/reset",
            post(routes::assessment::reset_assessment),
        )
        // AI interview wizard
        .route("/api/interview/start", post(routes::interview::start_interview))
        .route("/api/interview/:id/answer", post(routes::interview::submit_answer))
        .route("/api/interview/:id/camera", post(routes::interview::toggle_camera))
        .route(
            "/api/interview/:id/microphone",
            post(routes::interview::toggle_microphone),
        )
        .route("/api/interview/:id", get(routes::interview::interview_status))
        .route("/api/interview/:id/reset", post(routes::interview::reset_interview))
        // identity verification wizard
        .route(
            "/api/verification/start",
            post(routes::verification::start_verification),
        )
        .route(
            "/api/verification/:id/document",
            post(routes::verification::upload_document),
        )
        .route(
            "/api/verification/:id/selfie",
            post(routes::verification::upload_selfie),
        )
        .route(
            "/api/verification/:id/contact/send",
            post(routes::verification::send_contact_code),
        )
        .route(
            "/api/verification/:id/contact/check",
            post(routes::verification::check_contact_code),
        )
        .route(
            "/api/verification/:id",
            get(routes::verification::verification_status),
        )
        .route(
            "/api/verification/:id/reset",
            post(routes::verification::reset_verification),
        )
        // predictive hiring
        .route(
            "/api/prediction/generate",
            post(routes::prediction::generate_prediction),
        )
        // assistant chat
        .route("/api/assistant/message", post(routes::assistant::send_message))
        // dashboard
        .route("/api/dashboard/stats", get(routes::dashboard::dashboard_stats))
}
