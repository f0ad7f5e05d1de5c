pub mod analysis_service;
pub mod assessment_service;
pub mod auth_service;
pub mod candidate_service;
pub mod dashboard_service;
pub mod interview_service;
pub mod job_service;
pub mod prediction_service;
pub mod resume_service;
pub mod scoring;
pub mod storage_service;
pub mod verification_service;
