pub mod analysis_dto;
pub mod assessment_dto;
pub mod auth_dto;
pub mod candidate_dto;
pub mod interview_dto;
pub mod job_dto;
pub mod prediction_dto;
pub mod verification_dto;
