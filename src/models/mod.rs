pub mod candidate;
pub mod job_posting;
pub mod question;
pub mod resume;
pub mod user;
pub mod wizard;
