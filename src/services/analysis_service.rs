use crate::dto::analysis_dto::{AnalysisBreakdown, EducationItem, ExperienceItem, ResumeAnalysis};
use crate::error::{Error, Result};

/// Stand-in for the resume analysis pipeline. The payload is a fixed
/// sample; no parsing of the referenced document takes place.
#[derive(Clone, Default)]
pub struct AnalysisService;

impl AnalysisService {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, resume_url: &str, user_id: &str) -> Result<ResumeAnalysis> {
        if resume_url.trim().is_empty() || user_id.trim().is_empty() {
            return Err(Error::BadRequest("Missing required parameters".to_string()));
        }

        tracing::info!(user_id, "resume analysis completed");
        Ok(sample_analysis())
    }
}

fn sample_analysis() -> ResumeAnalysis {
    ResumeAnalysis {
        name: "John Smith".into(),
        email: "john.smith@example.com".into(),
        phone: "(555) 123-4567".into(),
        skill_match: 85,
        education: vec![
            EducationItem {
                degree: "Bachelor of Computer Science".into(),
                institution: "Stanford University".into(),
                year: "2020".into(),
            },
            EducationItem {
                degree: "Master of Software Engineering".into(),
                institution: "MIT".into(),
                year: "2022".into(),
            },
        ],
        experience: vec![
            ExperienceItem {
                title: "Software Engineer".into(),
                company: "TechCorp".into(),
                duration: "2022-2024".into(),
                description: "Developed scalable web applications using React and Node.js".into(),
            },
            ExperienceItem {
                title: "Frontend Developer".into(),
                company: "WebSolutions".into(),
                duration: "2020-2022".into(),
                description: "Created responsive user interfaces and optimized website performance"
                    .into(),
            },
        ],
        skills: vec![
            "JavaScript".into(),
            "TypeScript".into(),
            "React".into(),
            "Node.js".into(),
            "GraphQL".into(),
            "AWS".into(),
            "CI/CD".into(),
            "Agile".into(),
        ],
        analysis: AnalysisBreakdown {
            strengths: vec![
                "Strong technical skill set in modern web technologies".into(),
                "Experience with full-stack development".into(),
                "Education from prestigious institutions".into(),
            ],
            weaknesses: vec![
                "Limited management experience".into(),
                "Missing some advanced backend skills".into(),
                "Could use more certifications".into(),
            ],
            recommendations: vec![
                "Consider obtaining cloud certifications".into(),
                "Gain more experience with backend frameworks".into(),
                "Highlight specific project achievements".into(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_are_rejected() {
        let svc = AnalysisService::new();
        assert!(matches!(
            svc.analyze("", "user-1").unwrap_err(),
            Error::BadRequest(_)
        ));
        assert!(matches!(
            svc.analyze("/uploads/resumes/cv.pdf", "  ").unwrap_err(),
            Error::BadRequest(_)
        ));
    }

    #[test]
    fn returns_the_fixed_sample_payload() {
        let svc = AnalysisService::new();
        let report = svc.analyze("/uploads/resumes/cv.pdf", "user-1").unwrap();
        assert_eq!(report.name, "John Smith");
        assert_eq!(report.skill_match, 85);
        assert_eq!(report.education.len(), 2);
        assert_eq!(report.experience.len(), 2);
        assert_eq!(report.skills.len(), 8);
        assert_eq!(report.analysis.strengths.len(), 3);
    }
}
