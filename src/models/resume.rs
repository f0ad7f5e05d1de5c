use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resume {
    pub resume_id: i64,
    pub candidate_id: Option<i64>,
    pub skills: Option<String>,
    pub experience: Option<JsonValue>,
    pub education: Option<JsonValue>,
    pub achievements: Option<String>,
    pub certifications: Option<String>,
    pub parsed_data: Option<JsonValue>,
}

/// Loosely-typed experience entry. Rows written by the dashboard leave
/// fields out; missing values fall back to placeholder strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default = "default_role")]
    pub title: String,
    #[serde(default = "default_company")]
    pub company: String,
    #[serde(default = "default_na")]
    pub duration: String,
    #[serde(default = "default_description")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default = "default_degree")]
    pub degree: String,
    #[serde(default = "default_institution")]
    pub institution: String,
    #[serde(default = "default_na")]
    pub year: String,
}

fn default_role() -> String {
    "Role".to_string()
}

fn default_company() -> String {
    "Company".to_string()
}

fn default_na() -> String {
    "N/A".to_string()
}

fn default_description() -> String {
    "No description provided.".to_string()
}

fn default_degree() -> String {
    "Degree".to_string()
}

fn default_institution() -> String {
    "Institution".to_string()
}

impl Resume {
    /// Parses the loosely-typed experience column, tolerating rows that
    /// hold something other than a list.
    pub fn experience_entries(&self) -> Vec<ExperienceEntry> {
        self.experience
            .clone()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }

    pub fn education_entries(&self) -> Vec<EducationEntry> {
        self.education
            .clone()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let resume = Resume {
            resume_id: 1,
            candidate_id: Some(1),
            skills: None,
            experience: Some(json!([{ "title": "Software Engineer" }])),
            education: Some(json!([{ "institution": "MIT" }])),
            achievements: None,
            certifications: None,
            parsed_data: None,
        };

        let experience = resume.experience_entries();
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].title, "Software Engineer");
        assert_eq!(experience[0].company, "Company");
        assert_eq!(experience[0].duration, "N/A");
        assert_eq!(experience[0].description, "No description provided.");

        let education = resume.education_entries();
        assert_eq!(education[0].degree, "Degree");
        assert_eq!(education[0].institution, "MIT");
    }

    #[test]
    fn malformed_columns_parse_to_empty_lists() {
        let resume = Resume {
            resume_id: 2,
            candidate_id: None,
            skills: None,
            experience: Some(json!("not a list")),
            education: None,
            achievements: None,
            certifications: None,
            parsed_data: None,
        };
        assert!(resume.experience_entries().is_empty());
        assert!(resume.education_entries().is_empty());
    }
}
