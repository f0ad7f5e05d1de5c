use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCandidatePayload {
    #[validate(length(min = 2, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Phone number is required"))]
    pub phone: String,
    #[validate(length(min = 2, message = "Location is required"))]
    pub location: String,
    pub linkedin_profile: Option<String>,
    pub portfolio_url: Option<String>,
}

impl CreateCandidatePayload {
    /// Profile links are optional but must be well-formed http(s) URLs
    /// when present.
    pub fn validate_links(&self) -> crate::error::Result<()> {
        for link in [&self.linkedin_profile, &self.portfolio_url]
            .into_iter()
            .flatten()
        {
            let trimmed = link.trim();
            if trimmed.is_empty() {
                continue;
            }
            let parsed = url::Url::parse(trimmed).map_err(|_| {
                crate::error::Error::BadRequest("The provided link is not a valid URL".to_string())
            })?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(crate::error::Error::BadRequest(
                    "Only HTTP and HTTPS links are allowed".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateResumePayload {
    pub candidate_id: Option<i64>,
    pub skills: Option<String>,
    pub experience: Option<JsonValue>,
    pub education: Option<JsonValue>,
    pub achievements: Option<String>,
    pub certifications: Option<String>,
    pub parsed_data: Option<JsonValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateListQuery {
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CreateCandidatePayload {
        CreateCandidatePayload {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+1555000111".into(),
            location: "London".into(),
            linkedin_profile: None,
            portfolio_url: None,
        }
    }

    #[test]
    fn missing_email_fails_validation() {
        let mut p = payload();
        p.email = "".into();
        assert!(p.validate().is_err());
        p.email = "not-an-email".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn well_formed_payload_passes() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn profile_links_must_be_http() {
        let mut p = payload();
        p.linkedin_profile = Some("ftp://example.com/profile".into());
        assert!(p.validate_links().is_err());
        p.linkedin_profile = Some("https://linkedin.com/in/ada".into());
        assert!(p.validate_links().is_ok());
    }
}
