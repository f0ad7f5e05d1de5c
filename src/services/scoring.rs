use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobRole {
    Frontend,
    Backend,
    Fullstack,
    Devops,
    Data,
}

impl JobRole {
    pub fn title(&self) -> &'static str {
        match self {
            JobRole::Frontend => "Frontend Developer",
            JobRole::Backend => "Backend Developer",
            JobRole::Fullstack => "Full Stack Developer",
            JobRole::Devops => "DevOps Engineer",
            JobRole::Data => "Data Engineer",
        }
    }

    fn base_salary(&self) -> f64 {
        match self {
            JobRole::Frontend => 85_000.0,
            JobRole::Backend => 90_000.0,
            JobRole::Fullstack => 100_000.0,
            JobRole::Devops => 110_000.0,
            JobRole::Data => 105_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Bachelors,
    Masters,
    Phd,
}

impl EducationLevel {
    fn modifier(&self) -> f64 {
        match self {
            EducationLevel::Phd => 25.0,
            EducationLevel::Masters => 20.0,
            EducationLevel::Bachelors => 15.0,
        }
    }

    fn salary_bump(&self) -> f64 {
        match self {
            EducationLevel::Phd => 20_000.0,
            EducationLevel::Masters => 12_000.0,
            EducationLevel::Bachelors => 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PredictionInput {
    pub job_role: JobRole,
    pub years_experience: u32,
    pub education: EducationLevel,
    pub previous_companies: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub role_title: String,
    pub percentile: i32,
    pub performance_score: i32,
    pub retention_probability: i32,
    pub team_fit: i32,
    pub project_success_rate: i32,
    pub time_to_productivity: f64,
    pub average_salary: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub overall_score: i32,
    pub sentiment_score: f64,
    pub language_proficiency: String,
    pub questions_answered: usize,
}

/// Scoring seam for the "AI" numbers surfaced by the dashboard.
///
/// The only implementation is [`StubScoring`], which derives everything
/// from form inputs, fixed bands, and a small random factor. There is no
/// model behind it and none is planned; swapping in a real one means
/// implementing this trait.
pub trait Scoring: Send + Sync {
    fn hiring_prediction(&self, input: &PredictionInput) -> Prediction;
    fn interview_summary(&self, responses: &[String]) -> InterviewSummary;
}

pub struct StubScoring;

impl Scoring for StubScoring {
    fn hiring_prediction(&self, input: &PredictionInput) -> Prediction {
        let exp_modifier = (input.years_experience as f64 / 10.0) * 30.0;
        let edu_modifier = input.education.modifier();
        let comp_modifier = (input.previous_companies as f64 / 5.0) * 15.0;
        let base_score = 60.0;
        let random_factor = rand::thread_rng().gen_range(-5.0..5.0);

        let performance_score = (base_score + exp_modifier + edu_modifier + comp_modifier / 3.0
            + random_factor)
            .clamp(60.0, 95.0);
        let retention_probability = (base_score + exp_modifier / 2.0 - comp_modifier * 1.5
            + edu_modifier / 2.0
            + random_factor)
            .clamp(50.0, 95.0);
        let team_fit = (base_score + exp_modifier / 3.0 + edu_modifier / 3.0 + comp_modifier / 3.0
            + random_factor)
            .clamp(60.0, 95.0);
        let project_success_rate = (performance_score * 0.8 + team_fit * 0.2).clamp(60.0, 95.0);
        let time_to_productivity = (6.0
            - (input.years_experience as f64 / 5.0) * 4.0
            - edu_modifier / 25.0)
            .max(1.0);
        let average_salary = input.job_role.base_salary()
            + input.years_experience as f64 * 5_000.0
            + input.education.salary_bump();
        let percentile = (performance_score + random_factor).clamp(50.0, 99.0);

        Prediction {
            role_title: input.job_role.title().to_string(),
            percentile: percentile.round() as i32,
            performance_score: performance_score.round() as i32,
            retention_probability: retention_probability.round() as i32,
            team_fit: team_fit.round() as i32,
            project_success_rate: project_success_rate.round() as i32,
            time_to_productivity: (time_to_productivity * 10.0).round() / 10.0,
            average_salary: ((average_salary / 1_000.0).round() * 1_000.0) as i64,
        }
    }

    fn interview_summary(&self, responses: &[String]) -> InterviewSummary {
        let mut rng = rand::thread_rng();
        let overall_score = rng.gen_range(60..=95);
        let sentiment_score = rng.gen_range(0.55..0.95_f64);
        let proficiency = if overall_score >= 85 { "C1" } else { "B2" };

        InterviewSummary {
            overall_score,
            sentiment_score: (sentiment_score * 100.0).round() / 100.0,
            language_proficiency: proficiency.to_string(),
            questions_answered: responses.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(years: u32, education: EducationLevel, companies: u32) -> PredictionInput {
        PredictionInput {
            job_role: JobRole::Fullstack,
            years_experience: years,
            education,
            previous_companies: companies,
        }
    }

    #[test]
    fn prediction_stays_inside_documented_bands() {
        let scoring = StubScoring;
        for years in [0, 3, 8, 15] {
            for companies in [0, 2, 5] {
                let p = scoring.hiring_prediction(&input(years, EducationLevel::Masters, companies));
                assert!((60..=95).contains(&p.performance_score));
                assert!((50..=95).contains(&p.retention_probability));
                assert!((60..=95).contains(&p.team_fit));
                assert!((60..=95).contains(&p.project_success_rate));
                assert!((50..=99).contains(&p.percentile));
                assert!(p.time_to_productivity >= 1.0);
            }
        }
    }

    #[test]
    fn salary_rounds_to_the_nearest_thousand() {
        let scoring = StubScoring;
        let p = scoring.hiring_prediction(&input(4, EducationLevel::Phd, 1));
        assert_eq!(p.average_salary % 1_000, 0);
        // fullstack base + 4y + phd bump
        assert_eq!(p.average_salary, 140_000);
        assert_eq!(p.role_title, "Full Stack Developer");
    }

    #[test]
    fn interview_summary_tracks_answer_count() {
        let scoring = StubScoring;
        let answers = vec!["a".to_string(); 5];
        let summary = scoring.interview_summary(&answers);
        assert_eq!(summary.questions_answered, 5);
        assert!((60..=95).contains(&summary.overall_score));
        assert!(summary.sentiment_score > 0.0 && summary.sentiment_score < 1.0);
    }
}
