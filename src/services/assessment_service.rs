use crate::dto::assessment_dto::{AssessmentResult, JobMatch, QuestionView};
use crate::error::{Error, Result};
use crate::models::question::{AssessmentQuestion, AssessmentSection, SelectionMode};
use crate::models::wizard::{StepDescriptor, StepOutcome, WizardFlow, WizardStage};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Fixed question bank for the Software Developer assessment. The bank is
/// sample content, not generated; the sections mirror the dashboard tabs.
pub fn question_bank() -> Vec<AssessmentQuestion> {
    vec![
        AssessmentQuestion {
            id: "t1".into(),
            section: AssessmentSection::Technical,
            mode: SelectionMode::Single,
            question: "Which of the following is a declarative JavaScript library for building user interfaces?".into(),
            options: vec!["Angular".into(), "React".into(), "Vue".into(), "jQuery".into()],
            correct: vec!["React".into()],
            explanation: Some(
                "React is a declarative JavaScript library developed by Facebook for building user interfaces.".into(),
            ),
        },
        AssessmentQuestion {
            id: "t2".into(),
            section: AssessmentSection::Technical,
            mode: SelectionMode::Multiple,
            question: "Which of the following are JavaScript frameworks or libraries?".into(),
            options: vec!["React".into(), "Python".into(), "Angular".into(), "Java".into()],
            correct: vec!["React".into(), "Angular".into()],
            explanation: Some(
                "React and Angular are JavaScript frameworks/libraries, while Python and Java are separate programming languages.".into(),
            ),
        },
        AssessmentQuestion {
            id: "t3".into(),
            section: AssessmentSection::Technical,
            mode: SelectionMode::Single,
            question: "What does API stand for?".into(),
            options: vec![
                "Application Programming Interface".into(),
                "Automated Programming Interface".into(),
                "Application Process Integration".into(),
                "Advanced Programming Interface".into(),
            ],
            correct: vec!["Application Programming Interface".into()],
            explanation: Some(
                "API stands for Application Programming Interface, which defines interactions between multiple software applications.".into(),
            ),
        },
        AssessmentQuestion {
            id: "b1".into(),
            section: AssessmentSection::Behavioral,
            mode: SelectionMode::Single,
            question: "When working on a team project with a tight deadline, which approach would you prioritize?".into(),
            options: vec![
                "Working independently to maximize efficiency".into(),
                "Regular communication with team members even if it takes time".into(),
                "Focusing solely on your assigned tasks".into(),
                "Taking on additional responsibilities to ensure project completion".into(),
            ],
            correct: vec!["Regular communication with team members even if it takes time".into()],
            explanation: None,
        },
        AssessmentQuestion {
            id: "b2".into(),
            section: AssessmentSection::Behavioral,
            mode: SelectionMode::Multiple,
            question: "Which of these qualities are most important for effective teamwork?".into(),
            options: vec![
                "Communication".into(),
                "Independence".into(),
                "Technical expertise".into(),
                "Leadership".into(),
            ],
            correct: vec!["Communication".into(), "Leadership".into()],
            explanation: None,
        },
        AssessmentQuestion {
            id: "b3".into(),
            section: AssessmentSection::Behavioral,
            mode: SelectionMode::Single,
            question: "How do you typically respond to constructive criticism?".into(),
            options: vec![
                "I take it personally and get defensive".into(),
                "I listen carefully and consider how to improve".into(),
                "I ignore it if I disagree".into(),
                "I immediately try to implement all suggestions".into(),
            ],
            correct: vec!["I listen carefully and consider how to improve".into()],
            explanation: None,
        },
    ]
}

#[derive(Debug)]
struct AssessmentSession {
    flow: WizardFlow,
    questions: Vec<AssessmentQuestion>,
    result: Option<AssessmentResult>,
}

#[derive(Debug)]
pub enum AnswerOutcome {
    Next(QuestionView),
    AllAnswered,
}

#[derive(Clone)]
pub struct AssessmentService {
    sessions: Arc<Mutex<HashMap<Uuid, AssessmentSession>>>,
}

impl Default for AssessmentService {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentService {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn start(&self) -> (Uuid, Vec<QuestionView>) {
        let questions = question_bank();
        let steps = questions
            .iter()
            .map(|q| StepDescriptor::required(q.id.clone(), q.question.clone()))
            .collect();
        let mut flow = WizardFlow::new(steps);
        flow.start();

        let views = questions.iter().map(QuestionView::from).collect();
        let id = Uuid::new_v4();
        self.sessions.lock().expect("assessment session store poisoned").insert(
            id,
            AssessmentSession {
                flow,
                questions,
                result: None,
            },
        );
        (id, views)
    }

    pub fn submit_answer(&self, id: Uuid, selected: Vec<String>) -> Result<AnswerOutcome> {
        let mut sessions = self.sessions.lock().expect("assessment session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Assessment session not found".to_string()))?;

        match session.flow.submit_step(json!(selected))? {
            StepOutcome::Advanced { next_index } => {
                let question = &session.questions[next_index];
                Ok(AnswerOutcome::Next(QuestionView::from(question)))
            }
            StepOutcome::AllCollected => Ok(AnswerOutcome::AllAnswered),
        }
    }

    /// Grades every collected answer and moves the session to `Complete`.
    /// Called after the artificial processing delay.
    pub fn finalize(&self, id: Uuid) -> Result<AssessmentResult> {
        let mut sessions = self.sessions.lock().expect("assessment session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Assessment session not found".to_string()))?;
        if session.flow.stage() != WizardStage::Processing {
            return Err(Error::Conflict(
                "Assessment is not awaiting grading".to_string(),
            ));
        }

        let mut per_section: HashMap<AssessmentSection, (u32, u32)> = HashMap::new();
        for question in &session.questions {
            let entry = per_section.entry(question.section).or_insert((0, 0));
            entry.1 += 1;
            let selected: Vec<String> = session
                .flow
                .response(&question.id)
                .cloned()
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default();
            if question.is_correct(&selected) {
                entry.0 += 1;
            }
        }

        let technical = section_score(&per_section, AssessmentSection::Technical);
        let behavioral = section_score(&per_section, AssessmentSection::Behavioral);
        let result = AssessmentResult {
            technical,
            behavioral,
            overall: ((technical + behavioral) as f64 / 2.0).round() as i32,
            technical_strengths: vec![
                "React Development".into(),
                "API Integration".into(),
                "JavaScript Fundamentals".into(),
            ],
            areas_for_improvement: vec!["Database Design".into(), "Testing Methodologies".into()],
            job_matches: vec![
                JobMatch {
                    title: "Frontend Developer".into(),
                    match_percentage: 92,
                },
                JobMatch {
                    title: "React Developer".into(),
                    match_percentage: 88,
                },
            ],
        };

        session.flow.complete();
        session.result = Some(result.clone());
        Ok(result)
    }

    pub fn status(&self, id: Uuid) -> Result<(WizardStage, usize, usize, Option<AssessmentResult>)> {
        let sessions = self.sessions.lock().expect("assessment session store poisoned");
        let session = sessions
            .get(&id)
            .ok_or_else(|| Error::NotFound("Assessment session not found".to_string()))?;
        Ok((
            session.flow.stage(),
            session.flow.index(),
            session.questions.len(),
            session.result.clone(),
        ))
    }

    pub fn reset(&self, id: Uuid) -> Result<()> {
        let mut sessions = self.sessions.lock().expect("assessment session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Assessment session not found".to_string()))?;
        session.flow.reset();
        session.result = None;
        Ok(())
    }
}

fn section_score(
    per_section: &HashMap<AssessmentSection, (u32, u32)>,
    section: AssessmentSection,
) -> i32 {
    match per_section.get(&section) {
        Some((correct, total)) if *total > 0 => {
            ((*correct as f64 / *total as f64) * 100.0).round() as i32
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all_correct(service: &AssessmentService, id: Uuid) {
        for question in question_bank() {
            service.submit_answer(id, question.correct.clone()).unwrap();
        }
    }

    #[test]
    fn all_correct_answers_score_one_hundred_percent() {
        let service = AssessmentService::new();
        let (id, questions) = service.start();
        assert_eq!(questions.len(), 6);
        answer_all_correct(&service, id);

        let result = service.finalize(id).unwrap();
        assert_eq!(result.technical, 100);
        assert_eq!(result.behavioral, 100);
        assert_eq!(result.overall, 100);

        let (stage, _, _, stored) = service.status(id).unwrap();
        assert_eq!(stage, WizardStage::Complete);
        assert!(stored.is_some());
    }

    #[test]
    fn empty_selection_is_rejected_without_advancing() {
        let service = AssessmentService::new();
        let (id, _) = service.start();
        let err = service.submit_answer(id, vec![]).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        let (stage, index, total, _) = service.status(id).unwrap();
        assert_eq!(stage, WizardStage::InProgress);
        assert_eq!(index, 0);
        assert_eq!(total, 6);
    }

    #[test]
    fn wrong_answers_lower_only_their_section() {
        let service = AssessmentService::new();
        let (id, _) = service.start();
        // Miss the first technical question, ace the rest.
        service.submit_answer(id, vec!["jQuery".to_string()]).unwrap();
        for question in question_bank().into_iter().skip(1) {
            service.submit_answer(id, question.correct.clone()).unwrap();
        }
        let result = service.finalize(id).unwrap();
        assert_eq!(result.technical, 67);
        assert_eq!(result.behavioral, 100);
        assert_eq!(result.overall, 84);
    }

    #[test]
    fn finalize_requires_processing_stage() {
        let service = AssessmentService::new();
        let (id, _) = service.start();
        let err = service.finalize(id).unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[test]
    fn reset_clears_result_and_returns_to_idle() {
        let service = AssessmentService::new();
        let (id, _) = service.start();
        answer_all_correct(&service, id);
        service.finalize(id).unwrap();
        service.reset(id).unwrap();
        let (stage, index, _, result) = service.status(id).unwrap();
        assert_eq!(stage, WizardStage::Idle);
        assert_eq!(index, 0);
        assert!(result.is_none());
    }
}
