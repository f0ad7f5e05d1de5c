use crate::error::{Error, Result};
use crate::models::wizard::{StepDescriptor, StepOutcome, WizardFlow, WizardStage};
use crate::services::scoring::{InterviewSummary, Scoring};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

const GREETING: &str = "Hello! I'm your AI interviewer today. I'll be asking you a series of \
questions to learn more about your skills and experience. Let's start with the first question.";
const ACKNOWLEDGMENT: &str = "Thank you for your answer. Let's move on to the next question.";
const CLOSING: &str = "Thank you for your answers. That concludes the interview; your results \
are being prepared.";

pub const QUESTION_COUNT: usize = 5;

/// Scripted question sequence for the Frontend Developer position.
const QUESTIONS: [&str; QUESTION_COUNT] = [
    "Could you tell me about your previous work experience and how it relates to this position?",
    "What are your key strengths in frontend development?",
    "Describe a challenging technical problem you faced and how you resolved it.",
    "How do you stay updated with the latest trends and technologies in your field?",
    "Why are you interested in joining our company specifically?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Ai,
    Candidate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn ai(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }

    fn candidate(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Candidate,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }
}

#[derive(Debug)]
struct InterviewSession {
    flow: WizardFlow,
    messages: Vec<ChatMessage>,
    camera_on: bool,
    microphone_on: bool,
    summary: Option<InterviewSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSnapshot {
    pub stage: WizardStage,
    pub question_index: usize,
    pub total_questions: usize,
    pub messages: Vec<ChatMessage>,
    pub camera_on: bool,
    pub microphone_on: bool,
    pub summary: Option<InterviewSummary>,
}

#[derive(Clone)]
pub struct InterviewService {
    sessions: Arc<Mutex<HashMap<Uuid, InterviewSession>>>,
    scoring: Arc<dyn Scoring>,
}

impl InterviewService {
    pub fn new(scoring: Arc<dyn Scoring>) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            scoring,
        }
    }

    pub fn start(&self) -> (Uuid, Vec<ChatMessage>) {
        let steps = QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, q)| StepDescriptor::required(format!("q{}", i + 1), *q))
            .collect();
        let mut flow = WizardFlow::new(steps);
        flow.start();

        let messages = vec![ChatMessage::ai(GREETING), ChatMessage::ai(QUESTIONS[0])];
        let id = Uuid::new_v4();
        self.sessions.lock().expect("interview session store poisoned").insert(
            id,
            InterviewSession {
                flow,
                messages: messages.clone(),
                camera_on: false,
                microphone_on: false,
                summary: None,
            },
        );
        (id, messages)
    }

    /// Appends the candidate's answer and the scripted follow-up. Returns
    /// the messages added by this turn and whether the interview is done.
    pub fn answer(&self, id: Uuid, text: &str) -> Result<(Vec<ChatMessage>, bool)> {
        let mut sessions = self.sessions.lock().expect("interview session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Interview session not found".to_string()))?;

        let outcome = session.flow.submit_step(json!(text))?;
        let mut appended = vec![ChatMessage::candidate(text)];
        match outcome {
            StepOutcome::Advanced { next_index } => {
                appended.push(ChatMessage::ai(ACKNOWLEDGMENT));
                appended.push(ChatMessage::ai(QUESTIONS[next_index]));
                session.messages.extend(appended.clone());
                Ok((appended, false))
            }
            StepOutcome::AllCollected => {
                appended.push(ChatMessage::ai(CLOSING));
                session.messages.extend(appended.clone());
                Ok((appended, true))
            }
        }
    }

    /// Produces the stub summary and releases any held media. Called after
    /// the artificial processing delay.
    pub fn finalize(&self, id: Uuid) -> Result<InterviewSummary> {
        let mut sessions = self.sessions.lock().expect("interview session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Interview session not found".to_string()))?;
        if session.flow.stage() != WizardStage::Processing {
            return Err(Error::Conflict(
                "Interview is not awaiting evaluation".to_string(),
            ));
        }

        let responses: Vec<String> = session
            .flow
            .collected()
            .values()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
        let summary = self.scoring.interview_summary(&responses);

        session.flow.complete();
        session.camera_on = false;
        session.microphone_on = false;
        session.summary = Some(summary.clone());
        Ok(summary)
    }

    pub fn toggle_camera(&self, id: Uuid) -> Result<bool> {
        self.with_session(id, |session| {
            session.camera_on = !session.camera_on;
            session.camera_on
        })
    }

    pub fn toggle_microphone(&self, id: Uuid) -> Result<bool> {
        self.with_session(id, |session| {
            session.microphone_on = !session.microphone_on;
            session.microphone_on
        })
    }

    pub fn snapshot(&self, id: Uuid) -> Result<InterviewSnapshot> {
        let sessions = self.sessions.lock().expect("interview session store poisoned");
        let session = sessions
            .get(&id)
            .ok_or_else(|| Error::NotFound("Interview session not found".to_string()))?;
        Ok(InterviewSnapshot {
            stage: session.flow.stage(),
            question_index: session.flow.index(),
            total_questions: QUESTIONS.len(),
            messages: session.messages.clone(),
            camera_on: session.camera_on,
            microphone_on: session.microphone_on,
            summary: session.summary.clone(),
        })
    }

    pub fn reset(&self, id: Uuid) -> Result<()> {
        self.with_session(id, |session| {
            session.flow.reset();
            session.messages.clear();
            session.camera_on = false;
            session.microphone_on = false;
            session.summary = None;
        })
    }

    fn with_session<T>(&self, id: Uuid, f: impl FnOnce(&mut InterviewSession) -> T) -> Result<T> {
        let mut sessions = self.sessions.lock().expect("interview session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Interview session not found".to_string()))?;
        Ok(f(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scoring::StubScoring;

    fn service() -> InterviewService {
        InterviewService::new(Arc::new(StubScoring))
    }

    #[test]
    fn start_opens_with_greeting_and_first_question() {
        let svc = service();
        let (_, messages) = svc.start();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::Ai);
        assert_eq!(messages[1].content, QUESTIONS[0]);
    }

    #[test]
    fn five_answers_complete_the_interview() {
        let svc = service();
        let (id, _) = svc.start();
        for i in 0..4 {
            let (appended, done) = svc.answer(id, &format!("answer {}", i)).unwrap();
            assert!(!done);
            assert_eq!(appended.len(), 3);
            assert_eq!(appended[2].content, QUESTIONS[i + 1]);
        }
        let (appended, done) = svc.answer(id, "final answer").unwrap();
        assert!(done);
        assert_eq!(appended.last().unwrap().content, CLOSING);

        let summary = svc.finalize(id).unwrap();
        assert_eq!(summary.questions_answered, 5);
        let snapshot = svc.snapshot(id).unwrap();
        assert_eq!(snapshot.stage, WizardStage::Complete);
        assert!(!snapshot.camera_on);
    }

    #[test]
    fn blank_answer_is_rejected() {
        let svc = service();
        let (id, _) = svc.start();
        let err = svc.answer(id, "   ").unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        let snapshot = svc.snapshot(id).unwrap();
        assert_eq!(snapshot.question_index, 0);
        // Only the opening messages are present.
        assert_eq!(snapshot.messages.len(), 2);
    }

    #[test]
    fn media_is_released_on_reset() {
        let svc = service();
        let (id, _) = svc.start();
        assert!(svc.toggle_camera(id).unwrap());
        assert!(svc.toggle_microphone(id).unwrap());
        svc.reset(id).unwrap();
        let snapshot = svc.snapshot(id).unwrap();
        assert!(!snapshot.camera_on);
        assert!(!snapshot.microphone_on);
        assert_eq!(snapshot.stage, WizardStage::Idle);
        assert!(snapshot.messages.is_empty());
    }
}
