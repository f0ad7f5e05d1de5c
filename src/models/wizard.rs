use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Lifecycle of a guided multi-stage flow (assessment, interview,
/// verification). `Complete` is terminal until `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    Idle,
    InProgress,
    Processing,
    Complete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDescriptor {
    pub id: String,
    pub prompt: String,
    pub required: bool,
}

impl StepDescriptor {
    pub fn required(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            required: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("step submitted while the flow is {0:?}")]
    NotInProgress(WizardStage),
    #[error("a response is required for step '{0}'")]
    EmptyResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// More steps remain; `next_index` points at the next one.
    Advanced { next_index: usize },
    /// Every step has a response; the flow moved to `Processing`.
    AllCollected,
}

/// Ordered sequence of steps advanced by user responses. Held only in
/// process memory for the lifetime of a session and discarded on reset.
#[derive(Debug, Clone)]
pub struct WizardFlow {
    steps: Vec<StepDescriptor>,
    stage: WizardStage,
    index: usize,
    collected: BTreeMap<String, JsonValue>,
}

impl WizardFlow {
    pub fn new(steps: Vec<StepDescriptor>) -> Self {
        Self {
            steps,
            stage: WizardStage::Idle,
            index: 0,
            collected: BTreeMap::new(),
        }
    }

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn current_step(&self) -> Option<&StepDescriptor> {
        if self.stage == WizardStage::InProgress {
            self.steps.get(self.index)
        } else {
            None
        }
    }

    pub fn collected(&self) -> &BTreeMap<String, JsonValue> {
        &self.collected
    }

    pub fn response(&self, step_id: &str) -> Option<&JsonValue> {
        self.collected.get(step_id)
    }

    pub fn start(&mut self) {
        self.index = 0;
        self.collected.clear();
        self.stage = WizardStage::InProgress;
    }

    /// Records the response for the current step and advances. When the
    /// last step is answered the flow enters `Processing`; the owning
    /// service applies the artificial delay and calls [`complete`].
    ///
    /// [`complete`]: WizardFlow::complete
    pub fn submit_step(&mut self, response: JsonValue) -> Result<StepOutcome, WizardError> {
        if self.stage != WizardStage::InProgress {
            return Err(WizardError::NotInProgress(self.stage));
        }
        let step = self
            .steps
            .get(self.index)
            .ok_or(WizardError::NotInProgress(self.stage))?;
        if step.required && is_empty_response(&response) {
            return Err(WizardError::EmptyResponse(step.id.clone()));
        }

        self.collected.insert(step.id.clone(), response);
        self.index += 1;
        if self.index >= self.steps.len() {
            self.stage = WizardStage::Processing;
            Ok(StepOutcome::AllCollected)
        } else {
            Ok(StepOutcome::Advanced {
                next_index: self.index,
            })
        }
    }

    pub fn complete(&mut self) {
        if self.stage == WizardStage::Processing {
            self.stage = WizardStage::Complete;
        }
    }

    pub fn reset(&mut self) {
        self.stage = WizardStage::Idle;
        self.index = 0;
        self.collected.clear();
    }
}

fn is_empty_response(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.trim().is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn three_steps() -> WizardFlow {
        WizardFlow::new(vec![
            StepDescriptor::required("a", "first"),
            StepDescriptor::required("b", "second"),
            StepDescriptor::required("c", "third"),
        ])
    }

    #[test]
    fn starts_idle_and_rejects_submissions() {
        let mut flow = three_steps();
        assert_eq!(flow.stage(), WizardStage::Idle);
        let err = flow.submit_step(json!("hello")).unwrap_err();
        assert!(matches!(err, WizardError::NotInProgress(WizardStage::Idle)));
        assert!(flow.collected().is_empty());
    }

    #[test]
    fn empty_required_response_leaves_state_unchanged() {
        let mut flow = three_steps();
        flow.start();
        for empty in [json!(null), json!(""), json!("   "), json!([])] {
            let err = flow.submit_step(empty).unwrap_err();
            assert!(matches!(err, WizardError::EmptyResponse(_)));
            assert_eq!(flow.index(), 0);
            assert!(flow.collected().is_empty());
        }
    }

    #[test]
    fn exactly_n_submissions_reach_processing_with_n_responses() {
        let mut flow = three_steps();
        flow.start();
        assert_eq!(
            flow.submit_step(json!("one")).unwrap(),
            StepOutcome::Advanced { next_index: 1 }
        );
        assert_eq!(
            flow.submit_step(json!("two")).unwrap(),
            StepOutcome::Advanced { next_index: 2 }
        );
        assert_eq!(flow.submit_step(json!("three")).unwrap(), StepOutcome::AllCollected);
        assert_eq!(flow.stage(), WizardStage::Processing);
        assert_eq!(flow.collected().len(), 3);

        flow.complete();
        assert_eq!(flow.stage(), WizardStage::Complete);

        let err = flow.submit_step(json!("extra")).unwrap_err();
        assert!(matches!(
            err,
            WizardError::NotInProgress(WizardStage::Complete)
        ));
    }

    #[test]
    fn reset_returns_to_idle_from_any_stage() {
        let mut flow = three_steps();
        flow.start();
        flow.submit_step(json!("one")).unwrap();
        flow.reset();
        assert_eq!(flow.stage(), WizardStage::Idle);
        assert!(flow.collected().is_empty());

        flow.start();
        for answer in ["one", "two", "three"] {
            flow.submit_step(json!(answer)).unwrap();
        }
        flow.complete();
        flow.reset();
        assert_eq!(flow.stage(), WizardStage::Idle);
        assert_eq!(flow.index(), 0);
        assert!(flow.collected().is_empty());
    }

    #[test]
    fn restart_discards_previous_responses() {
        let mut flow = three_steps();
        flow.start();
        flow.submit_step(json!("one")).unwrap();
        flow.start();
        assert_eq!(flow.index(), 0);
        assert!(flow.collected().is_empty());
        assert_eq!(flow.stage(), WizardStage::InProgress);
    }
}
