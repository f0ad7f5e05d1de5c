use crate::error::{Error, Result};
use crate::models::wizard::{StepDescriptor, StepOutcome, WizardFlow, WizardStage};
use crate::services::storage_service::StoredObject;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const DOCUMENT_STEP: &str = "document";
pub const SELFIE_STEP: &str = "selfie";
pub const CONTACT_STEP: &str = "contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChannel {
    Email,
    Phone,
}

#[derive(Debug)]
struct VerificationSession {
    flow: WizardFlow,
    code_sent_to: Option<(ContactChannel, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationStatus {
    pub stage: WizardStage,
    pub document_verified: bool,
    pub selfie_verified: bool,
    pub contact_verified: bool,
    pub progress: u8,
}

#[derive(Clone)]
pub struct VerificationService {
    sessions: Arc<Mutex<HashMap<Uuid, VerificationSession>>>,
}

impl Default for VerificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationService {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn start(&self) -> Uuid {
        let steps = vec![
            StepDescriptor::required(DOCUMENT_STEP, "Upload a government-issued ID document"),
            StepDescriptor::required(SELFIE_STEP, "Take a selfie for identity matching"),
            StepDescriptor::required(CONTACT_STEP, "Confirm a contact channel with a one-time code"),
        ];
        let mut flow = WizardFlow::new(steps);
        flow.start();

        let id = Uuid::new_v4();
        self.sessions
            .lock()
            .expect("verification session store poisoned")
            .insert(
                id,
                VerificationSession {
                    flow,
                    code_sent_to: None,
                },
            );
        id
    }

    /// Records a successfully stored ID document. The stage only becomes
    /// verified once the object is on disk; storage failures never reach
    /// this point.
    pub fn submit_document(&self, id: Uuid, stored: &StoredObject) -> Result<StepOutcome> {
        self.submit_at(id, DOCUMENT_STEP, json!({ "url": stored.url, "digest": stored.digest }))
    }

    pub fn submit_selfie(&self, id: Uuid, stored: &StoredObject) -> Result<StepOutcome> {
        self.submit_at(id, SELFIE_STEP, json!({ "url": stored.url, "digest": stored.digest }))
    }

    pub fn send_contact_code(
        &self,
        id: Uuid,
        channel: ContactChannel,
        destination: &str,
    ) -> Result<()> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(Error::BadRequest(
                "A destination is required to send a code".to_string(),
            ));
        }
        if channel == ContactChannel::Email && !destination.contains('@') {
            return Err(Error::BadRequest(
                "Please enter a valid email address".to_string(),
            ));
        }

        let mut sessions = self.sessions.lock().expect("verification session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Verification session not found".to_string()))?;
        expect_step(&session.flow, CONTACT_STEP)?;

        // No delivery happens; the code check below accepts any non-empty
        // code once a send has been requested.
        session.code_sent_to = Some((channel, destination.to_string()));
        tracing::info!(session = %id, ?channel, "verification code requested");
        Ok(())
    }

    pub fn check_contact_code(&self, id: Uuid, code: &str) -> Result<StepOutcome> {
        let mut sessions = self.sessions.lock().expect("verification session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Verification session not found".to_string()))?;
        expect_step(&session.flow, CONTACT_STEP)?;

        let (channel, destination) = session
            .code_sent_to
            .clone()
            .ok_or_else(|| Error::BadRequest("No code has been sent yet".to_string()))?;
        if code.trim().is_empty() {
            return Err(Error::BadRequest(
                "A verification code is required".to_string(),
            ));
        }

        // Any non-empty code passes; there is no real delivery to match
        // against.
        let outcome = session.flow.submit_step(json!({
            "code": code,
            "channel": channel,
            "destination": destination,
        }))?;
        Ok(outcome)
    }

    pub fn finalize(&self, id: Uuid) -> Result<VerificationStatus> {
        let mut sessions = self.sessions.lock().expect("verification session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Verification session not found".to_string()))?;
        if session.flow.stage() != WizardStage::Processing {
            return Err(Error::Conflict(
                "Verification is not awaiting review".to_string(),
            ));
        }
        session.flow.complete();
        Ok(status_of(&session.flow))
    }

    pub fn status(&self, id: Uuid) -> Result<VerificationStatus> {
        let sessions = self.sessions.lock().expect("verification session store poisoned");
        let session = sessions
            .get(&id)
            .ok_or_else(|| Error::NotFound("Verification session not found".to_string()))?;
        Ok(status_of(&session.flow))
    }

    pub fn reset(&self, id: Uuid) -> Result<()> {
        let mut sessions = self.sessions.lock().expect("verification session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Verification session not found".to_string()))?;
        session.flow.reset();
        session.code_sent_to = None;
        Ok(())
    }

    fn submit_at(&self, id: Uuid, step: &str, response: serde_json::Value) -> Result<StepOutcome> {
        let mut sessions = self.sessions.lock().expect("verification session store poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("Verification session not found".to_string()))?;
        expect_step(&session.flow, step)?;
        Ok(session.flow.submit_step(response)?)
    }
}

fn expect_step(flow: &WizardFlow, step: &str) -> Result<()> {
    match flow.current_step() {
        Some(current) if current.id == step => Ok(()),
        Some(current) => Err(Error::Conflict(format!(
            "The {} stage is not active (current stage: {})",
            step, current.id
        ))),
        None => Err(Error::Conflict(format!(
            "The {} stage is not active",
            step
        ))),
    }
}

/// Document and selfie are each worth 33 points, the contact challenge 34,
/// matching the dashboard's progress meter.
fn status_of(flow: &WizardFlow) -> VerificationStatus {
    let document_verified = flow.response(DOCUMENT_STEP).is_some();
    let selfie_verified = flow.response(SELFIE_STEP).is_some();
    let contact_verified = flow.response(CONTACT_STEP).is_some();
    let mut progress = 0u8;
    if document_verified {
        progress += 33;
    }
    if selfie_verified {
        progress += 33;
    }
    if contact_verified {
        progress += 34;
    }
    VerificationStatus {
        stage: flow.stage(),
        document_verified,
        selfie_verified,
        contact_verified,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(name: &str) -> StoredObject {
        StoredObject {
            bucket: "verification-documents".into(),
            path: format!("/tmp/{}", name),
            url: format!("/uploads/verification-documents/{}", name),
            digest: "d".repeat(64),
        }
    }

    #[test]
    fn full_flow_reaches_one_hundred_points() {
        let svc = VerificationService::new();
        let id = svc.start();

        svc.submit_document(id, &stored("doc.pdf")).unwrap();
        svc.submit_selfie(id, &stored("selfie.png")).unwrap();
        svc.send_contact_code(id, ContactChannel::Email, "user@example.com")
            .unwrap();
        let outcome = svc.check_contact_code(id, "123456").unwrap();
        assert_eq!(outcome, StepOutcome::AllCollected);

        let status = svc.finalize(id).unwrap();
        assert_eq!(status.stage, WizardStage::Complete);
        assert_eq!(status.progress, 100);
        assert!(status.document_verified && status.selfie_verified && status.contact_verified);
    }

    #[test]
    fn stages_must_be_completed_in_order() {
        let svc = VerificationService::new();
        let id = svc.start();
        let err = svc.submit_selfie(id, &stored("selfie.png")).unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        let status = svc.status(id).unwrap();
        assert!(!status.selfie_verified);
        assert_eq!(status.progress, 0);
    }

    #[test]
    fn code_check_requires_a_prior_send() {
        let svc = VerificationService::new();
        let id = svc.start();
        svc.submit_document(id, &stored("doc.pdf")).unwrap();
        svc.submit_selfie(id, &stored("selfie.png")).unwrap();
        let err = svc.check_contact_code(id, "123456").unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[test]
    fn empty_code_does_not_verify_the_contact_stage() {
        let svc = VerificationService::new();
        let id = svc.start();
        svc.submit_document(id, &stored("doc.pdf")).unwrap();
        svc.submit_selfie(id, &stored("selfie.png")).unwrap();
        svc.send_contact_code(id, ContactChannel::Phone, "+15551234567")
            .unwrap();
        let err = svc.check_contact_code(id, "  ").unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        let status = svc.status(id).unwrap();
        assert!(!status.contact_verified);
        assert_eq!(status.progress, 66);
    }

    #[test]
    fn invalid_email_destination_is_rejected() {
        let svc = VerificationService::new();
        let id = svc.start();
        svc.submit_document(id, &stored("doc.pdf")).unwrap();
        svc.submit_selfie(id, &stored("selfie.png")).unwrap();
        let err = svc
            .send_contact_code(id, ContactChannel::Email, "not-an-email")
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[test]
    fn reset_discards_all_progress() {
        let svc = VerificationService::new();
        let id = svc.start();
        svc.submit_document(id, &stored("doc.pdf")).unwrap();
        svc.reset(id).unwrap();
        let status = svc.status(id).unwrap();
        assert_eq!(status.stage, WizardStage::Idle);
        assert_eq!(status.progress, 0);
        assert!(!status.document_verified);
    }
}
