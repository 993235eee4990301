use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{ApplicationForm, SessionId};
use super::repository::{SessionRecord, SessionStore, SessionStoreError};
use super::session::{EventOutcome, FormEvent, FormPolicy, FormState};
use super::summary::ApplicationSummary;
use super::validation::{validate, ValidationErrors};

/// Service owning the session store and the edit policy.
pub struct JobApplicationService<S> {
    store: Arc<S>,
    policy: FormPolicy,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("form-{id:06}"))
}

impl<S> JobApplicationService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, policy: FormPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &FormPolicy {
        &self.policy
    }

    /// Start a blank form in the `Editing` phase.
    pub fn open(&self) -> Result<SessionRecord, IntakeServiceError> {
        let record = self.store.insert(SessionRecord::new(next_session_id()))?;
        info!(session = %record.id, "application form opened");
        Ok(record)
    }

    pub fn get(&self, id: &SessionId) -> Result<SessionRecord, IntakeServiceError> {
        let record = self.store.fetch(id)?.ok_or(SessionStoreError::NotFound)?;
        Ok(record)
    }

    /// Apply one applicant event to the session and report what it did.
    pub fn dispatch(
        &self,
        id: &SessionId,
        event: FormEvent,
    ) -> Result<(SessionRecord, EventOutcome), IntakeServiceError> {
        let policy = self.policy;
        let mut outcome = EventOutcome::IgnoredAfterSubmit;
        let record = self.store.update_with(id, &mut |state: FormState| {
            let (next, result) = state.apply(event.clone(), &policy);
            outcome = result;
            next
        })?;

        match outcome {
            EventOutcome::Submitted => info!(session = %id, "application submitted"),
            EventOutcome::SubmitRejected { error_count } => {
                debug!(session = %id, error_count, "submission blocked by validation")
            }
            EventOutcome::Edited { field } => debug!(session = %id, %field, "field edited"),
            EventOutcome::IgnoredAfterSubmit => {
                debug!(session = %id, "event ignored after submission")
            }
        }

        Ok((record, outcome))
    }

    /// The read-only summary; only available once the session is submitted.
    pub fn summary(&self, id: &SessionId) -> Result<ApplicationSummary, IntakeServiceError> {
        let record = self.get(id)?;
        record
            .state
            .summary()
            .cloned()
            .ok_or(IntakeServiceError::NotSubmitted)
    }

    /// Stateless whole-form check; no session involved.
    pub fn check(&self, form: &ApplicationForm) -> ValidationErrors {
        validate(form)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeServiceError {
    #[error(transparent)]
    Store(#[from] SessionStoreError),
    #[error("application has not been submitted yet")]
    NotSubmitted,
}
