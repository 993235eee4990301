use serde::Serialize;

use super::domain::{ApplicationForm, FormField, SessionId};
use super::session::{FormState, Phase};
use super::summary::ApplicationSummary;
use super::validation::ValidationErrors;
use super::visibility::rendered_fields;

/// Stored state of one applicant's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: SessionId,
    pub state: FormState,
}

impl SessionRecord {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            state: FormState::default(),
        }
    }

    pub fn view(&self) -> SessionView {
        let form = self.state.form().clone();
        let fields = rendered_fields(form.applying_for_position);
        SessionView {
            session_id: self.id.clone(),
            phase: self.state.phase(),
            fields,
            form,
            errors: self.state.errors().cloned(),
            summary: self.state.summary().cloned(),
        }
    }
}

/// Everything the presentation layer needs to draw the form or the summary.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub phase: Phase,
    /// Fields to render for the current position.
    pub fields: Vec<FormField>,
    pub form: ApplicationForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ApplicationSummary>,
}

/// Holder of the per-session mutable cell.
pub trait SessionStore: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, SessionStoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError>;
    /// Replace the session's state with `step(state)` without letting another update interleave.
    fn update_with(
        &self,
        id: &SessionId,
        step: &mut dyn FnMut(FormState) -> FormState,
    ) -> Result<SessionRecord, SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
