use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::intake::domain::{
    ApplicationForm, FieldEdit, Position, SessionId, Skill, SkillToggle,
};
use crate::workflows::intake::repository::{SessionRecord, SessionStore, SessionStoreError};
use crate::workflows::intake::session::{EditingForm, FormEvent, FormPolicy, FormState};
use crate::workflows::intake::validation::ValidationErrors;
use crate::workflows::intake::{application_router, JobApplicationService};

/// A form that passes every rule for the given position.
pub(super) fn valid_form(position: Position) -> ApplicationForm {
    let mut form = ApplicationForm {
        full_name: "Grace Hopper".to_string(),
        email: "grace@navy.mil".to_string(),
        phone_number: "5551234567".to_string(),
        applying_for_position: Some(position),
        additional_skills: BTreeSet::from([Skill::Python]),
        preferred_interview_time: "2025-10-01T09:30".to_string(),
        ..ApplicationForm::default()
    };

    match position {
        Position::Developer => {
            form.relevant_experience = "5".to_string();
        }
        Position::Designer => {
            form.relevant_experience = "3".to_string();
            form.portfolio_url = "https://grace.design".to_string();
        }
        Position::Manager => {
            form.management_experience = "Ran the compiler team for six years".to_string();
        }
    }

    form
}

pub(super) fn edit(edit: FieldEdit) -> FormEvent {
    FormEvent::Edit { edit }
}

pub(super) fn editing_state(form: ApplicationForm) -> FormState {
    FormState::Editing(EditingForm {
        form,
        errors: ValidationErrors::default(),
    })
}

pub(super) fn build_service(
    policy: FormPolicy,
) -> (JobApplicationService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = JobApplicationService::new(store.clone(), policy);
    (service, store)
}

/// Every edit needed to turn a blank session into `valid_form(position)`.
pub(super) fn edits_for(position: Position) -> Vec<FormEvent> {
    let form = valid_form(position);
    let mut events = vec![
        edit(FieldEdit::FullName(form.full_name)),
        edit(FieldEdit::Email(form.email)),
        edit(FieldEdit::PhoneNumber(form.phone_number)),
        edit(FieldEdit::ApplyingForPosition(Some(position))),
        edit(FieldEdit::PreferredInterviewTime(form.preferred_interview_time)),
    ];
    for skill in form.additional_skills {
        events.push(edit(FieldEdit::AdditionalSkills(SkillToggle {
            skill,
            checked: true,
        })));
    }
    if !form.relevant_experience.is_empty() {
        events.push(edit(FieldEdit::RelevantExperience(form.relevant_experience)));
    }
    if !form.portfolio_url.is_empty() {
        events.push(edit(FieldEdit::PortfolioUrl(form.portfolio_url)));
    }
    if !form.management_experience.is_empty() {
        events.push(edit(FieldEdit::ManagementExperience(
            form.management_experience,
        )));
    }
    events
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionStore for MemoryStore {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, SessionStoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn update_with(
        &self,
        id: &SessionId,
        step: &mut dyn FnMut(FormState) -> FormState,
    ) -> Result<SessionRecord, SessionStoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        let record = guard.get_mut(id).ok_or(SessionStoreError::NotFound)?;
        let state = std::mem::take(&mut record.state);
        record.state = step(state);
        Ok(record.clone())
    }
}

pub(super) struct OfflineStore;

impl SessionStore for OfflineStore {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }

    fn update_with(
        &self,
        _id: &SessionId,
        _step: &mut dyn FnMut(FormState) -> FormState,
    ) -> Result<SessionRecord, SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: JobApplicationService<MemoryStore>) -> axum::Router {
    application_router(Arc::new(service))
}
