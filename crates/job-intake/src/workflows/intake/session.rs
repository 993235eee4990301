use serde::{Deserialize, Serialize};

use super::domain::{ApplicationForm, FieldEdit, FormField};
use super::summary::ApplicationSummary;
use super::validation::{validate, EditValidation, ValidationErrors};

/// Knobs for how edits interact with shown errors and hidden values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPolicy {
    pub edit_validation: EditValidation,
    /// Blank conditional fields the newly selected position hides. Off keeps stale values,
    /// which are still never validated or summarized.
    pub clear_hidden_on_position_change: bool,
}

/// Something the applicant did on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    Edit { edit: FieldEdit },
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Editing,
    Submitted,
}

impl Phase {
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Editing => "editing",
            Phase::Submitted => "submitted",
        }
    }
}

/// What applying an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventOutcome {
    Edited { field: FormField },
    SubmitRejected { error_count: usize },
    Submitted,
    /// The session is already submitted; nothing changed.
    IgnoredAfterSubmit,
}

/// Form still open for edits, with the errors currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditingForm {
    pub form: ApplicationForm,
    pub errors: ValidationErrors,
}

/// Snapshot captured at the moment of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedApplication {
    snapshot: ApplicationForm,
    summary: ApplicationSummary,
}

impl SubmittedApplication {
    fn capture(form: ApplicationForm) -> Self {
        let summary = ApplicationSummary::from_form(&form);
        Self {
            snapshot: form,
            summary,
        }
    }

    pub fn snapshot(&self) -> &ApplicationForm {
        &self.snapshot
    }

    pub fn summary(&self) -> &ApplicationSummary {
        &self.summary
    }
}

/// `Editing -> Submitted`, with no way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing(EditingForm),
    Submitted(SubmittedApplication),
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Editing(EditingForm::default())
    }
}

impl FormState {
    pub fn phase(&self) -> Phase {
        match self {
            FormState::Editing(_) => Phase::Editing,
            FormState::Submitted(_) => Phase::Submitted,
        }
    }

    /// Current values, or the frozen snapshot once submitted.
    pub fn form(&self) -> &ApplicationForm {
        match self {
            FormState::Editing(editing) => &editing.form,
            FormState::Submitted(submitted) => submitted.snapshot(),
        }
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            FormState::Editing(editing) => Some(&editing.errors),
            FormState::Submitted(_) => None,
        }
    }

    pub fn summary(&self) -> Option<&ApplicationSummary> {
        match self {
            FormState::Editing(_) => None,
            FormState::Submitted(submitted) => Some(submitted.summary()),
        }
    }

    pub fn apply(self, event: FormEvent, policy: &FormPolicy) -> (FormState, EventOutcome) {
        let editing = match self {
            FormState::Editing(editing) => editing,
            submitted @ FormState::Submitted(_) => {
                return (submitted, EventOutcome::IgnoredAfterSubmit)
            }
        };

        match event {
            FormEvent::Edit { edit } => {
                let (state, field) = edit_form(editing, edit, policy);
                (FormState::Editing(state), EventOutcome::Edited { field })
            }
            FormEvent::Submit => submit_form(editing),
        }
    }
}

fn edit_form(
    editing: EditingForm,
    edit: FieldEdit,
    policy: &FormPolicy,
) -> (EditingForm, FormField) {
    let field = edit.field();
    let mut form = editing.form.with_edit(edit);
    if field == FormField::ApplyingForPosition && policy.clear_hidden_on_position_change {
        form = form.without_hidden_values();
    }

    let errors = editing
        .errors
        .after_edit(field, &form, policy.edit_validation);
    (EditingForm { form, errors }, field)
}

fn submit_form(editing: EditingForm) -> (FormState, EventOutcome) {
    let errors = validate(&editing.form);
    if errors.is_empty() {
        let submitted = SubmittedApplication::capture(editing.form);
        return (FormState::Submitted(submitted), EventOutcome::Submitted);
    }

    let error_count = errors.len();
    (
        FormState::Editing(EditingForm {
            form: editing.form,
            errors,
        }),
        EventOutcome::SubmitRejected { error_count },
    )
}
