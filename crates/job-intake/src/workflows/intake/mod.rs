//! Job application intake: which fields a position shows, how the form is validated, and the
//! one-way move from editing to a submitted, read-only summary.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod session;
pub mod summary;
pub mod validation;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationForm, FieldEdit, FormField, Position, SessionId, Skill, SkillToggle, UnknownOption,
};
pub use repository::{SessionRecord, SessionStore, SessionStoreError, SessionView};
pub use router::application_router;
pub use service::{IntakeServiceError, JobApplicationService};
pub use session::{
    EditingForm, EventOutcome, FormEvent, FormPolicy, FormState, Phase, SubmittedApplication,
};
pub use summary::{ApplicationSummary, SummaryLine};
pub use validation::{validate, validate_field, EditValidation, ValidationErrors, Violation};
pub use visibility::{conditional_fields, is_active, rendered_fields, visible_fields};
