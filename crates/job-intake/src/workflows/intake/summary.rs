use std::fmt;

use serde::Serialize;

use super::domain::{ApplicationForm, FormField};
use super::visibility::is_active;

/// One `label: value` row of the read-only summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub field: FormField,
    pub label: &'static str,
    pub value: String,
}

/// Read-only rendering of a submitted form. Conditional rows follow the position's visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationSummary {
    pub lines: Vec<SummaryLine>,
}

impl ApplicationSummary {
    pub fn from_form(form: &ApplicationForm) -> Self {
        let position = form.applying_for_position;
        let lines = FormField::ALL
            .into_iter()
            .filter(|field| is_active(*field, position))
            .map(|field| SummaryLine {
                field,
                label: field.label(),
                value: display_value(field, form),
            })
            .collect();

        Self { lines }
    }

    pub fn line(&self, field: FormField) -> Option<&SummaryLine> {
        self.lines.iter().find(|line| line.field == field)
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.lines.iter().map(|line| line.field).collect()
    }
}

impl fmt::Display for ApplicationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}

fn display_value(field: FormField, form: &ApplicationForm) -> String {
    match field {
        FormField::FullName => form.full_name.trim().to_string(),
        FormField::Email => form.email.trim().to_string(),
        FormField::PhoneNumber => form.phone_number.clone(),
        FormField::ApplyingForPosition => form
            .applying_for_position
            .map(|position| position.label().to_string())
            .unwrap_or_default(),
        FormField::RelevantExperience => format!("{} years", form.relevant_experience.trim()),
        FormField::PortfolioUrl => form.portfolio_url.trim().to_string(),
        FormField::ManagementExperience => form.management_experience.trim().to_string(),
        FormField::AdditionalSkills => form
            .additional_skills
            .iter()
            .map(|skill| skill.label())
            .collect::<Vec<_>>()
            .join(", "),
        FormField::PreferredInterviewTime => form.preferred_interview_time.trim().to_string(),
    }
}
