//! Form validation.
//!
//! Both entry points read the same rule table in [`rules`]: [`validate`] runs every rule for a
//! submit, while [`ValidationErrors::after_edit`] looks only at the field that was just edited
//! and may only drop an error it is already showing.

mod patterns;
mod rules;

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::domain::{ApplicationForm, FormField};

pub use patterns::parse_date_time;

/// Kind of rule a field broke. Each field reports at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    Required,
    InvalidFormat,
    InvalidNumber,
    NotANumber,
    NotPositive,
    InvalidUrl,
    NoSkillSelected,
    InvalidDateTime,
}

impl Violation {
    pub fn message(self, field: FormField) -> String {
        let label = field.label();
        match self {
            Violation::Required => format!("{label} is required"),
            Violation::InvalidFormat => format!("{label} must be a valid format"),
            Violation::InvalidNumber => format!("{label} must be a valid number"),
            Violation::NotANumber => format!("{label} must be a number"),
            Violation::NotPositive => format!("{label} must be greater than 0"),
            Violation::InvalidUrl => format!("{label} must be a valid URL"),
            Violation::NoSkillSelected => "At least one skill must be selected".to_string(),
            Violation::InvalidDateTime => format!("{label} must be a valid date and time"),
        }
    }
}

/// How a field edit treats the error currently shown for that field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditValidation {
    /// Any edit hides the field's error until the next submit.
    #[default]
    Clear,
    /// The edited field is re-checked; its error goes away once the rule passes.
    Revalidate,
}

/// Field-keyed violations. Empty means the form can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<FormField, Violation>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn violation(&self, field: FormField) -> Option<Violation> {
        self.entries.get(&field).copied()
    }

    pub fn message(&self, field: FormField) -> Option<String> {
        self.violation(field).map(|violation| violation.message(field))
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.entries.keys().copied()
    }

    /// `(field, message)` pairs in display order.
    pub fn messages(&self) -> Vec<(FormField, String)> {
        self.entries
            .iter()
            .map(|(field, violation)| (*field, violation.message(*field)))
            .collect()
    }

    /// Error state after `field` was edited to produce `form`. Other fields are left alone and
    /// no error is ever added.
    pub fn after_edit(
        mut self,
        field: FormField,
        form: &ApplicationForm,
        mode: EditValidation,
    ) -> Self {
        if !self.entries.contains_key(&field) {
            return self;
        }

        match mode {
            EditValidation::Clear => {
                self.entries.remove(&field);
            }
            EditValidation::Revalidate => match rules::check(field, form) {
                Some(violation) => {
                    self.entries.insert(field, violation);
                }
                None => {
                    self.entries.remove(&field);
                }
            },
        }
        self
    }
}

impl FromIterator<(FormField, Violation)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (FormField, Violation)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Serialized as `{ "fieldName": "message", ... }`.
impl Serialize for ValidationErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, violation) in &self.entries {
            map.serialize_entry(field.name(), &violation.message(*field))?;
        }
        map.end()
    }
}

/// Run every rule against the form.
pub fn validate(form: &ApplicationForm) -> ValidationErrors {
    FormField::ALL
        .into_iter()
        .filter_map(|field| rules::check(field, form).map(|violation| (field, violation)))
        .collect()
}

/// Run the rule for one field only.
pub fn validate_field(field: FormField, form: &ApplicationForm) -> Option<Violation> {
    rules::check(field, form)
}
