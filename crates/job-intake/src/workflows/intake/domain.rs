use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for an open form session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Positions offered by the posting. Drives which conditional fields are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Developer, Position::Designer, Position::Manager];

    pub const fn label(self) -> &'static str {
        match self {
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Position::ALL
            .into_iter()
            .find(|position| position.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownOption(trimmed.to_string()))
    }
}

/// Checkbox options for the additional skills group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
}

impl Skill {
    pub const ALL: [Skill; 3] = [Skill::JavaScript, Skill::Css, Skill::Python];

    pub const fn label(self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Skill {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Skill::ALL
            .into_iter()
            .find(|skill| skill.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownOption(trimmed.to_string()))
    }
}

/// Raised when a select or checkbox value is not one of the fixed options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not one of the offered options")]
pub struct UnknownOption(pub String);

/// Every field on the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FullName,
    Email,
    PhoneNumber,
    ApplyingForPosition,
    RelevantExperience,
    #[serde(rename = "portfolioURL")]
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    PreferredInterviewTime,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::FullName,
        FormField::Email,
        FormField::PhoneNumber,
        FormField::ApplyingForPosition,
        FormField::RelevantExperience,
        FormField::PortfolioUrl,
        FormField::ManagementExperience,
        FormField::AdditionalSkills,
        FormField::PreferredInterviewTime,
    ];

    /// Wire name used as the key of the error mapping.
    pub const fn name(self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::PhoneNumber => "phoneNumber",
            FormField::ApplyingForPosition => "applyingForPosition",
            FormField::RelevantExperience => "relevantExperience",
            FormField::PortfolioUrl => "portfolioURL",
            FormField::ManagementExperience => "managementExperience",
            FormField::AdditionalSkills => "additionalSkills",
            FormField::PreferredInterviewTime => "preferredInterviewTime",
        }
    }

    /// Human label used in messages and the summary view.
    pub const fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email",
            FormField::PhoneNumber => "Phone Number",
            FormField::ApplyingForPosition => "Applying for Position",
            FormField::RelevantExperience => "Relevant Experience",
            FormField::PortfolioUrl => "Portfolio URL",
            FormField::ManagementExperience => "Management Experience",
            FormField::AdditionalSkills => "Additional Skills",
            FormField::PreferredInterviewTime => "Preferred Interview Time",
        }
    }

    /// Whether the field is only shown for some positions.
    pub const fn is_conditional(self) -> bool {
        matches!(
            self,
            FormField::RelevantExperience
                | FormField::PortfolioUrl
                | FormField::ManagementExperience
        )
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The single mutable record behind the form. Values are kept as typed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(with = "position_choice")]
    pub applying_for_position: Option<Position>,
    pub relevant_experience: String,
    #[serde(rename = "portfolioURL")]
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: BTreeSet<Skill>,
    pub preferred_interview_time: String,
}

impl ApplicationForm {
    /// Produce the form that results from applying a single edit.
    pub fn with_edit(mut self, edit: FieldEdit) -> Self {
        match edit {
            FieldEdit::FullName(value) => self.full_name = value,
            FieldEdit::Email(value) => self.email = value,
            FieldEdit::PhoneNumber(value) => self.phone_number = value,
            FieldEdit::ApplyingForPosition(position) => self.applying_for_position = position,
            FieldEdit::RelevantExperience(value) => self.relevant_experience = value,
            FieldEdit::PortfolioUrl(value) => self.portfolio_url = value,
            FieldEdit::ManagementExperience(value) => self.management_experience = value,
            FieldEdit::AdditionalSkills(SkillToggle { skill, checked }) => {
                if checked {
                    self.additional_skills.insert(skill);
                } else {
                    self.additional_skills.remove(&skill);
                }
            }
            FieldEdit::PreferredInterviewTime(value) => self.preferred_interview_time = value,
        }
        self
    }

    /// Blank every conditional field the given position does not show.
    pub fn without_hidden_values(mut self) -> Self {
        let position = self.applying_for_position;
        for field in FormField::ALL {
            if field.is_conditional() && !super::visibility::is_active(field, position) {
                match field {
                    FormField::RelevantExperience => self.relevant_experience.clear(),
                    FormField::PortfolioUrl => self.portfolio_url.clear(),
                    FormField::ManagementExperience => self.management_experience.clear(),
                    _ => {}
                }
            }
        }
        self
    }
}

/// One change made by the applicant: a typed value, a select, or a checkbox toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldEdit {
    FullName(String),
    Email(String),
    PhoneNumber(String),
    #[serde(with = "position_choice")]
    ApplyingForPosition(Option<Position>),
    RelevantExperience(String),
    #[serde(rename = "portfolioURL")]
    PortfolioUrl(String),
    ManagementExperience(String),
    AdditionalSkills(SkillToggle),
    PreferredInterviewTime(String),
}

impl FieldEdit {
    pub fn field(&self) -> FormField {
        match self {
            FieldEdit::FullName(_) => FormField::FullName,
            FieldEdit::Email(_) => FormField::Email,
            FieldEdit::PhoneNumber(_) => FormField::PhoneNumber,
            FieldEdit::ApplyingForPosition(_) => FormField::ApplyingForPosition,
            FieldEdit::RelevantExperience(_) => FormField::RelevantExperience,
            FieldEdit::PortfolioUrl(_) => FormField::PortfolioUrl,
            FieldEdit::ManagementExperience(_) => FormField::ManagementExperience,
            FieldEdit::AdditionalSkills(_) => FormField::AdditionalSkills,
            FieldEdit::PreferredInterviewTime(_) => FormField::PreferredInterviewTime,
        }
    }
}

/// A checkbox change within the skills group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillToggle {
    pub skill: Skill,
    pub checked: bool,
}

/// The select posts `""` for "no choice"; anything else must name a position.
mod position_choice {
    use super::Position;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &Option<Position>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.map(Position::label).unwrap_or(""))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value
                .parse::<Position>()
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
