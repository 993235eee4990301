use super::super::domain::{ApplicationForm, FormField};
use super::super::visibility::is_active;
use super::patterns::{
    is_blank, is_phone_number, is_web_url, looks_like_email, parse_date_time, parse_number,
};
use super::Violation;

/// The single rule table. Returns the first violation for `field`, or `None` when the field
/// is acceptable or currently hidden.
pub(crate) fn check(field: FormField, form: &ApplicationForm) -> Option<Violation> {
    let position = form.applying_for_position;
    if !is_active(field, position) {
        return None;
    }

    match field {
        FormField::FullName => required_text(&form.full_name),
        FormField::Email => required_text(&form.email).or_else(|| {
            (!looks_like_email(&form.email)).then_some(Violation::InvalidFormat)
        }),
        FormField::PhoneNumber => required_text(&form.phone_number).or_else(|| {
            (!is_phone_number(&form.phone_number)).then_some(Violation::InvalidNumber)
        }),
        FormField::ApplyingForPosition => position.is_none().then_some(Violation::Required),
        FormField::RelevantExperience => check_experience(&form.relevant_experience),
        FormField::PortfolioUrl => required_text(&form.portfolio_url).or_else(|| {
            (!is_web_url(&form.portfolio_url)).then_some(Violation::InvalidUrl)
        }),
        FormField::ManagementExperience => required_text(&form.management_experience),
        FormField::AdditionalSkills => form
            .additional_skills
            .is_empty()
            .then_some(Violation::NoSkillSelected),
        FormField::PreferredInterviewTime => required_text(&form.preferred_interview_time)
            .or_else(|| {
                parse_date_time(&form.preferred_interview_time)
                    .is_none()
                    .then_some(Violation::InvalidDateTime)
            }),
    }
}

fn required_text(value: &str) -> Option<Violation> {
    is_blank(value).then_some(Violation::Required)
}

fn check_experience(value: &str) -> Option<Violation> {
    if let Some(violation) = required_text(value) {
        return Some(violation);
    }

    match parse_number(value) {
        None => Some(Violation::NotANumber),
        Some(years) if years <= 0.0 => Some(Violation::NotPositive),
        Some(_) => None,
    }
}
