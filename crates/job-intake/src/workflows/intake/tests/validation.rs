use super::common::*;
use crate::workflows::intake::domain::{ApplicationForm, FormField, Position};
use crate::workflows::intake::validation::{
    validate, validate_field, EditValidation, Violation,
};

#[test]
fn valid_forms_produce_no_errors_for_every_position() {
    for position in Position::ALL {
        let errors = validate(&valid_form(position));
        assert!(errors.is_empty(), "{position}: {:?}", errors.messages());
    }
}

#[test]
fn blank_form_reports_every_unconditional_field_at_once() {
    let errors = validate(&ApplicationForm::default());

    let fields: Vec<_> = errors.fields().collect();
    assert_eq!(
        fields,
        vec![
            FormField::FullName,
            FormField::Email,
            FormField::PhoneNumber,
            FormField::ApplyingForPosition,
            FormField::AdditionalSkills,
            FormField::PreferredInterviewTime,
        ]
    );
    assert_eq!(
        errors.message(FormField::ApplyingForPosition).as_deref(),
        Some("Applying for Position is required")
    );
}

#[test]
fn whitespace_full_name_is_blank() {
    let mut form = valid_form(Position::Developer);
    form.full_name = "   \t".to_string();

    let errors = validate(&form);
    assert_eq!(
        errors.message(FormField::FullName).as_deref(),
        Some("Full Name is required")
    );
    assert_eq!(errors.len(), 1);
}

#[test]
fn email_format_rules() {
    let mut form = valid_form(Position::Developer);

    form.email = "a@b".to_string();
    assert_eq!(
        validate(&form).message(FormField::Email).as_deref(),
        Some("Email must be a valid format")
    );

    form.email = "a@b.com".to_string();
    assert!(!validate(&form).contains(FormField::Email));

    form.email = " ".to_string();
    assert_eq!(
        validate(&form).message(FormField::Email).as_deref(),
        Some("Email is required")
    );
}

#[test]
fn phone_number_needs_exactly_ten_digits() {
    let mut form = valid_form(Position::Developer);

    for (value, expected) in [
        ("12345", Some(Violation::InvalidNumber)),
        ("1234567890", None),
        ("12345678901", Some(Violation::InvalidNumber)),
        ("", Some(Violation::Required)),
    ] {
        form.phone_number = value.to_string();
        assert_eq!(
            validate(&form).violation(FormField::PhoneNumber),
            expected,
            "phone {value:?}"
        );
    }
    form.phone_number = "12345".to_string();
    assert_eq!(
        validate(&form).message(FormField::PhoneNumber).as_deref(),
        Some("Phone Number must be a valid number")
    );
}

#[test]
fn developer_experience_priority_chain() {
    let mut form = valid_form(Position::Developer);

    let cases = [
        ("", Some("Relevant Experience is required")),
        ("-1", Some("Relevant Experience must be greater than 0")),
        ("0", Some("Relevant Experience must be greater than 0")),
        ("abc", Some("Relevant Experience must be a number")),
        ("3", None),
        ("0.5", None),
    ];

    for (value, expected) in cases {
        form.relevant_experience = value.to_string();
        assert_eq!(
            validate(&form)
                .message(FormField::RelevantExperience)
                .as_deref(),
            expected,
            "experience {value:?}"
        );
    }
}

#[test]
fn designer_portfolio_rules() {
    let mut form = valid_form(Position::Designer);

    form.portfolio_url = String::new();
    assert_eq!(
        validate(&form).message(FormField::PortfolioUrl).as_deref(),
        Some("Portfolio URL is required")
    );

    form.portfolio_url = "ftp://x.com".to_string();
    assert_eq!(
        validate(&form).message(FormField::PortfolioUrl).as_deref(),
        Some("Portfolio URL must be a valid URL")
    );

    form.portfolio_url = "https://x.com".to_string();
    assert!(!validate(&form).contains(FormField::PortfolioUrl));

    for value in ["see https://x.com", "https://x.com and more"] {
        form.portfolio_url = value.to_string();
        assert!(
            !validate(&form).contains(FormField::PortfolioUrl),
            "portfolio {value:?}"
        );
    }
    form.portfolio_url = "https://x.com".to_string();

    form.relevant_experience = String::new();
    assert_eq!(
        validate(&form).violation(FormField::RelevantExperience),
        Some(Violation::Required)
    );
}

#[test]
fn manager_requires_management_experience_only() {
    let mut form = valid_form(Position::Manager);
    form.management_experience = " ".to_string();
    form.relevant_experience = String::new();
    form.portfolio_url = String::new();

    let errors = validate(&form);
    assert_eq!(
        errors.message(FormField::ManagementExperience).as_deref(),
        Some("Management Experience is required")
    );
    assert!(!errors.contains(FormField::RelevantExperience));
    assert!(!errors.contains(FormField::PortfolioUrl));
}

#[test]
fn stale_hidden_values_never_produce_errors() {
    let mut form = valid_form(Position::Manager);
    form.relevant_experience = "abc".to_string();
    form.portfolio_url = "not a url".to_string();

    assert!(validate(&form).is_empty());

    let mut developer = valid_form(Position::Developer);
    developer.portfolio_url = "ftp://x.com".to_string();
    developer.management_experience = String::new();
    assert!(validate(&developer).is_empty());
}

#[test]
fn no_position_leaves_conditional_fields_inactive() {
    let mut form = valid_form(Position::Developer);
    form.applying_for_position = None;
    form.relevant_experience = "-4".to_string();

    let errors = validate(&form);
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FormField::ApplyingForPosition]);
}

#[test]
fn skills_need_at_least_one_selection() {
    let mut form = valid_form(Position::Developer);
    form.additional_skills.clear();
    assert_eq!(
        validate(&form).message(FormField::AdditionalSkills).as_deref(),
        Some("At least one skill must be selected")
    );

    form.additional_skills.insert(crate::workflows::intake::Skill::Css);
    assert!(validate(&form).is_empty());
}

#[test]
fn interview_time_must_parse() {
    let mut form = valid_form(Position::Developer);

    form.preferred_interview_time = "whenever".to_string();
    assert_eq!(
        validate(&form)
            .message(FormField::PreferredInterviewTime)
            .as_deref(),
        Some("Preferred Interview Time must be a valid date and time")
    );

    form.preferred_interview_time = String::new();
    assert_eq!(
        validate(&form).violation(FormField::PreferredInterviewTime),
        Some(Violation::Required)
    );
}

#[test]
fn single_field_check_matches_whole_form_validation() {
    let mut form = valid_form(Position::Designer);
    form.portfolio_url = "portfolio.example".to_string();
    form.phone_number = "555".to_string();

    let errors = validate(&form);
    for field in FormField::ALL {
        assert_eq!(validate_field(field, &form), errors.violation(field), "{field}");
    }
    assert_eq!(
        validate_field(FormField::PortfolioUrl, &form),
        Some(Violation::InvalidUrl)
    );
    assert_eq!(validate_field(FormField::ManagementExperience, &form), None);
}

#[test]
fn clear_mode_drops_only_the_edited_fields_error() {
    let form = ApplicationForm::default();
    let errors = validate(&form);
    assert!(errors.contains(FormField::Email));

    let after = errors.after_edit(FormField::Email, &form, EditValidation::Clear);
    assert!(!after.contains(FormField::Email));
    assert!(after.contains(FormField::FullName));
    assert!(after.contains(FormField::PhoneNumber));
}

#[test]
fn revalidate_mode_keeps_error_until_rule_passes() {
    let mut form = ApplicationForm::default();
    let errors = validate(&form);

    form.email = "a@b".to_string();
    let errors = errors.after_edit(FormField::Email, &form, EditValidation::Revalidate);
    assert_eq!(errors.violation(FormField::Email), Some(Violation::InvalidFormat));

    form.email = "a@b.com".to_string();
    let errors = errors.after_edit(FormField::Email, &form, EditValidation::Revalidate);
    assert!(!errors.contains(FormField::Email));
    assert!(errors.contains(FormField::FullName));
}

#[test]
fn edits_never_surface_new_errors() {
    let mut form = valid_form(Position::Developer);
    form.email = "broken".to_string();
    let errors = crate::workflows::intake::ValidationErrors::default();

    let errors = errors.after_edit(FormField::Email, &form, EditValidation::Revalidate);
    assert!(errors.is_empty());
}

#[test]
fn errors_serialize_as_field_keyed_messages() {
    let mut form = valid_form(Position::Designer);
    form.portfolio_url = "ftp://x.com".to_string();

    let json = serde_json::to_value(validate(&form)).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({ "portfolioURL": "Portfolio URL must be a valid URL" })
    );
}
