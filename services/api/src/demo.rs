use crate::infra::{parse_position, InMemorySessionStore};
use clap::Args;
use job_intake::error::AppError;
use job_intake::workflows::intake::{
    validate, ApplicationForm, ApplicationSummary, EditValidation, EventOutcome, FieldEdit,
    FormEvent, FormPolicy, JobApplicationService, Position, SessionView, Skill, SkillToggle,
    ValidationErrors,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Path to a JSON document shaped like the form (camelCase field names)
    #[arg(long)]
    pub(crate) form: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Position the scripted applicant applies for (Developer, Designer, Manager)
    #[arg(long, value_parser = parse_position)]
    pub(crate) position: Option<Position>,
    /// Re-check edited fields instead of clearing their errors outright
    #[arg(long)]
    pub(crate) revalidate: bool,
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.form)?;
    let form: ApplicationForm = serde_json::from_str(&raw)?;

    let errors = validate(&form);
    if errors.is_empty() {
        println!("{} is valid\n", args.form.display());
        print!("{}", ApplicationSummary::from_form(&form));
    } else {
        println!("{} has {} problem(s):", args.form.display(), errors.len());
        render_errors(&errors);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let position = args.position.unwrap_or(Position::Designer);
    let policy = FormPolicy {
        edit_validation: if args.revalidate {
            EditValidation::Revalidate
        } else {
            EditValidation::Clear
        },
        ..FormPolicy::default()
    };

    let service = JobApplicationService::new(Arc::new(InMemorySessionStore::default()), policy);
    let session = service.open()?;
    println!("Job application demo ({position})");
    println!("- Opened session {}", session.id);

    let (record, outcome) = service.dispatch(&session.id, FormEvent::Submit)?;
    println!("- Submitted a blank form -> {}", describe(outcome));
    if let Some(errors) = record.state.errors() {
        render_errors(errors);
    }

    let events = scripted_edits(position);
    println!("- Filling in {} field(s)", events.len());
    for event in events {
        let (record, _) = service.dispatch(&session.id, event)?;
        render_progress(&record.view());
    }

    let (record, outcome) = service.dispatch(&session.id, FormEvent::Submit)?;
    println!("- Submitted again -> {}", describe(outcome));
    match record.state.summary() {
        Some(summary) => {
            println!("\nSummary");
            print!("{summary}");
        }
        None => {
            if let Some(errors) = record.state.errors() {
                render_errors(errors);
            }
        }
    }

    let (_, outcome) = service.dispatch(
        &session.id,
        FormEvent::Edit {
            edit: FieldEdit::FullName("Changed My Mind".to_string()),
        },
    )?;
    println!("\n- Editing after submission -> {}", describe(outcome));

    Ok(())
}

fn scripted_edits(position: Position) -> Vec<FormEvent> {
    let mut edits = vec![
        FieldEdit::FullName("Katherine Johnson".to_string()),
        FieldEdit::Email("katherine@langley.example".to_string()),
        FieldEdit::PhoneNumber("7575550142".to_string()),
        FieldEdit::ApplyingForPosition(Some(position)),
    ];
    match position {
        Position::Developer => edits.push(FieldEdit::RelevantExperience("12".to_string())),
        Position::Designer => {
            edits.push(FieldEdit::RelevantExperience("4".to_string()));
            edits.push(FieldEdit::PortfolioUrl("https://katherine.example/work".to_string()));
        }
        Position::Manager => edits.push(FieldEdit::ManagementExperience(
            "Led the trajectory analysis group".to_string(),
        )),
    }
    edits.push(FieldEdit::AdditionalSkills(SkillToggle {
        skill: Skill::Python,
        checked: true,
    }));
    edits.push(FieldEdit::PreferredInterviewTime("2025-10-14T10:00".to_string()));

    edits.into_iter().map(|edit| FormEvent::Edit { edit }).collect()
}

fn describe(outcome: EventOutcome) -> String {
    match outcome {
        EventOutcome::Edited { field } => format!("edited {field}"),
        EventOutcome::SubmitRejected { error_count } => {
            format!("blocked by {error_count} validation error(s)")
        }
        EventOutcome::Submitted => "submitted".to_string(),
        EventOutcome::IgnoredAfterSubmit => {
            "ignored, the application is already submitted".to_string()
        }
    }
}

fn render_errors(errors: &ValidationErrors) {
    for (field, message) in errors.messages() {
        println!("    {field}: {message}");
    }
}

fn render_progress(view: &SessionView) {
    let open_errors = view.errors.as_ref().map(ValidationErrors::len).unwrap_or(0);
    let shown: Vec<_> = view.fields.iter().map(|field| field.name()).collect();
    println!("    {} error(s) left | showing {}", open_errors, shown.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_edits_fill_a_valid_form_for_each_position() {
        for position in Position::ALL {
            let form = scripted_edits(position)
                .into_iter()
                .fold(ApplicationForm::default(), |form, event| match event {
                    FormEvent::Edit { edit } => form.with_edit(edit),
                    FormEvent::Submit => form,
                });
            assert!(validate(&form).is_empty(), "{position}");
        }
    }

    #[test]
    fn demo_runs_to_completion() {
        run_demo(DemoArgs {
            position: Some(Position::Manager),
            revalidate: true,
        })
        .expect("demo completes");
    }
}
