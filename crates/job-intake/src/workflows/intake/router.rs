use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{ApplicationForm, SessionId};
use super::repository::{SessionStore, SessionView};
use super::service::JobApplicationService;
use super::session::{EventOutcome, FormEvent};
use super::visibility::rendered_fields;
use crate::error::AppError;

/// Router builder exposing the form sessions and the stateless validation endpoint.
pub fn application_router<S>(service: Arc<JobApplicationService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/applications/validate", post(validate_handler::<S>))
        .route("/api/v1/applications/sessions", post(open_handler::<S>))
        .route(
            "/api/v1/applications/sessions/:session_id",
            get(view_handler::<S>),
        )
        .route(
            "/api/v1/applications/sessions/:session_id/events",
            post(event_handler::<S>),
        )
        .route(
            "/api/v1/applications/sessions/:session_id/summary",
            get(summary_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn validate_handler<S>(
    State(service): State<Arc<JobApplicationService<S>>>,
    Json(form): Json<ApplicationForm>,
) -> Json<serde_json::Value>
where
    S: SessionStore + 'static,
{
    let errors = service.check(&form);
    Json(json!({
        "valid": errors.is_empty(),
        "errors": errors,
        "fields": rendered_fields(form.applying_for_position),
    }))
}

pub(crate) async fn open_handler<S>(
    State(service): State<Arc<JobApplicationService<S>>>,
) -> Result<(StatusCode, Json<SessionView>), AppError>
where
    S: SessionStore + 'static,
{
    let record = service.open()?;
    Ok((StatusCode::CREATED, Json(record.view())))
}

pub(crate) async fn view_handler<S>(
    State(service): State<Arc<JobApplicationService<S>>>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionView>, AppError>
where
    S: SessionStore + 'static,
{
    let record = service.get(&SessionId(session_id))?;
    Ok(Json(record.view()))
}

pub(crate) async fn event_handler<S>(
    State(service): State<Arc<JobApplicationService<S>>>,
    Path(session_id): Path<String>,
    Json(event): Json<FormEvent>,
) -> Result<Response, AppError>
where
    S: SessionStore + 'static,
{
    let (record, outcome) = service.dispatch(&SessionId(session_id), event)?;
    let status = match outcome {
        EventOutcome::IgnoredAfterSubmit => StatusCode::CONFLICT,
        EventOutcome::SubmitRejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        EventOutcome::Edited { .. } | EventOutcome::Submitted => StatusCode::OK,
    };
    let payload = json!({
        "result": outcome,
        "session": record.view(),
    });
    Ok((status, Json(payload)).into_response())
}

pub(crate) async fn summary_handler<S>(
    State(service): State<Arc<JobApplicationService<S>>>,
    Path(session_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError>
where
    S: SessionStore + 'static,
{
    let summary = service.summary(&SessionId(session_id))?;
    let text = summary.to_string();
    Ok(Json(json!({
        "lines": summary.lines,
        "text": text,
    })))
}
