use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Answer, SessionId};
use super::repository::{RepositoryError, SessionRepository};
use super::service::{AssessmentError, AssessmentService};

/// Router builder exposing HTTP endpoints for the questionnaire and sessions.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/questionnaire", get(questionnaire_handler::<R>))
        .route("/api/v1/assessments", post(start_handler::<R>))
        .route(
            "/api/v1/assessments/:session_id",
            get(status_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/answers",
            post(answer_handler::<R>),
        )
        .with_state(service)
}

/// Body for answering a single question within a session.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub category: usize,
    pub question: usize,
    pub answer: Answer,
}

pub(crate) async fn questionnaire_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    (
        StatusCode::OK,
        axum::Json(service.engine().questionnaire().clone()),
    )
        .into_response()
}

pub(crate) async fn start_handler<R>(State(service): State<Arc<AssessmentService<R>>>) -> Response
where
    R: SessionRepository + 'static,
{
    match service.start() {
        Ok(view) => (StatusCode::ACCEPTED, axum::Json(view)).into_response(),
        Err(AssessmentError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "session already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn answer_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<AnswerRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    match service.answer(&id, request.category, request.question, request.answer) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(AssessmentError::OutOfRange(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AssessmentError::Repository(RepositoryError::NotFound)) => session_not_found(&id),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    match service.get(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(AssessmentError::Repository(RepositoryError::NotFound)) => session_not_found(&id),
        Err(other) => internal_error(other),
    }
}

fn session_not_found(id: &SessionId) -> Response {
    let payload = json!({
        "session_id": id.0,
        "error": "session not found",
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error(error: AssessmentError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
