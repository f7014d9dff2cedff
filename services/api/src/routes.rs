use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use vbar_assessment::assessment::{
    assessment_router, Answer, AnswerSheet, AssessmentError, AssessmentService, Evaluation,
    EvaluationConfig, EvaluationEngine, Questionnaire, SessionRepository, DEFAULT_RISK_THRESHOLD,
};
use vbar_assessment::error::AppError;

use crate::infra::AppState;

pub(crate) fn with_assessment_routes<R>(service: Arc<AssessmentService<R>>) -> axum::Router
where
    R: SessionRepository + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/assessments/evaluate",
            axum::routing::post(evaluate_endpoint),
        )
}

/// One answered slot in a stateless evaluation request.
#[derive(Debug, Deserialize)]
pub(crate) struct AnswerSelection {
    pub(crate) category: usize,
    pub(crate) question: usize,
    pub(crate) answer: Answer,
}

/// Stateless evaluation request: a complete set of answers scored in one call
/// without opening a session.
#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateRequest {
    #[serde(default)]
    pub(crate) answers: Vec<AnswerSelection>,
    /// Risk indicator threshold override; defaults to the design value.
    #[serde(default)]
    pub(crate) threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluateResponse {
    pub(crate) evaluation: Evaluation,
    pub(crate) advice: &'static str,
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evaluate_endpoint(
    Json(payload): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let EvaluateRequest { answers, threshold } = payload;

    let config = EvaluationConfig {
        risk_threshold: threshold.unwrap_or(DEFAULT_RISK_THRESHOLD),
    };
    let engine = EvaluationEngine::new(Questionnaire::standard(), config);

    let mut sheet = AnswerSheet::for_questionnaire(engine.questionnaire());
    for selection in answers {
        sheet = sheet
            .with_answer(selection.category, selection.question, selection.answer)
            .map_err(AssessmentError::from)
            .map_err(AppError::from)?;
    }

    let evaluation = engine.evaluate(&sheet);
    Ok(Json(EvaluateResponse {
        advice: evaluation.verdict.advice(),
        evaluation,
    }))
}
