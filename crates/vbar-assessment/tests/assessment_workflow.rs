//! Integration specifications for the assessment session workflow.
//!
//! Scenarios run through the public service facade and HTTP router so scoring,
//! classification, and session handling are validated together without
//! reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use vbar_assessment::assessment::{
        AssessmentService, EvaluationConfig, Questionnaire, RepositoryError, SessionId,
        SessionRecord, SessionRepository,
    };

    #[derive(Default, Clone)]
    pub(super) struct MemoryRepository {
        records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
    }

    impl SessionRepository for MemoryRepository {
        fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if guard.contains_key(&record.session_id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.session_id.clone(), record.clone());
            Ok(record)
        }

        fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if !guard.contains_key(&record.session_id) {
                return Err(RepositoryError::NotFound);
            }
            guard.insert(record.session_id.clone(), record);
            Ok(())
        }

        fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.get(id).cloned())
        }
    }

    pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
        let repository = Arc::new(MemoryRepository::default());
        let service = AssessmentService::new(
            repository.clone(),
            Questionnaire::standard(),
            EvaluationConfig::default(),
        );
        (service, repository)
    }
}

mod sessions {
    use super::common::*;
    use vbar_assessment::assessment::{
        Answer, AssessmentError, RepositoryError, SessionId, Verdict,
    };

    #[test]
    fn fresh_session_reports_insufficient_data() {
        let (service, _) = build_service();
        let view = service.start().expect("session starts");

        assert_eq!(view.evaluation.answered_count, 0);
        assert_eq!(view.evaluation.total_questions, 14);
        assert_eq!(view.evaluation.totals.employment, 0.0);
        assert_eq!(view.evaluation.totals.entrepreneurship, 0.0);
        assert_eq!(view.evaluation.verdict, Verdict::InsufficientData);
        assert_eq!(view.advice, "Nog te weinig vragen beantwoord");
    }

    #[test]
    fn employment_heavy_answers_lean_toward_employment() {
        let (service, _) = build_service();
        let view = service.start().expect("session starts");
        let id = view.session_id;

        // Employment indicators all "yes".
        for question in 0..5 {
            service
                .answer(&id, 0, question, Answer::Yes)
                .expect("answer applies");
        }
        // Entrepreneurship indicators all "no".
        for question in 0..5 {
            service
                .answer(&id, 1, question, Answer::No)
                .expect("answer applies");
        }
        for question in 0..4 {
            service
                .answer(&id, 2, question, Answer::No)
                .expect("answer applies");
        }

        let view = service.get(&id).expect("session fetches");
        assert_eq!(view.evaluation.answered_count, 14);
        assert_eq!(view.evaluation.totals.employment, 7.0);
        assert_eq!(view.evaluation.totals.entrepreneurship, 0.0);
        assert_eq!(view.evaluation.risk_indicator, -7.0);
        assert_eq!(view.evaluation.verdict, Verdict::LeansEmployment);
    }

    #[test]
    fn half_answered_is_still_insufficient_even_with_strong_evidence() {
        let (service, _) = build_service();
        let view = service.start().expect("session starts");
        let id = view.session_id;

        // 14 questions: answer six, one short of the completion gate.
        for question in 0..5 {
            service
                .answer(&id, 0, question, Answer::Yes)
                .expect("answer applies");
        }
        service
            .answer(&id, 1, 0, Answer::No)
            .expect("answer applies");

        let view = service.get(&id).expect("session fetches");
        assert_eq!(view.evaluation.answered_count, 6);
        assert_eq!(view.evaluation.risk_indicator, -7.0);
        assert_eq!(view.evaluation.verdict, Verdict::InsufficientData);

        // One more answer clears the gate and the verdict flips.
        let view = service
            .answer(&id, 1, 1, Answer::No)
            .expect("answer applies");
        assert_eq!(view.evaluation.answered_count, 7);
        assert_eq!(view.evaluation.verdict, Verdict::LeansEmployment);
    }

    #[test]
    fn answers_survive_between_reads() {
        let (service, repository) = build_service();
        let view = service.start().expect("session starts");
        let id = view.session_id;

        service
            .answer(&id, 2, 3, Answer::Partial)
            .expect("answer applies");

        let fetched = service.get(&id).expect("session fetches");
        assert_eq!(fetched.evaluation.answered_count, 1);

        use vbar_assessment::assessment::SessionRepository;
        let record = repository
            .fetch(&id)
            .expect("repo fetch")
            .expect("record present");
        assert_eq!(record.sheet.answer(2, 3), Some(Answer::Partial));
    }

    #[test]
    fn unknown_session_and_slot_errors_surface() {
        let (service, _) = build_service();

        let missing = SessionId("ses-does-not-exist".to_string());
        match service.get(&missing) {
            Err(AssessmentError::Repository(RepositoryError::NotFound)) => {}
            other => panic!("expected not-found, got {other:?}"),
        }

        let view = service.start().expect("session starts");
        match service.answer(&view.session_id, 9, 0, Answer::Yes) {
            Err(AssessmentError::OutOfRange(err)) => {
                assert_eq!(err.category, 9);
            }
            other => panic!("expected out-of-range, got {other:?}"),
        }
    }
}

mod routing {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::common::*;
    use vbar_assessment::assessment::assessment_router;

    fn build_router() -> axum::Router {
        let (service, _) = build_service();
        assessment_router(Arc::new(service))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[tokio::test]
    async fn questionnaire_endpoint_lists_categories() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/questionnaire")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        let categories = payload
            .get("categories")
            .and_then(Value::as_array)
            .expect("categories array");
        assert_eq!(categories.len(), 3);
        assert_eq!(
            categories[0].get("name"),
            Some(&json!("W")),
        );
    }

    #[tokio::test]
    async fn session_lifecycle_over_http() {
        let router = build_router();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/assessments")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let payload = json_body(response).await;
        let session_id = payload
            .get("session_id")
            .and_then(Value::as_str)
            .expect("session id")
            .to_string();
        assert_eq!(
            payload.pointer("/evaluation/verdict"),
            Some(&json!("insufficient_data")),
        );

        let answer = json!({ "category": 0, "question": 0, "answer": "yes" });
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/v1/assessments/{session_id}/answers"))
                    .header("content-type", "application/json")
                    .body(Body::from(answer.to_string()))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = json_body(response).await;
        assert_eq!(payload.pointer("/evaluation/answered_count"), Some(&json!(1)));
        assert_eq!(
            payload.pointer("/evaluation/totals/employment"),
            Some(&json!(2.0)),
        );

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/v1/assessments/{session_id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload.pointer("/evaluation/answered_count"), Some(&json!(1)));
    }

    #[tokio::test]
    async fn invalid_slot_and_unknown_session_map_to_http_errors() {
        let router = build_router();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/assessments/ses-unknown")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let (service, _) = build_service();
        let view = service.start().expect("session starts");
        let session_id = view.session_id.0.clone();
        let router = assessment_router(Arc::new(service));

        let answer = json!({ "category": 0, "question": 99, "answer": "no" });
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/v1/assessments/{session_id}/answers"))
                    .header("content-type", "application/json")
                    .body(Body::from(answer.to_string()))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let payload = json_body(response).await;
        assert!(payload
            .get("error")
            .and_then(Value::as_str)
            .expect("error message")
            .contains("no question"));
    }
}
