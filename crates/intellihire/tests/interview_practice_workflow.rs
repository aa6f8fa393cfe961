//! Integration scenarios for the interview practice flow.
//!
//! Everything goes through the public service facade and the HTTP router, backed by a real
//! history file, so grading, sealing, persistence, and the dashboard are checked together.

mod common {
    use std::path::Path;
    use std::sync::Arc;

    use intellihire::workflows::interview::{
        EvaluationConfig, InterviewPracticeService, JsonFileHistoryStore,
    };

    pub(super) fn file_service(path: &Path) -> InterviewPracticeService<JsonFileHistoryStore> {
        let store = Arc::new(JsonFileHistoryStore::new(path));
        InterviewPracticeService::new(store, EvaluationConfig::immediate(7))
    }
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use intellihire::workflows::interview::{
    practice_router, Difficulty, EvaluationSource, JsonFileHistoryStore, Role, ScoreTier,
    SessionHistoryStore,
};
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn finished_sessions_survive_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("interview_sessions.json");

    let service = common::file_service(&path);
    let session = service
        .start_session(Role::Backend, Difficulty::Junior)
        .expect("session starts");
    for question in &session.questions {
        let answer = question
            .sample_answer
            .clone()
            .unwrap_or_else(|| question.expected_keywords.join(" "));
        let submitted = service
            .submit_answer(&session.id, &answer)
            .await
            .expect("answer accepted");
        assert_eq!(submitted.evaluation.source, EvaluationSource::Heuristic);
    }
    let finished = service
        .finish_session(&session.id)
        .await
        .expect("session finishes");
    assert!(finished.persisted);

    let stored = JsonFileHistoryStore::new(&path).load().expect("history file");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, session.id);
    assert_eq!(stored[0].average_score, finished.session.average_score);

    let restarted = common::file_service(&path);
    let stats = restarted.stats();
    assert_eq!(stats.total_sessions, 1);
    assert_eq!(stats.strongest_role, Some(Role::Backend));
    assert_eq!(stats.weakest_role, Some(Role::Backend));
    assert_eq!(stats.total_questions, session.questions.len());
}

#[tokio::test]
async fn keyword_free_answers_score_the_floor() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service = common::file_service(&dir.path().join("history.json"));

    let session = service
        .start_session(Role::Frontend, Difficulty::Senior)
        .expect("session starts");
    let submitted = service
        .submit_answer(&session.id, "no idea")
        .await
        .expect("answer accepted");

    assert_eq!(submitted.evaluation.score, 3.0);
    assert_eq!(submitted.tier, ScoreTier::Developing);
    assert_eq!(submitted.evaluation.keywords_covered.len(), 0);
    assert_eq!(submitted.evaluation.strengths.len(), 2);
}

#[tokio::test]
async fn corrupt_history_is_tolerated_and_then_replaced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("history.json");
    std::fs::write(&path, "[{ broken").expect("write garbage");

    let service = common::file_service(&path);
    assert!(service.history().is_empty());

    let session = service
        .start_session(Role::Devops, Difficulty::MidLevel)
        .expect("session starts");
    service
        .submit_answer(&session.id, "docker images run as containers orchestrated by kubernetes")
        .await
        .expect("answer accepted");
    let finished = service
        .finish_session(&session.id)
        .await
        .expect("session finishes");
    assert!(finished.persisted);

    let stored = JsonFileHistoryStore::new(&path).load().expect("rewritten history");
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn progress_route_reads_the_loaded_history() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("history.json");

    let seeded = common::file_service(&path);
    for role in [Role::Frontend, Role::ProductManager] {
        let session = seeded
            .start_session(role, Difficulty::Junior)
            .expect("session starts");
        seeded
            .submit_answer(&session.id, "user research and prioritization")
            .await
            .expect("answer accepted");
        seeded
            .finish_session(&session.id)
            .await
            .expect("session finishes");
    }

    let router = practice_router(Arc::new(common::file_service(&path)));
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/progress")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("progress response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let dashboard: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(dashboard["stats"]["total_sessions"], 2);
    assert_eq!(dashboard["stats"]["recent_sessions"][0]["role"], "product-manager");
    assert_eq!(dashboard["difficulty_breakdown"][0]["difficulty"], "junior");
    assert_eq!(dashboard["role_breakdown"].as_array().map(Vec::len), Some(2));
}
