use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Difficulty, Role};
use super::evaluation::AnswerGrader;
use super::history::SessionHistoryStore;
use super::service::{InterviewPracticeService, PracticeError};
use super::session::SessionId;

type SharedService<S, G> = Arc<InterviewPracticeService<S, G>>;

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub role: Role,
    pub difficulty: Difficulty,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

/// Router builder exposing the practice flow over HTTP.
pub fn practice_router<S, G>(service: SharedService<S, G>) -> Router
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler::<S, G>))
        .route(
            "/api/v1/questions/:role/:difficulty",
            get(questions_handler::<S, G>),
        )
        .route("/api/v1/sessions", post(start_handler::<S, G>))
        .route(
            "/api/v1/sessions/:session_id",
            get(session_handler::<S, G>).delete(abandon_handler::<S, G>),
        )
        .route(
            "/api/v1/sessions/:session_id/answers",
            post(submit_handler::<S, G>),
        )
        .route(
            "/api/v1/sessions/:session_id/finish",
            post(finish_handler::<S, G>),
        )
        .route("/api/v1/progress", get(progress_handler::<S, G>))
        .with_state(service)
}

fn error_response(error: PracticeError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (error.status_code(), Json(payload)).into_response()
}

/// Unreadable request bodies share the error shape and always answer 422.
fn rejection_response(rejection: JsonRejection) -> Response {
    let payload = json!({ "error": rejection.body_text() });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

pub(crate) async fn catalog_handler<S, G>(State(service): State<SharedService<S, G>>) -> Response
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    (StatusCode::OK, Json(service.bank().catalog())).into_response()
}

pub(crate) async fn questions_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    Path((role, difficulty)): Path<(String, String)>,
) -> Response
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    let parsed = role
        .parse::<Role>()
        .and_then(|role| difficulty.parse::<Difficulty>().map(|level| (role, level)));

    match parsed {
        Ok((role, difficulty)) => {
            let questions = service.questions(role, difficulty);
            (StatusCode::OK, Json(questions)).into_response()
        }
        Err(err) => error_response(err.into()),
    }
}

pub(crate) async fn start_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    payload: Result<Json<StartSessionRequest>, JsonRejection>,
) -> Response
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.start_session(request.role, request.difficulty) {
        Ok(session) => (StatusCode::CREATED, Json(session)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn session_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    match service.active_session(&SessionId(session_id)) {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submit_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    Path(session_id): Path<String>,
    payload: Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> Response
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection),
    };
    let id = SessionId(session_id);
    match service.submit_answer(&id, &request.answer).await {
        Ok(submitted) => (StatusCode::OK, Json(submitted)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn finish_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    match service.finish_session(&SessionId(session_id)).await {
        Ok(finished) => (StatusCode::OK, Json(finished)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn abandon_handler<S, G>(
    State(service): State<SharedService<S, G>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    match service.abandon_session(&SessionId(session_id)) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn progress_handler<S, G>(
    State(service): State<SharedService<S, G>>,
) -> Response
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    (StatusCode::OK, Json(service.dashboard())).into_response()
}
