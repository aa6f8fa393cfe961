use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::interview::domain::{
    Answer, Difficulty, Question, QuestionKind, Role,
};
use crate::workflows::interview::evaluation::{
    AnswerGrader, EvaluationConfig, EvaluationResult, GradingError,
};
use crate::workflows::interview::history::{
    HistoryError, InMemoryHistoryStore, SessionHistoryStore,
};
use crate::workflows::interview::service::InterviewPracticeService;
use crate::workflows::interview::session::{InterviewSession, SessionId};

pub(super) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn question(id: &str, keywords: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        prompt: format!("Prompt for {id}"),
        kind: QuestionKind::Technical,
        category: "Testing".to_string(),
        difficulty: Difficulty::MidLevel,
        expected_keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        sample_answer: None,
    }
}

pub(super) fn five_keyword_question() -> Question {
    question(
        "q-five",
        &["closure", "lexical scope", "inner function", "outer function", "encapsulation"],
    )
}

/// Text of exactly `length` characters that starts with `prefix`.
pub(super) fn padded_answer(prefix: &str, length: usize) -> String {
    let mut answer = prefix.to_string();
    while answer.chars().count() < length {
        answer.push('.');
    }
    assert_eq!(answer.chars().count(), length, "prefix longer than target");
    answer
}

pub(super) fn answer_for(question: &Question, score: f64, offset_minutes: i64) -> Answer {
    Answer {
        question: question.clone(),
        answer_text: "sample".to_string(),
        submitted_at: base_time() + Duration::minutes(offset_minutes),
        score,
        feedback: String::new(),
    }
}

/// A finished session with one answer per score, stamped `index` hours after the base time.
pub(super) fn sealed_session(
    index: i64,
    role: Role,
    difficulty: Difficulty,
    average_score: f64,
    answer_scores: &[f64],
) -> InterviewSession {
    let started_at = base_time() + Duration::hours(index);
    let questions: Vec<Question> = (0..answer_scores.len())
        .map(|position| question(&format!("q-{index}-{position}"), &["alpha"]))
        .collect();
    let answers = questions
        .iter()
        .zip(answer_scores)
        .enumerate()
        .map(|(position, (question, score))| answer_for(question, *score, position as i64))
        .collect();

    InterviewSession {
        id: SessionId(format!("session-{index}")),
        role,
        difficulty,
        questions,
        answers,
        started_at,
        ended_at: Some(started_at + Duration::minutes(20)),
        average_score,
    }
}

pub(super) fn scored_session(index: i64, role: Role, average_score: f64) -> InterviewSession {
    sealed_session(index, role, Difficulty::MidLevel, average_score, &[average_score])
}

pub(super) fn immediate_config() -> EvaluationConfig {
    EvaluationConfig::immediate(7)
}

pub(super) fn build_service() -> (
    InterviewPracticeService<InMemoryHistoryStore>,
    Arc<InMemoryHistoryStore>,
) {
    let store = Arc::new(InMemoryHistoryStore::default());
    let service = InterviewPracticeService::new(store.clone(), immediate_config());
    (service, store)
}

pub(super) struct FailingGrader;

impl AnswerGrader for FailingGrader {
    fn grade(
        &self,
        _question: &Question,
        _answer_text: &str,
        _difficulty: Difficulty,
    ) -> Result<EvaluationResult, GradingError> {
        Err(GradingError::Unavailable("grading backend offline".to_string()))
    }
}

pub(super) struct ReadOnlyStore;

impl SessionHistoryStore for ReadOnlyStore {
    fn load(&self) -> Result<Vec<InterviewSession>, HistoryError> {
        Ok(Vec::new())
    }

    fn save(&self, _sessions: &[InterviewSession]) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("disk full".to_string()))
    }
}

pub(super) struct UnreadableStore;

impl SessionHistoryStore for UnreadableStore {
    fn load(&self) -> Result<Vec<InterviewSession>, HistoryError> {
        Err(HistoryError::Unavailable("storage offline".to_string()))
    }

    fn save(&self, _sessions: &[InterviewSession]) -> Result<(), HistoryError> {
        Ok(())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
