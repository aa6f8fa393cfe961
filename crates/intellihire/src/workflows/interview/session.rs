use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Answer, Difficulty, Question, Role};
use super::evaluation::round_to_tenth;

/// Session identifier derived from the start time in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static LAST_SESSION_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp, bumped past the previous id when two sessions start in the same tick.
fn next_session_id(now: DateTime<Utc>) -> SessionId {
    let candidate = now.timestamp_millis();
    let previous = match LAST_SESSION_MILLIS.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(candidate.max(last + 1))
    }) {
        Ok(last) | Err(last) => last,
    };
    SessionId(candidate.max(previous + 1).to_string())
}

/// One practice interview: a fixed question set, answers in order, and the sealed summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: SessionId,
    pub role: Role,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    /// Mean answer score rounded to a tenth; zero until the session is sealed.
    pub average_score: f64,
}

impl InterviewSession {
    pub fn start(
        role: Role,
        difficulty: Difficulty,
        questions: Vec<Question>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: next_session_id(now),
            role,
            difficulty,
            questions,
            answers: Vec::new(),
            started_at: now,
            ended_at: None,
            average_score: 0.0,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.is_sealed() {
            return None;
        }
        self.questions.get(self.answers.len())
    }

    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.answers.len())
    }

    pub fn is_sealed(&self) -> bool {
        self.ended_at.is_some()
    }

    pub fn record_answer(&mut self, answer: Answer) -> Result<(), SessionError> {
        if self.is_sealed() {
            return Err(SessionError::AlreadySealed);
        }

        let expected = self
            .questions
            .get(self.answers.len())
            .ok_or(SessionError::AllQuestionsAnswered)?;

        if expected.id != answer.question.id {
            return Err(SessionError::QuestionMismatch {
                expected: expected.id.clone(),
                received: answer.question.id,
            });
        }

        self.answers.push(answer);
        Ok(())
    }

    /// Stamp the end time and the rounded mean of all answer scores.
    pub fn seal(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.is_sealed() {
            return Err(SessionError::AlreadySealed);
        }
        if self.answers.is_empty() {
            return Err(SessionError::NoAnswers);
        }

        let total: f64 = self.answers.iter().map(|answer| answer.score).sum();
        self.average_score = round_to_tenth(total / self.answers.len() as f64);
        self.ended_at = Some(now);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("every question in this session has already been answered")]
    AllQuestionsAnswered,
    #[error("answer targets question '{received}' but the current question is '{expected}'")]
    QuestionMismatch { expected: String, received: String },
    #[error("a session cannot be finished before any answer is recorded")]
    NoAnswers,
    #[error("session is already finished")]
    AlreadySealed,
}
