use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use axum::http::StatusCode;
use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use super::domain::{Answer, Difficulty, DomainError, Question, Role};
use super::evaluation::{
    AnswerEvaluator, AnswerGrader, EvaluationConfig, EvaluationResult, HeuristicGrader, ScoreTier,
};
use super::history::SessionHistoryStore;
use super::progress::{
    compute_difficulty_breakdown, compute_role_breakdown, compute_stats, DifficultyBreakdownEntry,
    ProgressDashboard, ProgressStats, RoleBreakdownEntry,
};
use super::question_bank::QuestionBank;
use super::session::{InterviewSession, SessionError, SessionId};

/// Service composing the question bank, evaluator, and history store.
///
/// In-flight sessions live in memory; sealed sessions are appended to the history and saved once.
pub struct InterviewPracticeService<S, G = HeuristicGrader> {
    bank: Arc<QuestionBank>,
    evaluator: Arc<AnswerEvaluator<G>>,
    store: Arc<S>,
    active: Mutex<HashMap<SessionId, InterviewSession>>,
    history: RwLock<Vec<InterviewSession>>,
    /// Serialises saves so a newer snapshot never lands before an older one.
    persist: tokio::sync::Mutex<()>,
}

impl<S> InterviewPracticeService<S, HeuristicGrader>
where
    S: SessionHistoryStore + 'static,
{
    pub fn new(store: Arc<S>, config: EvaluationConfig) -> Self {
        Self::with_evaluator(
            QuestionBank::standard(),
            store,
            AnswerEvaluator::heuristic(config),
        )
    }
}

impl<S, G> InterviewPracticeService<S, G>
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    pub fn with_evaluator(bank: QuestionBank, store: Arc<S>, evaluator: AnswerEvaluator<G>) -> Self {
        let history = match store.load() {
            Ok(sessions) => sessions,
            Err(err) => {
                warn!(error = %err, "session history unreadable, starting empty");
                Vec::new()
            }
        };
        info!(sessions = history.len(), "session history loaded");

        Self {
            bank: Arc::new(bank),
            evaluator: Arc::new(evaluator),
            store,
            active: Mutex::new(HashMap::new()),
            history: RwLock::new(history),
            persist: tokio::sync::Mutex::new(()),
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn questions(&self, role: Role, difficulty: Difficulty) -> Vec<Question> {
        self.bank.questions(role, difficulty).to_vec()
    }

    pub fn find_question(&self, question_id: &str) -> Result<Question, PracticeError> {
        self.bank
            .find(question_id)
            .cloned()
            .ok_or_else(|| PracticeError::QuestionNotFound(question_id.to_string()))
    }

    pub fn start_session(
        &self,
        role: Role,
        difficulty: Difficulty,
    ) -> Result<InterviewSession, PracticeError> {
        self.start_session_with_rng(role, difficulty, &mut rand::thread_rng())
    }

    pub fn start_session_with_rng<R>(
        &self,
        role: Role,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<InterviewSession, PracticeError>
    where
        R: Rng + ?Sized,
    {
        let questions = self.bank.draw_session(role, difficulty, rng);
        if questions.is_empty() {
            return Err(PracticeError::NoQuestions { role, difficulty });
        }

        let session = InterviewSession::start(role, difficulty, questions, Utc::now());
        info!(
            session_id = %session.id,
            %role,
            %difficulty,
            questions = session.questions.len(),
            "practice session started"
        );

        self.active_sessions()
            .insert(session.id.clone(), session.clone());
        Ok(session)
    }

    pub fn active_session(&self, id: &SessionId) -> Result<InterviewSession, PracticeError> {
        self.active_sessions()
            .get(id)
            .cloned()
            .ok_or_else(|| PracticeError::SessionNotFound(id.clone()))
    }

    /// Grade the answer to the session's current question and append it.
    pub async fn submit_answer(
        &self,
        id: &SessionId,
        answer_text: &str,
    ) -> Result<SubmittedAnswer, PracticeError> {
        if answer_text.trim().is_empty() {
            return Err(PracticeError::EmptyAnswer);
        }

        let (question, difficulty) = {
            let sessions = self.active_sessions();
            let session = sessions
                .get(id)
                .ok_or_else(|| PracticeError::SessionNotFound(id.clone()))?;
            let question = session
                .current_question()
                .cloned()
                .ok_or(SessionError::AllQuestionsAnswered)?;
            (question, session.difficulty)
        };

        let evaluation = self
            .evaluator
            .evaluate(&question, answer_text, difficulty)
            .await;

        let mut sessions = self.active_sessions();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| PracticeError::SessionNotFound(id.clone()))?;

        session.record_answer(Answer {
            question: question.clone(),
            answer_text: answer_text.to_string(),
            submitted_at: Utc::now(),
            score: evaluation.score,
            feedback: evaluation.feedback.clone(),
        })?;

        Ok(SubmittedAnswer {
            session_id: id.clone(),
            question_id: question.id,
            tier: evaluation.tier(),
            evaluation,
            answered: session.answers.len(),
            remaining: session.remaining(),
            next_question: session.current_question().cloned(),
        })
    }

    /// Seal the session, append it to the history, and persist the full history once.
    ///
    /// The save runs on the blocking pool; no history lock is held while it does.
    pub async fn finish_session(&self, id: &SessionId) -> Result<FinishedSession, PracticeError> {
        let session = {
            let mut sessions = self.active_sessions();
            let session = sessions
                .get_mut(id)
                .ok_or_else(|| PracticeError::SessionNotFound(id.clone()))?;
            session.seal(Utc::now())?;
            sessions
                .remove(id)
                .ok_or_else(|| PracticeError::SessionNotFound(id.clone()))?
        };

        let _persisting = self.persist.lock().await;
        let snapshot = {
            let mut history = self.history.write().unwrap_or_else(PoisonError::into_inner);
            history.push(session.clone());
            history.clone()
        };

        let store = Arc::clone(&self.store);
        let saved = tokio::task::spawn_blocking(move || store.save(&snapshot)).await;

        let persisted = match saved {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                warn!(session_id = %session.id, error = %err, "session history not persisted");
                false
            }
            Err(err) => {
                warn!(session_id = %session.id, error = %err, "history save task failed");
                false
            }
        };

        info!(
            session_id = %session.id,
            average_score = session.average_score,
            answers = session.answers.len(),
            persisted,
            "practice session finished"
        );

        Ok(FinishedSession { session, persisted })
    }

    /// Drop an unfinished session without touching the history.
    pub fn abandon_session(&self, id: &SessionId) -> Result<InterviewSession, PracticeError> {
        self.active_sessions()
            .remove(id)
            .ok_or_else(|| PracticeError::SessionNotFound(id.clone()))
    }

    pub fn history(&self) -> Vec<InterviewSession> {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn stats(&self) -> ProgressStats {
        compute_stats(&self.history.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn difficulty_breakdown(&self) -> Vec<DifficultyBreakdownEntry> {
        compute_difficulty_breakdown(&self.history.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn role_breakdown(&self) -> Vec<RoleBreakdownEntry> {
        compute_role_breakdown(&self.history.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn dashboard(&self) -> ProgressDashboard {
        ProgressDashboard::from_sessions(
            &self.history.read().unwrap_or_else(PoisonError::into_inner),
        )
    }

    fn active_sessions(&self) -> std::sync::MutexGuard<'_, HashMap<SessionId, InterviewSession>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Outcome of a submitted answer plus where the session stands afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct SubmittedAnswer {
    pub session_id: SessionId,
    pub question_id: String,
    pub evaluation: EvaluationResult,
    pub tier: ScoreTier,
    pub answered: usize,
    pub remaining: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question: Option<Question>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinishedSession {
    pub session: InterviewSession,
    /// False when the history store rejected the save; the in-memory history still holds it.
    pub persisted: bool,
}

/// Error raised by the practice service.
#[derive(Debug, thiserror::Error)]
pub enum PracticeError {
    #[error("session '{0}' not found")]
    SessionNotFound(SessionId),
    #[error("question '{0}' not found")]
    QuestionNotFound(String),
    #[error("answer text is empty")]
    EmptyAnswer,
    #[error("no questions available for {role} at {difficulty} level")]
    NoQuestions { role: Role, difficulty: Difficulty },
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl PracticeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PracticeError::SessionNotFound(_)
            | PracticeError::QuestionNotFound(_)
            | PracticeError::NoQuestions { .. } => StatusCode::NOT_FOUND,
            PracticeError::Domain(_) => StatusCode::BAD_REQUEST,
            PracticeError::EmptyAnswer | PracticeError::Session(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}
