//! Interview practice workflow: question bank, answer grading, session lifecycle, and progress.

pub mod domain;
pub mod evaluation;
pub mod history;
pub mod progress;
pub mod question_bank;
pub mod router;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{Answer, Difficulty, DomainError, Question, QuestionKind, Role};
pub use evaluation::{
    evaluate_answer, AnswerEvaluator, AnswerGrader, EvaluationConfig, EvaluationResult,
    EvaluationSource, FallbackPolicy, GradingError, HeuristicGrader, ScoreTier,
};
pub use history::{HistoryError, InMemoryHistoryStore, JsonFileHistoryStore, SessionHistoryStore};
pub use progress::{
    compute_difficulty_breakdown, compute_role_breakdown, compute_stats, DifficultyBreakdownEntry,
    ProgressDashboard, ProgressStats, RoleBreakdownEntry,
};
pub use question_bank::{PracticeCatalog, QuestionBank, SESSION_QUESTION_COUNT};
pub use router::practice_router;
pub use service::{FinishedSession, InterviewPracticeService, PracticeError, SubmittedAnswer};
pub use session::{InterviewSession, SessionError, SessionId};
