mod config;
mod feedback;
mod rules;

pub use config::{EvaluationConfig, FallbackPolicy};
pub use feedback::ScoreTier;
pub use rules::{round_to_tenth, MAX_SCORE, MIN_SCORE};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{Difficulty, Question};

const FALLBACK_FEEDBACK: &str = "Good answer! You demonstrated understanding of the concept.";
const FALLBACK_STRENGTHS: [&str; 2] = ["Clear communication", "Relevant examples"];
const FALLBACK_IMPROVEMENT: &str = "Could provide more technical depth";

/// Grade an answer with the keyword-and-length heuristic. Deterministic for equal inputs.
pub fn evaluate_answer(
    question: &Question,
    answer_text: &str,
    difficulty: Difficulty,
) -> EvaluationResult {
    let (partition, signals) = rules::score_answer(question, answer_text, difficulty);

    let feedback = feedback::feedback_text(signals.score, &partition.covered, &partition.missed);
    let strengths = feedback::strengths(partition.covered.len(), signals.answer_length);
    let improvements = feedback::improvements(&partition.missed, signals.answer_length);

    EvaluationResult {
        score: signals.score,
        feedback,
        strengths,
        improvements,
        keywords_covered: partition.covered,
        missed_keywords: partition.missed,
        source: EvaluationSource::Heuristic,
    }
}

/// Grading backend. Failures never reach callers of [`AnswerEvaluator::evaluate`].
pub trait AnswerGrader: Send + Sync {
    fn grade(
        &self,
        question: &Question,
        answer_text: &str,
        difficulty: Difficulty,
    ) -> Result<EvaluationResult, GradingError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicGrader;

impl AnswerGrader for HeuristicGrader {
    fn grade(
        &self,
        question: &Question,
        answer_text: &str,
        difficulty: Difficulty,
    ) -> Result<EvaluationResult, GradingError> {
        Ok(evaluate_answer(question, answer_text, difficulty))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GradingError {
    #[error("grader unavailable: {0}")]
    Unavailable(String),
}

/// Applies the simulated grading latency and converts grader failures into the fallback result.
pub struct AnswerEvaluator<G = HeuristicGrader> {
    grader: G,
    config: EvaluationConfig,
}

impl AnswerEvaluator<HeuristicGrader> {
    pub fn heuristic(config: EvaluationConfig) -> Self {
        Self::new(HeuristicGrader, config)
    }
}

impl<G> AnswerEvaluator<G>
where
    G: AnswerGrader,
{
    pub fn new(grader: G, config: EvaluationConfig) -> Self {
        Self { grader, config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub async fn evaluate(
        &self,
        question: &Question,
        answer_text: &str,
        difficulty: Difficulty,
    ) -> EvaluationResult {
        let latency = self.config.simulated_latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        match self.grader.grade(question, answer_text, difficulty) {
            Ok(result) => {
                debug!(question_id = %question.id, score = result.score, "answer graded");
                result
            }
            Err(err) => {
                warn!(question_id = %question.id, error = %err, "grading failed, using fallback score");
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> EvaluationResult {
        let score = f64::from(self.config.fallback.draw_score()).clamp(MIN_SCORE, MAX_SCORE);

        EvaluationResult {
            score,
            feedback: FALLBACK_FEEDBACK.to_string(),
            strengths: FALLBACK_STRENGTHS.iter().map(|s| s.to_string()).collect(),
            improvements: vec![FALLBACK_IMPROVEMENT.to_string()],
            keywords_covered: Vec::new(),
            missed_keywords: Vec::new(),
            source: EvaluationSource::Fallback,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationSource {
    Heuristic,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords_covered: Vec<String>,
    pub missed_keywords: Vec<String>,
    pub source: EvaluationSource,
}

impl EvaluationResult {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}
