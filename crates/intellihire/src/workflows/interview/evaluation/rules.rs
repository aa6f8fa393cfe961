use super::super::domain::{Difficulty, Question};

pub(crate) const TARGET_ANSWER_LENGTH: f64 = 200.0;
const KEYWORD_WEIGHT: f64 = 0.7;
const LENGTH_WEIGHT: f64 = 0.3;
pub const MIN_SCORE: f64 = 3.0;
pub const MAX_SCORE: f64 = 10.0;

/// Expected keywords split by whether the answer mentions them, in keyword order.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct KeywordPartition {
    pub covered: Vec<String>,
    pub missed: Vec<String>,
}

impl KeywordPartition {
    pub fn coverage(&self) -> f64 {
        let total = self.covered.len() + self.missed.len();
        if total == 0 {
            return 0.0;
        }
        self.covered.len() as f64 / total as f64
    }
}

pub(crate) struct ScoreSignals {
    pub answer_length: usize,
    pub score: f64,
}

pub(crate) fn partition_keywords(keywords: &[String], answer_text: &str) -> KeywordPartition {
    let normalized = answer_text.to_lowercase();
    let (covered, missed): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|keyword| normalized.contains(&keyword.to_lowercase()));

    KeywordPartition { covered, missed }
}

/// Length in characters, not bytes.
pub(crate) fn answer_length(answer_text: &str) -> usize {
    answer_text.chars().count()
}

pub(crate) fn length_score(answer_length: usize) -> f64 {
    (answer_length as f64 / TARGET_ANSWER_LENGTH).min(1.0)
}

pub(crate) fn score_answer(
    question: &Question,
    answer_text: &str,
    difficulty: Difficulty,
) -> (KeywordPartition, ScoreSignals) {
    let partition = partition_keywords(&question.expected_keywords, answer_text);
    let keyword_coverage = partition.coverage();
    let answer_length = answer_length(answer_text);
    let length_score = length_score(answer_length);

    let raw = (keyword_coverage * KEYWORD_WEIGHT + length_score * LENGTH_WEIGHT)
        * 10.0
        * difficulty.grading_multiplier();
    let score = round_to_tenth(raw.clamp(MIN_SCORE, MAX_SCORE));

    let signals = ScoreSignals {
        answer_length,
        score,
    };

    (partition, signals)
}

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
