use serde::{Deserialize, Serialize};

const SCORE_BANDS: [(f64, &str); 5] = [
    (
        9.0,
        "Excellent answer! You demonstrated comprehensive understanding and covered all key concepts.",
    ),
    (
        7.0,
        "Good answer! You showed solid understanding with room for minor improvements.",
    ),
    (
        5.0,
        "Decent answer. You covered some key points but missed important concepts.",
    ),
    (
        3.0,
        "Basic answer. You should expand on key concepts and provide more detail.",
    ),
    (
        0.0,
        "Your answer needs significant improvement. Focus on the core concepts.",
    ),
];

const STRENGTH_POOL: [&str; 5] = [
    "Clear communication",
    "Structured response",
    "Relevant examples",
    "Good understanding",
    "Logical flow",
];

const IMPROVEMENT_POOL: [&str; 4] = [
    "Add practical examples",
    "Explain the 'why' behind concepts",
    "Consider edge cases",
    "Mention real-world applications",
];

const MINIMUM_ITEMS: usize = 2;
const FEEDBACK_MISSED_LIMIT: usize = 3;
const IMPROVEMENT_MISSED_LIMIT: usize = 2;

pub(crate) fn feedback_text(score: f64, covered: &[String], missed: &[String]) -> String {
    let mut feedback = SCORE_BANDS
        .iter()
        .find(|(minimum, _)| score >= *minimum)
        .map(|(_, sentence)| sentence.to_string())
        .unwrap_or_default();

    if !covered.is_empty() {
        feedback.push_str(&format!(" You correctly mentioned: {}.", covered.join(", ")));
    }

    if !missed.is_empty() {
        let shown = &missed[..missed.len().min(FEEDBACK_MISSED_LIMIT)];
        feedback.push_str(&format!(" Consider discussing: {}.", shown.join(", ")));
    }

    feedback
}

pub(crate) fn strengths(covered_count: usize, answer_length: usize) -> Vec<String> {
    let mut strengths = Vec::new();

    if covered_count >= 3 {
        strengths.push("Covered multiple key concepts".to_string());
    }
    if answer_length >= 150 {
        strengths.push("Provided detailed explanation".to_string());
    }
    if (50..=300).contains(&answer_length) {
        strengths.push("Good answer length".to_string());
    }

    pad_from_pool(strengths, &STRENGTH_POOL)
}

pub(crate) fn improvements(missed: &[String], answer_length: usize) -> Vec<String> {
    let mut improvements = Vec::new();

    if !missed.is_empty() {
        let shown = &missed[..missed.len().min(IMPROVEMENT_MISSED_LIMIT)];
        improvements.push(format!("Include discussion of: {}", shown.join(", ")));
    }
    if answer_length < 50 {
        improvements.push("Provide more detailed explanation".to_string());
    }
    if answer_length > 400 {
        improvements.push("Be more concise in your response".to_string());
    }

    pad_from_pool(improvements, &IMPROVEMENT_POOL)
}

fn pad_from_pool(mut items: Vec<String>, pool: &[&str]) -> Vec<String> {
    let needed = MINIMUM_ITEMS.saturating_sub(items.len());
    items.extend(pool.iter().take(needed).map(|phrase| phrase.to_string()));
    items
}

/// Presentation bucket for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent,
    Good,
    Developing,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 6.0 {
            Self::Good
        } else {
            Self::Developing
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Good => "Good Job!",
            Self::Developing => "Keep Practicing!",
        }
    }
}
