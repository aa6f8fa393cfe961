use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job track a practice interview targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Frontend,
    Backend,
    Fullstack,
    DataScience,
    ProductManager,
    Devops,
}

impl Role {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Frontend,
            Self::Backend,
            Self::Fullstack,
            Self::DataScience,
            Self::ProductManager,
            Self::Devops,
        ]
    }

    /// Identifier used in URLs and persisted history.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
            Self::DataScience => "data-science",
            Self::ProductManager => "product-manager",
            Self::Devops => "devops",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Fullstack => "Fullstack",
            Self::DataScience => "Data Science",
            Self::ProductManager => "Product Manager",
            Self::Devops => "DevOps",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Frontend => "User interfaces, React, CSS, JavaScript",
            Self::Backend => "APIs, databases, server-side logic",
            Self::Fullstack => "Full-stack development, both frontend and backend",
            Self::DataScience => "Machine learning, data analysis, Python",
            Self::ProductManager => "Product strategy, user research, roadmaps",
            Self::Devops => "CI/CD, infrastructure, deployment, monitoring",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(value);
        Self::ordered()
            .into_iter()
            .find(|role| role.slug() == normalized)
            .ok_or_else(|| DomainError::UnknownRole(value.to_string()))
    }
}

/// Seniority band; selects the question pool and how strictly answers are graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Junior,
    MidLevel,
    Senior,
}

impl Difficulty {
    pub const fn ordered() -> [Self; 3] {
        [Self::Junior, Self::MidLevel, Self::Senior]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::MidLevel => "mid-level",
            Self::Senior => "senior",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::MidLevel => "Mid Level",
            Self::Senior => "Senior",
        }
    }

    /// Harder levels are graded more strictly.
    pub const fn grading_multiplier(self) -> f64 {
        match self {
            Self::Junior => 1.2,
            Self::MidLevel => 1.0,
            Self::Senior => 0.8,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(value);
        Self::ordered()
            .into_iter()
            .find(|difficulty| difficulty.slug() == normalized)
            .ok_or_else(|| DomainError::UnknownDifficulty(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Technical,
    Behavioral,
    SystemDesign,
    Coding,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Behavioral => "Behavioral",
            Self::SystemDesign => "System Design",
            Self::Coding => "Coding",
        }
    }
}

/// Static fixture row; converted into an owned [`Question`] when a bank is built.
#[derive(Debug, Clone)]
pub struct QuestionTemplate {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub category: &'static str,
    pub expected_keywords: &'static [&'static str],
    pub sample_answer: Option<&'static str>,
}

impl QuestionTemplate {
    pub fn instantiate(&self, difficulty: Difficulty) -> Question {
        Question {
            id: self.id.to_string(),
            prompt: self.prompt.to_string(),
            kind: self.kind,
            category: self.category.to_string(),
            difficulty,
            expected_keywords: self
                .expected_keywords
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
            sample_answer: self.sample_answer.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub category: String,
    pub difficulty: Difficulty,
    /// Case-insensitive match terms, in grading order.
    pub expected_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_answer: Option<String>,
}

/// A graded response, owned by exactly one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question: Question,
    pub answer_text: String,
    pub submitted_at: DateTime<Utc>,
    pub score: f64,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("unknown role '{0}'")]
    UnknownRole(String),
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),
}

fn normalize_token(value: &str) -> String {
    value
        .trim()
        .to_ascii_lowercase()
        .replace(['_', ' '], "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roles_from_slugs_and_labels() {
        assert_eq!("data-science".parse::<Role>(), Ok(Role::DataScience));
        assert_eq!("Product Manager".parse::<Role>(), Ok(Role::ProductManager));
        assert_eq!(" DEVOPS ".parse::<Role>(), Ok(Role::Devops));
        assert_eq!(
            "designer".parse::<Role>(),
            Err(DomainError::UnknownRole("designer".to_string()))
        );
    }

    #[test]
    fn parses_difficulty_variants() {
        assert_eq!("mid_level".parse::<Difficulty>(), Ok(Difficulty::MidLevel));
        assert!("principal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn serde_names_match_slugs() {
        for role in Role::ordered() {
            let encoded = serde_json::to_string(&role).expect("role serializes");
            assert_eq!(encoded, format!("\"{}\"", role.slug()));
        }
        for difficulty in Difficulty::ordered() {
            let encoded = serde_json::to_string(&difficulty).expect("difficulty serializes");
            assert_eq!(encoded, format!("\"{}\"", difficulty.slug()));
        }
    }
}
