use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Grading knobs that sit outside the heuristic itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Delay applied before grading, standing in for a remote grading call.
    pub simulated_latency_ms: u64,
    pub fallback: FallbackPolicy,
}

impl EvaluationConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// No latency and a fixed fallback score.
    pub fn immediate(fallback_score: u8) -> Self {
        Self {
            simulated_latency_ms: 0,
            fallback: FallbackPolicy::Fixed {
                score: fallback_score,
            },
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 2000,
            fallback: FallbackPolicy::Randomized,
        }
    }
}

/// Score handed out when a grader cannot finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Uniform draw from [`FallbackPolicy::RANDOM_RANGE`].
    Randomized,
    Fixed { score: u8 },
}

impl FallbackPolicy {
    pub const RANDOM_RANGE: RangeInclusive<u8> = 6..=9;

    pub fn draw_score(&self) -> u8 {
        match self {
            Self::Randomized => rand::thread_rng().gen_range(Self::RANDOM_RANGE),
            Self::Fixed { score } => *score,
        }
    }
}
