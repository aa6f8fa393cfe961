use serde::Serialize;

use super::super::domain::{Difficulty, Role};
use super::super::session::InterviewSession;

/// Dashboard headline numbers over the whole session history.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressStats {
    pub total_sessions: usize,
    pub average_score: f64,
    pub total_questions: usize,
    pub strongest_role: Option<Role>,
    pub weakest_role: Option<Role>,
    /// Mean of the latest five sessions minus the mean of the earliest five.
    pub improvement: f64,
    /// Up to ten sessions, most recent first.
    pub recent_sessions: Vec<InterviewSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultyBreakdownEntry {
    pub difficulty: Difficulty,
    pub difficulty_label: &'static str,
    pub average: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleBreakdownEntry {
    pub role: Role,
    pub role_label: &'static str,
    pub average: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressDashboard {
    pub stats: ProgressStats,
    pub difficulty_breakdown: Vec<DifficultyBreakdownEntry>,
    pub role_breakdown: Vec<RoleBreakdownEntry>,
}

impl ProgressDashboard {
    pub fn from_sessions(sessions: &[InterviewSession]) -> Self {
        Self {
            stats: super::compute_stats(sessions),
            difficulty_breakdown: super::compute_difficulty_breakdown(sessions),
            role_breakdown: super::compute_role_breakdown(sessions),
        }
    }
}
