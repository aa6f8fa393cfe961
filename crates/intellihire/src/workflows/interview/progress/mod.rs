mod summary;
pub mod views;

pub use summary::{compute_difficulty_breakdown, compute_role_breakdown, compute_stats};
pub use views::{DifficultyBreakdownEntry, ProgressDashboard, ProgressStats, RoleBreakdownEntry};
