//! Interview practice engine.
//!
//! Questions are drawn from a static bank keyed by role and difficulty, answers are graded by a
//! keyword-and-length heuristic, and sealed sessions feed the progress dashboard.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
