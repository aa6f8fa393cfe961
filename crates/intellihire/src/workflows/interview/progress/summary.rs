use super::super::domain::{Difficulty, Role};
use super::super::evaluation::round_to_tenth;
use super::super::session::InterviewSession;
use super::views::{DifficultyBreakdownEntry, ProgressStats, RoleBreakdownEntry};

const TREND_WINDOW: usize = 5;
const RECENT_LIMIT: usize = 10;

/// Running score total for one group, kept in first-encountered order.
#[derive(Debug, Clone, Copy)]
struct ScoreTally<K> {
    key: K,
    total: f64,
    count: usize,
}

impl<K> ScoreTally<K> {
    fn average(&self) -> f64 {
        self.total / self.count as f64
    }
}

fn tally_by<K, F>(sessions: &[InterviewSession], key_of: F) -> Vec<ScoreTally<K>>
where
    K: Copy + PartialEq,
    F: Fn(&InterviewSession) -> K,
{
    let mut tallies: Vec<ScoreTally<K>> = Vec::new();

    for session in sessions {
        let key = key_of(session);
        match tallies.iter_mut().find(|tally| tally.key == key) {
            Some(tally) => {
                tally.total += session.average_score;
                tally.count += 1;
            }
            None => tallies.push(ScoreTally {
                key,
                total: session.average_score,
                count: 1,
            }),
        }
    }

    tallies
}

fn mean_score(sessions: &[InterviewSession]) -> f64 {
    if sessions.is_empty() {
        return 0.0;
    }
    let total: f64 = sessions.iter().map(|session| session.average_score).sum();
    total / sessions.len() as f64
}

/// First group whose average beats every earlier one under `better`.
fn pick_extreme<K, F>(tallies: &[ScoreTally<K>], better: F) -> Option<K>
where
    K: Copy,
    F: Fn(f64, f64) -> bool,
{
    let mut best: Option<&ScoreTally<K>> = None;
    for tally in tallies {
        best = match best {
            Some(current) if !better(tally.average(), current.average()) => Some(current),
            _ => Some(tally),
        };
    }
    best.map(|tally| tally.key)
}

pub fn compute_stats(sessions: &[InterviewSession]) -> ProgressStats {
    if sessions.is_empty() {
        return ProgressStats::default();
    }

    let total_questions = sessions.iter().map(|session| session.answers.len()).sum();

    let role_tallies = tally_by(sessions, |session| session.role);
    let strongest_role = pick_extreme(&role_tallies, |candidate, best| candidate > best);
    let weakest_role = pick_extreme(&role_tallies, |candidate, best| candidate < best);

    let earliest = &sessions[..sessions.len().min(TREND_WINDOW)];
    let latest = &sessions[sessions.len().saturating_sub(TREND_WINDOW)..];
    let improvement = round_to_tenth(mean_score(latest) - mean_score(earliest));

    let recent_sessions = sessions.iter().rev().take(RECENT_LIMIT).cloned().collect();

    ProgressStats {
        total_sessions: sessions.len(),
        average_score: round_to_tenth(mean_score(sessions)),
        total_questions,
        strongest_role,
        weakest_role,
        improvement,
        recent_sessions,
    }
}

pub fn compute_difficulty_breakdown(sessions: &[InterviewSession]) -> Vec<DifficultyBreakdownEntry> {
    tally_by(sessions, |session| session.difficulty)
        .into_iter()
        .map(|tally: ScoreTally<Difficulty>| DifficultyBreakdownEntry {
            difficulty: tally.key,
            difficulty_label: tally.key.label(),
            average: round_to_tenth(tally.average()),
            count: tally.count,
        })
        .collect()
}

pub fn compute_role_breakdown(sessions: &[InterviewSession]) -> Vec<RoleBreakdownEntry> {
    tally_by(sessions, |session| session.role)
        .into_iter()
        .map(|tally: ScoreTally<Role>| RoleBreakdownEntry {
            role: tally.key,
            role_label: tally.key.label(),
            average: round_to_tenth(tally.average()),
            count: tally.count,
        })
        .collect()
}
