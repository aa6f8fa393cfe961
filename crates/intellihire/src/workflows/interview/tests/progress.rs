use super::common::*;
use crate::workflows::interview::domain::{Difficulty, Role};
use crate::workflows::interview::progress::{
    compute_difficulty_breakdown, compute_role_breakdown, compute_stats, ProgressDashboard,
    ProgressStats,
};

#[test]
fn empty_history_yields_zeroed_stats() {
    let stats = compute_stats(&[]);

    assert_eq!(stats, ProgressStats::default());
    assert_eq!(stats.total_sessions, 0);
    assert_eq!(stats.average_score, 0.0);
    assert!(stats.strongest_role.is_none());
    assert!(stats.weakest_role.is_none());
    assert_eq!(stats.improvement, 0.0);
    assert!(stats.recent_sessions.is_empty());
    assert!(compute_difficulty_breakdown(&[]).is_empty());
}

#[test]
fn average_score_is_the_mean_of_session_averages() {
    let sessions = vec![
        scored_session(0, Role::Frontend, 6.0),
        scored_session(1, Role::Frontend, 8.0),
        scored_session(2, Role::Frontend, 10.0),
    ];

    let stats = compute_stats(&sessions);

    assert_eq!(stats.total_sessions, 3);
    assert_eq!(stats.average_score, 8.0);
}

#[test]
fn average_score_rounds_to_one_decimal() {
    let sessions = vec![
        scored_session(0, Role::Backend, 7.0),
        scored_session(1, Role::Backend, 7.0),
        scored_session(2, Role::Backend, 8.0),
    ];

    assert_eq!(compute_stats(&sessions).average_score, 7.3);
}

#[test]
fn total_questions_counts_every_answer() {
    let sessions = vec![
        sealed_session(0, Role::Devops, Difficulty::Junior, 6.0, &[6.0, 6.0, 6.0]),
        sealed_session(1, Role::Devops, Difficulty::Junior, 7.0, &[7.0, 7.0]),
    ];

    assert_eq!(compute_stats(&sessions).total_questions, 5);
}

#[test]
fn strongest_and_weakest_roles_follow_group_averages() {
    let sessions = vec![
        scored_session(0, Role::Frontend, 9.0),
        scored_session(1, Role::Backend, 5.0),
        scored_session(2, Role::Frontend, 9.0),
    ];

    let stats = compute_stats(&sessions);

    assert_eq!(stats.strongest_role, Some(Role::Frontend));
    assert_eq!(stats.weakest_role, Some(Role::Backend));
}

#[test]
fn role_ties_resolve_to_the_first_encountered_role() {
    let sessions = vec![
        scored_session(0, Role::DataScience, 7.0),
        scored_session(1, Role::ProductManager, 7.0),
        scored_session(2, Role::Devops, 7.0),
    ];

    let stats = compute_stats(&sessions);

    assert_eq!(stats.strongest_role, Some(Role::DataScience));
    assert_eq!(stats.weakest_role, Some(Role::DataScience));
}

#[test]
fn improvement_compares_latest_five_with_earliest_five() {
    let mut sessions: Vec<_> = (0..5)
        .map(|index| scored_session(index, Role::Fullstack, 5.0))
        .collect();
    sessions.push(scored_session(5, Role::Fullstack, 6.0));
    sessions.push(scored_session(6, Role::Fullstack, 6.0));
    sessions.extend((7..12).map(|index| scored_session(index, Role::Fullstack, 8.0)));

    let stats = compute_stats(&sessions);

    assert_eq!(stats.improvement, 3.0);
}

#[test]
fn improvement_windows_overlap_for_short_histories() {
    let sessions = vec![
        scored_session(0, Role::Backend, 4.0),
        scored_session(1, Role::Backend, 6.0),
        scored_session(2, Role::Backend, 8.0),
    ];

    assert_eq!(compute_stats(&sessions).improvement, 0.0);

    let mut longer = sessions.clone();
    longer.extend((3..7).map(|index| scored_session(index, Role::Backend, 9.0)));
    // earliest five: 4, 6, 8, 9, 9 -> 7.2; latest five: 8, 9, 9, 9, 9 -> 8.8
    assert_eq!(compute_stats(&longer).improvement, 1.6);
}

#[test]
fn regression_reports_negative_improvement() {
    let mut sessions: Vec<_> = (0..5)
        .map(|index| scored_session(index, Role::Frontend, 9.0))
        .collect();
    sessions.extend((5..10).map(|index| scored_session(index, Role::Frontend, 6.5)));

    assert_eq!(compute_stats(&sessions).improvement, -2.5);
}

#[test]
fn recent_sessions_are_the_last_ten_newest_first() {
    let sessions: Vec<_> = (0..12)
        .map(|index| scored_session(index, Role::Frontend, 7.0))
        .collect();

    let stats = compute_stats(&sessions);

    let ids: Vec<_> = stats
        .recent_sessions
        .iter()
        .map(|session| session.id.0.as_str())
        .collect();
    assert_eq!(ids.len(), 10);
    assert_eq!(ids.first(), Some(&"session-11"));
    assert_eq!(ids.last(), Some(&"session-2"));
}

#[test]
fn difficulty_breakdown_groups_in_first_encountered_order() {
    let sessions = vec![
        sealed_session(0, Role::Frontend, Difficulty::Senior, 7.0, &[7.0]),
        sealed_session(1, Role::Backend, Difficulty::Junior, 6.0, &[6.0]),
        sealed_session(2, Role::Frontend, Difficulty::Senior, 8.0, &[8.0]),
        sealed_session(3, Role::Frontend, Difficulty::Senior, 8.0, &[8.0]),
    ];

    let breakdown = compute_difficulty_breakdown(&sessions);

    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].difficulty, Difficulty::Senior);
    assert_eq!(breakdown[0].average, 7.7);
    assert_eq!(breakdown[0].count, 3);
    assert_eq!(breakdown[1].difficulty, Difficulty::Junior);
    assert_eq!(breakdown[1].average, 6.0);
    assert_eq!(breakdown[1].count, 1);
}

#[test]
fn role_breakdown_and_dashboard_share_the_same_groups() {
    let sessions = vec![
        scored_session(0, Role::Devops, 6.0),
        scored_session(1, Role::Frontend, 9.0),
        scored_session(2, Role::Devops, 7.0),
    ];

    let roles = compute_role_breakdown(&sessions);
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0].role, Role::Devops);
    assert_eq!(roles[0].average, 6.5);
    assert_eq!(roles[0].role_label, "DevOps");
    assert_eq!(roles[1].role, Role::Frontend);

    let dashboard = ProgressDashboard::from_sessions(&sessions);
    assert_eq!(dashboard.role_breakdown, roles);
    assert_eq!(dashboard.stats.total_sessions, 3);
    assert_eq!(dashboard.difficulty_breakdown.len(), 1);
}
