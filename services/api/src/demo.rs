use crate::infra::{ephemeral_service, file_backed_service};
use clap::Args;
use intellihire::config::AppConfig;
use intellihire::error::AppError;
use intellihire::workflows::interview::{
    evaluate_answer, AnswerGrader, Difficulty, EvaluationResult, InterviewPracticeService,
    InterviewSession, JsonFileHistoryStore, ProgressDashboard, Question, QuestionBank, Role,
    SessionHistoryStore,
};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Role track, e.g. frontend, backend, data-science
    #[arg(long)]
    pub(crate) role: Role,
    /// Difficulty band: junior, mid-level, or senior
    #[arg(long)]
    pub(crate) difficulty: Difficulty,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Question id from the bank, e.g. fe-jr-1
    #[arg(long)]
    pub(crate) question_id: String,
    /// Answer text to grade
    #[arg(long)]
    pub(crate) answer: String,
    /// Grade at this difficulty instead of the question's own
    #[arg(long)]
    pub(crate) difficulty: Option<Difficulty>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ProgressArgs {
    /// History file to summarise (defaults to APP_HISTORY_PATH)
    #[arg(long)]
    pub(crate) history: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Role track for the scripted session
    #[arg(long, default_value = "frontend")]
    pub(crate) role: Role,
    /// Difficulty band for the scripted session
    #[arg(long, default_value = "junior")]
    pub(crate) difficulty: Difficulty,
    /// Keep the finished session out of the history file
    #[arg(long)]
    pub(crate) skip_persist: bool,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let bank = QuestionBank::standard();
    let questions = bank.questions(args.role, args.difficulty);

    println!(
        "{} / {} ({} questions)",
        args.role.label(),
        args.difficulty.label(),
        questions.len()
    );
    for question in questions {
        render_question(question);
    }

    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs, config: &AppConfig) -> Result<(), AppError> {
    let service = ephemeral_service(&config.practice);
    let question = service.find_question(&args.question_id)?;
    let difficulty = args.difficulty.unwrap_or(question.difficulty);

    render_question(&question);
    let result = evaluate_answer(&question, &args.answer, difficulty);
    render_evaluation(&result);

    Ok(())
}

pub(crate) fn run_progress(args: ProgressArgs, config: &AppConfig) -> Result<(), AppError> {
    let path = args
        .history
        .unwrap_or_else(|| config.practice.history_path.clone());
    let sessions = load_history(&path);

    println!("Progress for {}", path.display());
    render_dashboard(&ProgressDashboard::from_sessions(&sessions));
    Ok(())
}

/// Unreadable history renders as an empty dashboard, same as the service does at startup.
fn load_history(path: &Path) -> Vec<InterviewSession> {
    match JsonFileHistoryStore::new(path).load() {
        Ok(sessions) => sessions,
        Err(err) => {
            warn!(error = %err, "session history unreadable, showing an empty dashboard");
            Vec::new()
        }
    }
}

pub(crate) async fn run_demo(args: DemoArgs, mut config: AppConfig) -> Result<(), AppError> {
    config.practice.evaluation_delay_ms = 0;

    if args.skip_persist {
        let service = ephemeral_service(&config.practice);
        run_scripted_session(&service, args.role, args.difficulty).await
    } else {
        let service = file_backed_service(&config.practice);
        run_scripted_session(&service, args.role, args.difficulty).await
    }
}

async fn run_scripted_session<S, G>(
    service: &InterviewPracticeService<S, G>,
    role: Role,
    difficulty: Difficulty,
) -> Result<(), AppError>
where
    S: SessionHistoryStore + 'static,
    G: AnswerGrader + 'static,
{
    println!("IntelliHire practice demo: {} / {}", role.label(), difficulty.label());

    let session = service.start_session(role, difficulty)?;
    for (index, question) in session.questions.iter().enumerate() {
        println!("\nQuestion {} of {}", index + 1, session.questions.len());
        render_question(question);

        let answer = scripted_answer(question);
        println!("  answer: {answer}");
        let submitted = service.submit_answer(&session.id, &answer).await?;
        render_evaluation(&submitted.evaluation);
    }

    let finished = service.finish_session(&session.id).await?;
    println!(
        "\nSession {} finished with an average of {:.1}/10",
        finished.session.id, finished.session.average_score
    );
    if !finished.persisted {
        println!("  (history could not be saved; see logs)");
    }

    render_dashboard(&service.dashboard());
    Ok(())
}

fn scripted_answer(question: &Question) -> String {
    question
        .sample_answer
        .clone()
        .unwrap_or_else(|| format!("I would focus on {}.", question.expected_keywords.join(", ")))
}

fn render_question(question: &Question) {
    println!(
        "- [{}] {} ({} / {})",
        question.id,
        question.prompt,
        question.kind.label(),
        question.category
    );
}

fn render_evaluation(result: &EvaluationResult) {
    let tier = result.tier();
    println!("  score: {:.1}/10 ({})", result.score, tier.headline());
    println!("  {}", result.feedback);
    if !result.strengths.is_empty() {
        println!("  strengths: {}", result.strengths.join("; "));
    }
    if !result.improvements.is_empty() {
        println!("  improvements: {}", result.improvements.join("; "));
    }
}

fn render_dashboard(dashboard: &ProgressDashboard) {
    let stats = &dashboard.stats;
    println!("\nSessions: {}", stats.total_sessions);
    println!("Questions answered: {}", stats.total_questions);
    println!("Average score: {:.1}", stats.average_score);
    println!("Improvement: {:+.1}", stats.improvement);
    if let Some(role) = stats.strongest_role {
        println!("Strongest role: {}", role.label());
    }
    if let Some(role) = stats.weakest_role {
        println!("Weakest role: {}", role.label());
    }

    if !dashboard.difficulty_breakdown.is_empty() {
        println!("\nBy difficulty");
        for entry in &dashboard.difficulty_breakdown {
            println!(
                "  {:<10} {:>4.1} over {} session(s)",
                entry.difficulty_label, entry.average, entry.count
            );
        }
    }

    if !dashboard.role_breakdown.is_empty() {
        println!("\nBy role");
        for entry in &dashboard.role_breakdown {
            println!(
                "  {:<18} {:>4.1} over {} session(s)",
                entry.role_label, entry.average, entry.count
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intellihire::config::{AppEnvironment, PracticeConfig, ServerConfig, TelemetryConfig};

    fn config_with_history(path: PathBuf) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            telemetry: TelemetryConfig {
                log_level: "warn".to_string(),
            },
            practice: PracticeConfig {
                history_path: path,
                evaluation_delay_ms: 0,
                fallback_score: Some(7),
            },
        }
    }

    #[test]
    fn corrupt_history_renders_an_empty_dashboard() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{ not json").expect("write garbage");

        assert!(load_history(&path).is_empty());

        let config = config_with_history(dir.path().join("unused.json"));
        let args = ProgressArgs { history: Some(path) };
        assert!(run_progress(args, &config).is_ok());
    }

    #[test]
    fn progress_defaults_to_the_configured_history() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_with_history(dir.path().join("missing.json"));

        assert!(run_progress(ProgressArgs::default(), &config).is_ok());
    }

    #[tokio::test]
    async fn skip_persist_demo_leaves_the_history_file_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("history.json");
        let args = DemoArgs {
            role: Role::Devops,
            difficulty: Difficulty::Junior,
            skip_persist: true,
        };

        run_demo(args, config_with_history(path.clone()))
            .await
            .expect("demo runs");

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn persisted_demo_appends_to_the_history_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("history.json");
        let args = DemoArgs {
            role: Role::Backend,
            difficulty: Difficulty::Senior,
            skip_persist: false,
        };

        run_demo(args, config_with_history(path.clone()))
            .await
            .expect("demo runs");

        assert_eq!(load_history(&path).len(), 1);
    }

    #[test]
    fn scripted_answers_prefer_the_sample() {
        let bank = QuestionBank::standard();
        let question = bank.find("fe-jr-1").expect("fixture question");

        let answer = scripted_answer(question);

        assert_eq!(Some(answer.as_str()), question.sample_answer.as_deref());
        let result = evaluate_answer(question, &answer, question.difficulty);
        assert!(result.score >= 3.0);
    }

    #[test]
    fn scripted_answers_fall_back_to_keywords() {
        let bank = QuestionBank::standard();
        let mut question = bank.find("be-jr-1").expect("fixture question").clone();
        question.sample_answer = None;

        let answer = scripted_answer(&question);
        let result = evaluate_answer(&question, &answer, question.difficulty);

        assert!(result.missed_keywords.is_empty());
    }
}
