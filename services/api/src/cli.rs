use crate::demo::{
    run_demo, run_evaluate, run_progress, run_questions, DemoArgs, EvaluateArgs, ProgressArgs,
    QuestionsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use intellihire::config::AppConfig;
use intellihire::error::AppError;
use intellihire::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "IntelliHire",
    about = "Practice technical interviews and track progress from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List the fixture questions for a role and difficulty
    Questions(QuestionsArgs),
    /// Grade a single answer against a question from the bank
    Evaluate(EvaluateArgs),
    /// Print the progress dashboard for the stored session history
    Progress(ProgressArgs),
    /// Run a scripted practice session end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Keep session history in memory instead of the configured file
    #[arg(long)]
    pub(crate) ephemeral: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(args, config).await,
        Command::Questions(args) => run_questions(args),
        Command::Evaluate(args) => run_evaluate(args, &config),
        Command::Progress(args) => run_progress(args, &config),
        Command::Demo(args) => run_demo(args, config).await,
    }
}
