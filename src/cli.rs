use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tradescore::error::AppError;

use crate::demo::{run_demo, run_strategy_check, run_strategy_score, DemoArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Trade Scorecard",
    about = "Build, validate, and score weighted trade-entry checklists",
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
    /// Work with strategy definition files without starting the server
    Strategy {
        #[command(subcommand)]
        command: StrategyCommand,
    },
    /// Run the built-in sample strategy end to end
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum StrategyCommand {
    /// Check a strategy definition against the 100-point save gate
    Check(CheckArgs),
    /// Score a strategy definition against a selections file
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Strategy definition (JSON) to check
    #[arg(long)]
    pub(crate) file: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Strategy definition (JSON) to score
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Selections map (JSON) recorded for the session; omit for a blank session
    #[arg(long)]
    pub(crate) selections: Option<PathBuf>,
    /// Print every item with its recorded selection
    #[arg(long)]
    pub(crate) list_items: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Strategy {
            command: StrategyCommand::Check(args),
        } => run_strategy_check(args),
        Command::Strategy {
            command: StrategyCommand::Score(args),
        } => run_strategy_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
