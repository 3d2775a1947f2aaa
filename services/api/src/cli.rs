use crate::report::{run_analyze, run_numerology, AnalyzeArgs, NumerologyArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use name_fortune::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Name Fortune",
    about = "Score Chinese names with five grids, numerology and three talents",
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
    /// Analyze a full name and print the fortune report
    Analyze(AnalyzeArgs),
    /// Look up one entry of the 81-number numerology table
    Numerology(NumerologyArgs),
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
        Command::Analyze(args) => run_analyze(args),
        Command::Numerology(args) => run_numerology(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use name_fortune::fortune::AnalysisDepth;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["name-fortune-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn analyze_accepts_depth_and_aspect_list() {
        let cli = Cli::try_parse_from([
            "name-fortune-api",
            "analyze",
            "李明",
            "--depth",
            "basic",
            "--aspects",
            "career,wealth",
            "--no-advice",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.name, "李明");
                assert_eq!(args.depth, AnalysisDepth::Basic);
                assert_eq!(args.aspects, vec!["career", "wealth"]);
                assert!(args.no_advice);
                assert!(!args.no_predictions);
            }
            other => panic!("expected analyze command, got {other:?}"),
        }
    }

    #[test]
    fn analyze_rejects_unknown_depth() {
        let result = Cli::try_parse_from(["name-fortune-api", "analyze", "李明", "--depth", "deep"]);
        assert!(result.is_err());
    }

    #[test]
    fn numerology_parses_number() {
        let cli = Cli::try_parse_from(["name-fortune-api", "numerology", "24", "--json"])
            .expect("parses");
        match cli.command {
            Some(Command::Numerology(args)) => {
                assert_eq!(args.number, 24);
                assert!(args.json);
            }
            other => panic!("expected numerology command, got {other:?}"),
        }
    }
}
