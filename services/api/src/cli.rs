use crate::demo::{run_analysis, run_catalog, run_demo, AnalysisArgs, CatalogArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use deduction_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Behavioral Deduction Orchestrator",
    about = "Demonstrate and run the Behavioral Deduction Orchestrator from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (the default when no subcommand is given)
    Serve(ServeArgs),
    /// Score observed cues or browse the cue library without the server
    Observation {
        #[command(subcommand)]
        command: ObservationCommand,
    },
    /// Run an end-to-end CLI demo covering analysis and field-note import
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ObservationCommand {
    /// Analyze a set of observed cues and context tags
    Analyze(AnalysisArgs),
    /// List the cue library and accepted context tags
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Bind host, overriding `APP_HOST`
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Bind port, overriding `APP_PORT`
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    match Cli::parse().command {
        None => server::run(ServeArgs::default()).await,
        Some(Command::Serve(args)) => server::run(args).await,
        Some(Command::Observation {
            command: ObservationCommand::Analyze(args),
        }) => run_analysis(args),
        Some(Command::Observation {
            command: ObservationCommand::Catalog(args),
        }) => run_catalog(args),
        Some(Command::Demo(args)) => run_demo(args),
    }
}
