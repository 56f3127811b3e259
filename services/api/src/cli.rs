use crate::demo::{run_check, run_demo, CheckArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use simple_ei::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EI Eligibility Calculator",
    about = "Estimate EI eligibility from a postal code and hours worked, or serve the calculator over HTTP",
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
    /// Run a one-shot eligibility check against the bundled region directory
    Check(CheckArgs),
    /// Walk through a canned eligibility scenario and print the outcome
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Demo(args) => run_demo(args),
    }
}
