use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use naam_ai::error::AppError;

use crate::demo::{run_demo, run_predict, DemoArgs, PredictArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Naam Gender Predictor",
    about = "Predict the likely gender of personal names from the command line or over HTTP",
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
    /// Classify one or more names and print the structured results
    Predict(PredictArgs),
    /// Run a roster of sample predictions showcasing every rule stage
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
    /// Name database to serve lookups from (JSON object or CSV export)
    #[arg(long)]
    pub(crate) database: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Predict(args) => run_predict(args),
        Command::Demo(args) => run_demo(args),
    }
}
