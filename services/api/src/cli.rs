use clap::{Args, Parser, Subcommand};
use vbar_assessment::error::AppError;

use crate::demo::{print_questionnaire, run_demo, DemoArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "VBAR Assessment Service",
    about = "Score a working relationship against the VBAR indicator questionnaire",
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
    /// Print the questionnaire categories, questions, and weights
    Questionnaire,
    /// Run a scripted end-to-end assessment from the command line
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
        Command::Questionnaire => {
            print_questionnaire();
            Ok(())
        }
        Command::Demo(args) => run_demo(args),
    }
}
