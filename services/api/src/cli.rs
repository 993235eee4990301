use crate::demo::{run_demo, run_validate, DemoArgs, ValidateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_intake::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Job Application Intake",
    about = "Serve, check, and demonstrate the job application form from the command line",
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
    /// Validate an application form stored as JSON and print errors or the summary
    Validate(ValidateArgs),
    /// Walk a scripted applicant through the form: rejected submit, fixes, summary
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
        Command::Validate(args) => run_validate(args),
        Command::Demo(args) => run_demo(args),
    }
}
