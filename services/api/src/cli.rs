use crate::demo::{run_directory, run_lookup, LookupArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use receptionist::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Receptionist Bot Service",
    about = "Run the receptionist bot integration service or try employee lookups from the command line",
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
    /// Resolve an employee the same way the function-call endpoint does
    Lookup(LookupArgs),
    /// Print the employee directory
    Directory,
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
        Command::Lookup(args) => run_lookup(args),
        Command::Directory => {
            run_directory();
            Ok(())
        }
    }
}
