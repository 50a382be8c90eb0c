use anyhow::Result;
use clap::Parser;
use mscmap::cli::{Cli, Commands};
use mscmap::commands::{self, ShowConfig};
use mscmap::errors::Error;
use mscmap::observability::init_tracing;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Show {
            source,
            minimum,
            sort,
            format,
            output,
            top,
            config,
            data_dir,
            plain,
            verbosity: _,
        } => commands::handle_show(ShowConfig {
            source,
            minimum,
            sort,
            format,
            output,
            top,
            config,
            data_dir,
            plain,
        }),
        Commands::Methods => commands::list_methods(),
        Commands::Init { force } => commands::init_config(force),
    }
}

// Parameter errors exit with 2, everything else with 1.
fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<Error>() {
        Some(e) => {
            eprintln!("error[{}]: {:#}", e.code(), err);
            if e.is_user_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
        None => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
