//! `docuframe` - component documentation renderer for design-tool
//! template scenes.

use clap::Parser;

use docuframe::cli::args::Cli;
use docuframe::cli::commands;
use docuframe::error::ExitCode;
use docuframe::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format.into(), cli.verbose, cli.color);
    }

    match commands::dispatch(cli).await {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
