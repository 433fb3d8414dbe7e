//! Companion CLI entry point.

use clap::Parser;
use companion::cli::{self, Cli, Commands, EXIT_ERROR};
use companion::logging;

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let outcome = match cli.command {
        Commands::Analyze(args) => cli::run_analyze(&args),
        Commands::Languages => cli::run_languages(),
        Commands::Init(args) => cli::run_init(&args),
    };

    let exit_code = match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
