mod analyze;
mod cli;
mod discover;
mod error;
mod progress;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            log_dir,
            report_dir,
            window,
            verbose,
        } => analyze::execute(log_dir, report_dir, window, verbose),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
