//! ngc - n-grams counter with coincidence statistics

use clap::Parser;
use ngc_cli::commands::CountArgs;
use std::process::ExitCode;

/// Count n-grams in text files or standard input
#[derive(Debug, Parser)]
#[command(name = "ngc", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    count: CountArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.count.execute() {
        Ok(status) if status.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("ngc: {error:#}");
            ExitCode::FAILURE
        }
    }
}
