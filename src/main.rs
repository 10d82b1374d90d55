mod cli;

use std::process::ExitCode;
use clap::Parser;
use libautojoin::{MergeStatus, RunReport, Runner};

fn main() -> ExitCode {
    let cli_args = cli::Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = Runner::new(cli_args.path.as_deref())
        .and_then(|runner| runner.run());

    match result {
        Ok(report) => {
            print_summary(&report);

            // convert u8 to ExitCode
            match report.exit_code() {
                Ok(_) => ExitCode::SUCCESS,
                Err(x) => ExitCode::from(x),
            }
        },
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        },
    }
}

fn print_summary(report: &RunReport) {
    for outcome in report.outcomes.iter() {
        match &outcome.status {
            MergeStatus::Merged => println!("Group {}: {}", outcome.number, outcome.output.display()),
            MergeStatus::Failed { code } => println!("Group {}: failed with code {}", outcome.number, code),
            MergeStatus::NotStarted { reason } => println!("Group {}: not merged, {}", outcome.number, reason),
        }
    }

    if !report.is_success() {
        eprintln!("{} of {} groups could not be merged", report.failed().count(), report.outcomes.len());
    }
}
