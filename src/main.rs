mod cli;
mod command;
mod condition;
mod data;
mod error;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use command::Command;

const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    ExitCode::from(report(run(&cli), &mut io::stderr()))
}

fn run(cli: &Cli) -> Result<()> {
    // Conditions are parsed before the file is touched.
    let op = Command::try_from(cli)?;
    let mut out = io::stdout().lock();
    command::execute(&cli.filename, &op, &mut out)
}

/// Map the outcome to a process exit code, writing one diagnostic line on
/// failure.
fn report<W: Write>(result: Result<()>, err_out: &mut W) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let message = format!("{err:#}").replace('\n', " ");
            // Nothing more can be done if stderr itself is gone.
            let _ = writeln!(err_out, "Ошибка: {message}");
            EXIT_FAILURE
        }
    }
}
