//! SIGNAL LOST texture generator - command-line entry point.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use signal_lost_cli::commands;

mod cli_args;

use cli_args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = match cli.from_albedo.as_deref() {
        Some(path) => commands::derive::run(path, &cli.output, cli.strength, cli.json),
        None => commands::generate::GenerateArgs::from_cli(
            &cli.material,
            cli.size,
            cli.static_size,
            cli.seed,
            &cli.resampler,
            cli.parallel,
        )
        .and_then(|args| commands::generate::run(&args, &cli.output, cli.json)),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}
