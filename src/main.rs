//! mqttrest CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use mqttrest::cli::{handle_error, Cli, Commands};
use mqttrest::infrastructure::config::{ConfigLoader, ProcessEnvironment};
use mqttrest::infrastructure::logging::LoggerImpl;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let env = ProcessEnvironment;

    let logging = match ConfigLoader::load_logging(&env).context("Invalid logging configuration") {
        Ok(logging) => logging,
        Err(err) => return handle_error(&err, cli.json),
    };
    if let Err(err) = LoggerImpl::init(&logging) {
        return handle_error(&err, cli.json);
    }

    // Resolved exactly once; every command borrows it.
    let resolution = match ConfigLoader::resolve(&env).context("Failed to resolve configuration") {
        Ok(resolution) => resolution,
        Err(err) => return handle_error(&err, cli.json),
    };

    let result = match &cli.command {
        Commands::Show(args) => mqttrest::cli::commands::show::execute(args, &resolution, cli.json),
        Commands::Check(args) => mqttrest::cli::commands::check::execute(args, &resolution, cli.json),
        Commands::Env(args) => mqttrest::cli::commands::env::execute(args, &resolution, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => handle_error(&err, cli.json),
    }
}
