//! Command-line interface for inspecting the deployment configuration.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use commands::check::CheckArgs;
use commands::env::EnvArgs;
use commands::show::ShowArgs;

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "mqttrest")]
#[command(about = "Resolve and inspect the MQTT REST service configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved configuration
    Show(ShowArgs),

    /// Resolve and validate the configuration
    Check(CheckArgs),

    /// List configuration variables, defaults and current values
    Env(EnvArgs),
}

/// Report a fatal error and return the failure exit code.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ExitCode {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    ExitCode::FAILURE
}
