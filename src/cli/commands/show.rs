//! Implementation of the `mqttrest show` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Config, Resolution};

/// Arguments of `mqttrest show`
#[derive(Args, Debug, Default)]
pub struct ShowArgs {}

/// Resolved configuration as printed by `show`
#[derive(Debug, Serialize)]
pub struct ShowOutput<'a> {
    #[serde(skip)]
    resolution: &'a Resolution,
    /// Effective configuration
    pub config: &'a Config,
}

impl<'a> ShowOutput<'a> {
    /// Wrap a resolution for printing.
    pub const fn new(resolution: &'a Resolution) -> Self {
        Self {
            resolution,
            config: &resolution.config,
        }
    }
}

impl CommandOutput for ShowOutput<'_> {
    fn to_human(&self) -> String {
        TableFormatter::new().format_config(self.resolution)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.config).unwrap_or_default()
    }
}

/// Print the resolved configuration.
pub fn execute(_args: &ShowArgs, resolution: &Resolution, json_mode: bool) -> Result<()> {
    output(&ShowOutput::new(resolution), json_mode);
    Ok(())
}
