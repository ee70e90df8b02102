//! Implementation of the `mqttrest env` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Resolution, ResolvedSetting};

/// Arguments of `mqttrest env`
#[derive(Args, Debug, Default)]
pub struct EnvArgs {
    /// Only list variables set in the environment
    #[arg(long)]
    pub overridden: bool,
}

/// Settings listed by `env`
#[derive(Debug, Serialize)]
pub struct EnvOutput<'a> {
    /// Selected settings, in catalogue order
    pub settings: Vec<&'a ResolvedSetting>,
}

impl<'a> EnvOutput<'a> {
    /// Select the settings to list.
    pub fn new(args: &EnvArgs, resolution: &'a Resolution) -> Self {
        let settings = resolution
            .settings
            .iter()
            .filter(|s| !args.overridden || s.is_overridden())
            .collect();
        Self { settings }
    }
}

impl CommandOutput for EnvOutput<'_> {
    fn to_human(&self) -> String {
        if self.settings.is_empty() {
            return "No settings overridden from environment".to_string();
        }
        TableFormatter::new().format_settings(&self.settings)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.settings).unwrap_or_default()
    }
}

/// List configuration variables.
pub fn execute(args: &EnvArgs, resolution: &Resolution, json_mode: bool) -> Result<()> {
    output(&EnvOutput::new(args, resolution), json_mode);
    Ok(())
}
