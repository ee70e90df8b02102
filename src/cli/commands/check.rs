//! Implementation of the `mqttrest check` command.
//!
//! Resolution failures never reach this command: they are reported by the
//! entry point before dispatch, with a non-zero exit status.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Resolution;

/// Arguments of `mqttrest check`
#[derive(Args, Debug, Default)]
pub struct CheckArgs {}

/// Outcome of `check`
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// Always true; failures exit before reaching the command
    pub valid: bool,
    /// Keys taken from the environment
    pub overridden: Vec<String>,
}

impl CheckOutput {
    /// Summarize a successful resolution.
    pub fn from_resolution(resolution: &Resolution) -> Self {
        Self {
            valid: true,
            overridden: resolution.overridden().map(|s| s.key.to_string()).collect(),
        }
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        if self.overridden.is_empty() {
            return "Configuration is valid (all defaults)".to_string();
        }
        let mut lines = vec![format!(
            "Configuration is valid ({} setting(s) from environment)",
            self.overridden.len()
        )];
        for key in &self.overridden {
            lines.push(format!("  - {key}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Report that the configuration resolved.
pub fn execute(_args: &CheckArgs, resolution: &Resolution, json_mode: bool) -> Result<()> {
    output(&CheckOutput::from_resolution(resolution), json_mode);
    Ok(())
}
