//! Output formatting utilities for the CLI.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::env;

use crate::domain::models::setting::{CA_NAME, EJBCA_URL, KAFKA_HOST, KEY_LENGTH};
use crate::domain::models::{Config, Resolution, ResolvedSetting, ValueSource};

/// Command result that can render for humans or as JSON.
pub trait CommandOutput: Serialize {
    /// Human-readable rendering
    fn to_human(&self) -> String;
    /// Machine-readable rendering
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result to stdout in the requested mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Table formatter for configuration listings
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Formatter honouring `NO_COLOR` and dumb terminals.
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Formatter with explicit color and width settings.
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format the effective configuration, one row per field
    pub fn format_config(&self, resolution: &Resolution) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
        ]);

        for (field, value, key) in config_rows(&resolution.config) {
            let source = key
                .and_then(|key| resolution.setting(key))
                .map_or_else(|| "fixed".to_string(), |s| s.source.to_string());
            let source_cell = self.source_cell(&source);
            table.add_row(vec![Cell::new(field), Cell::new(value), source_cell]);
        }

        table.to_string()
    }

    /// Format every environment key with its default and effective value
    pub fn format_settings(&self, settings: &[&ResolvedSetting]) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Variable").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Default").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
        ]);

        for setting in settings {
            table.add_row(vec![
                Cell::new(setting.key),
                Cell::new(setting.kind.to_string()),
                Cell::new(setting.default),
                Cell::new(&setting.value),
                self.source_cell(&setting.source.to_string()),
            ]);
        }

        table.to_string()
    }

    fn source_cell(&self, source: &str) -> Cell {
        if !self.use_colors {
            return Cell::new(source);
        }
        let color = if source == ValueSource::Environment.to_string() {
            Color::Yellow
        } else if source == "fixed" {
            Color::DarkGrey
        } else {
            Color::Green
        };
        Cell::new(source).fg(color)
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// `(field, value, environment key)`; paths have no key.
fn config_rows(config: &Config) -> Vec<(&'static str, String, Option<&'static str>)> {
    vec![
        ("api_url", config.api_url().to_string(), Some(EJBCA_URL.key)),
        ("ca_name", config.ca_name().to_string(), Some(CA_NAME.key)),
        ("key_length", config.key_length().to_string(), Some(KEY_LENGTH.key)),
        ("broker_host", config.broker_host().to_string(), Some(KAFKA_HOST.key)),
        ("acl_file_path", config.acl_file_path().to_string(), None),
        ("certs_dir", config.certs_dir().to_string(), None),
    ]
}

fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}
