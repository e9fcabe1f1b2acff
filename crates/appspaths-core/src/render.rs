//! Rendering of a resolved [`PathConfig`] as an `apps_paths` document.

use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::resolver::PathConfig;

pub fn render(paths: &PathConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Toml => {
            toml::to_string_pretty(paths).context("failed to render apps paths as TOML")
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(paths).context("failed to render apps paths as JSON")
        }
    }
}
