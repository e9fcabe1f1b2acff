//! `appspaths resolve` – resolve and print the apps paths.

use anyhow::Result;
use appspaths_core::config::{self, AppsPathsConfig, OutputFormat};
use appspaths_core::{render, resolver};
use std::path::Path;

/// Flag values win over the config file; the custom apps override comes from
/// the process environment. The config file is not touched when both flags
/// are given.
pub fn run_resolve(
    server_root: Option<String>,
    format: Option<OutputFormat>,
    config_file: Option<&Path>,
) -> Result<()> {
    let (server_root, format) = match (server_root, format) {
        (Some(server_root), Some(format)) => (server_root, format),
        (server_root, format) => {
            let cfg = match config_file {
                Some(path) => config::load_or_init_at(path)?,
                None => config::load_or_init()?,
            };
            tracing::debug!("loaded config: {:?}", cfg);
            effective(cfg, server_root, format)
        }
    };

    let paths = resolver::resolve_from_process_env(&server_root)?;
    let out = render::render(&paths, format)?;
    println!("{}", out.trim_end());
    Ok(())
}

/// Merge flags over the loaded config.
pub(crate) fn effective(
    cfg: AppsPathsConfig,
    server_root: Option<String>,
    format: Option<OutputFormat>,
) -> (String, OutputFormat) {
    (
        server_root.unwrap_or(cfg.server_root),
        format.unwrap_or(cfg.output_format),
    )
}
