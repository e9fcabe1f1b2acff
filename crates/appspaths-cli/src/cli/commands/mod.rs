//! CLI command handlers, one per file.

mod completions;
mod config_path;
mod resolve;

pub use completions::run_completions;
pub use config_path::run_config_path;
#[cfg(test)]
pub(crate) use resolve::effective;
pub use resolve::run_resolve;
