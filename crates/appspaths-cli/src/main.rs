use appspaths_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        match logging::init_logging_stderr() {
            Ok(()) => tracing::warn!("file logging unavailable, logging to stderr: {:#}", err),
            Err(stderr_err) => eprintln!(
                "appspaths: logging disabled: {:#} (file logging: {:#})",
                stderr_err, err
            ),
        }
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("appspaths error: {:#}", err);
        std::process::exit(1);
    }
}
