//! `sqfvm-diag check-config`: show the severity gates a configuration produces.

use std::path::PathBuf;

use sqfvm_diagnostics::{CaptureSink, Logger, Severity};

use crate::settings;
use crate::CheckConfigArgs;

/// Runs the `sqfvm-diag check-config` command.
///
/// Loads the configuration, applies it together with `--quiet`/`--verbose`,
/// and prints one line per severity. Exits with 1 if the config is invalid.
pub fn run(args: &CheckConfigArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (path, logger) = resolve(args)?;

    match path {
        Some(ref path) => println!("config: {}", path.display()),
        None => println!("config: none found, using defaults"),
    }

    print!("{}", gate_table(&logger));
    Ok(0)
}

/// Loads the applicable config and resolves its gates on a logger.
///
/// Only the gates are read back, so the logger writes into a capture buffer.
fn resolve(
    args: &CheckConfigArgs,
) -> Result<(Option<PathBuf>, Logger), Box<dyn std::error::Error>> {
    let path = settings::resolve_config_path(args)?;
    let config = settings::load(path.as_deref())?;
    let logger = settings::build_logger(&config, args, CaptureSink::new());
    Ok((path, logger))
}

/// Formats the gate state of every severity, most severe first.
fn gate_table(logger: &Logger) -> String {
    Severity::ALL
        .into_iter()
        .map(|level| {
            let state = if logger.is_enabled(level) { "on" } else { "off" };
            format!("{} {:<8} {state}\n", level.tag(), level.name())
        })
        .collect()
}
