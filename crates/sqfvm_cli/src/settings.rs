//! Config discovery and logger setup shared by CLI commands.

use std::path::{Path, PathBuf};

use sqfvm_config::{DiagnosticsConfig, CONFIG_FILE_NAME};
use sqfvm_diagnostics::{LogSink, Logger, Severity};

use crate::CheckConfigArgs;

/// Walks up from `start` looking for the nearest `sqfvm.toml`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolves which config file applies, if any.
///
/// If `--config` names a file, that file is used; if it names a directory,
/// its `sqfvm.toml` is. Otherwise walks up from the current directory.
pub fn resolve_config_path(
    args: &CheckConfigArgs,
) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    match args.config {
        Some(ref config_path) => {
            let p = PathBuf::from(config_path);
            if p.is_dir() {
                Ok(Some(p.join(CONFIG_FILE_NAME)))
            } else {
                Ok(Some(p))
            }
        }
        None => Ok(find_config_file(&std::env::current_dir()?)),
    }
}

/// Loads the config at `path`, or the defaults when there is none.
pub fn load(path: Option<&Path>) -> Result<DiagnosticsConfig, sqfvm_config::ConfigError> {
    match path {
        Some(path) => sqfvm_config::load_config_file(path),
        None => Ok(DiagnosticsConfig::default()),
    }
}

/// Builds a logger with the config's gates, then applies `--quiet`/`--verbose`.
pub fn build_logger(
    config: &DiagnosticsConfig,
    args: &CheckConfigArgs,
    sink: impl LogSink + 'static,
) -> Logger {
    let logger = Logger::new(sink);
    config.logging.apply(&logger);
    if args.quiet {
        logger.set_threshold(Severity::Error);
    } else if args.verbose {
        logger.set_threshold(Severity::Trace);
    }
    logger
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqfvm_diagnostics::CaptureSink;
    use std::fs;
    use tempfile::TempDir;

    fn args(config: Option<&Path>) -> CheckConfigArgs {
        CheckConfigArgs {
            config: config.map(|p| p.to_string_lossy().into_owned()),
            ..CheckConfigArgs::default()
        }
    }

    #[test]
    fn find_config_in_parent() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "").unwrap();
        let sub = tmp.path().join("addons").join("main");
        fs::create_dir_all(&sub).unwrap();
        assert_eq!(
            find_config_file(&sub),
            Some(tmp.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn config_flag_accepts_directory() {
        let tmp = TempDir::new().unwrap();
        let path = resolve_config_path(&args(Some(tmp.path()))).unwrap();
        assert_eq!(path, Some(tmp.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn config_flag_accepts_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("custom.toml");
        fs::write(&file, "[logging]\nlevel = \"error\"\n").unwrap();
        let path = resolve_config_path(&args(Some(&file))).unwrap();
        assert_eq!(path.as_deref(), Some(file.as_path()));
        let config = load(path.as_deref()).unwrap();
        assert_eq!(config.logging.level, Some(Severity::Error));
    }

    #[test]
    fn no_config_means_defaults() {
        let config = load(None).unwrap();
        let logger = build_logger(&config, &args(None), CaptureSink::new());
        assert_eq!(logger.enabled_levels(), Severity::ALL.to_vec());
    }

    #[test]
    fn quiet_overrides_config() {
        let config = sqfvm_config::load_config_from_str("[logging]\nlevel = \"trace\"\n").unwrap();
        let quiet = CheckConfigArgs {
            quiet: true,
            ..args(None)
        };
        let logger = build_logger(&config, &quiet, CaptureSink::new());
        assert_eq!(
            logger.enabled_levels(),
            vec![Severity::Fatal, Severity::Error]
        );
    }
}
