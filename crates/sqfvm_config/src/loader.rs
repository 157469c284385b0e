//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::DiagnosticsConfig;
use std::path::Path;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "sqfvm.toml";

/// Loads and validates `sqfvm.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<DiagnosticsConfig, ConfigError> {
    load_config_file(&project_dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<DiagnosticsConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<DiagnosticsConfig, ConfigError> {
    let config: DiagnosticsConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Rejects levels that are enabled and disabled at the same time.
fn validate_config(config: &DiagnosticsConfig) -> Result<(), ConfigError> {
    if let Some(level) = config.logging.conflicts().first() {
        return Err(ConfigError::ValidationError(format!(
            "level '{level}' is both enabled and disabled"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqfvm_diagnostics::{CaptureSink, Logger, Severity};

    #[test]
    fn empty_config_is_valid() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, DiagnosticsConfig::default());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[logging]
level = "info"
enable = ["trace"]
disable = ["warning"]
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.logging.level, Some(Severity::Info));
        assert_eq!(config.logging.enable, vec![Severity::Trace]);
        assert_eq!(config.logging.disable, vec![Severity::Warning]);

        let logger = Logger::new(CaptureSink::new());
        config.logging.apply(&logger);
        assert_eq!(
            logger.enabled_levels(),
            vec![Severity::Fatal, Severity::Error, Severity::Info, Severity::Trace]
        );
    }

    #[test]
    fn conflicting_levels_error() {
        let toml = r#"
[logging]
enable = ["info"]
disable = "info"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("'info'"));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn unknown_level_is_a_parse_error() {
        let err = load_config_from_str("[logging]\nlevel = \"chatty\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[logging]\ndisable = [\"verbose\", \"trace\"]\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(
            config.logging.disable,
            vec![Severity::Verbose, Severity::Trace]
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
