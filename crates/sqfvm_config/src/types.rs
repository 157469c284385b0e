//! Configuration types deserialized from `sqfvm.toml`.

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};
use sqfvm_diagnostics::{Logger, Severity};

/// The top-level configuration parsed from `sqfvm.toml`.
///
/// Every section is optional; an empty file leaves every severity enabled.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Which severities reach the output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The `[logging]` section: which severity gates start open.
///
/// Applied in order: `level` first, then `enable`, then `disable`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Threshold: levels at or above are opened, levels below are closed.
    #[serde(default)]
    pub level: Option<Severity>,
    /// Levels to open explicitly (e.g. `"trace"` or `["trace", "verbose"]`).
    #[serde(default, deserialize_with = "deserialize_level_or_levels")]
    pub enable: Vec<Severity>,
    /// Levels to close explicitly.
    #[serde(default, deserialize_with = "deserialize_level_or_levels")]
    pub disable: Vec<Severity>,
}

impl LoggingConfig {
    /// Sets the gates of `logger` to match this configuration.
    pub fn apply(&self, logger: &Logger) {
        if let Some(level) = self.level {
            logger.set_threshold(level);
        }
        for level in &self.enable {
            logger.set_enabled(*level, true);
        }
        for level in &self.disable {
            logger.set_enabled(*level, false);
        }
    }

    /// Returns the levels listed in both `enable` and `disable`.
    pub fn conflicts(&self) -> Vec<Severity> {
        let mut conflicts: Vec<Severity> = self
            .enable
            .iter()
            .copied()
            .filter(|level| self.disable.contains(level))
            .collect();
        conflicts.sort();
        conflicts.dedup();
        conflicts
    }
}

/// Deserializes a field that can be either a single level name or a list of them.
///
/// Allows both `disable = "warning"` and `disable = ["warning", "info"]`.
fn deserialize_level_or_levels<'de, D>(deserializer: D) -> Result<Vec<Severity>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LevelOrLevels;

    impl<'de> Visitor<'de> for LevelOrLevels {
        type Value = Vec<Severity>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a severity name or a list of severity names")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Severity::from_name(v)
                .map(|level| vec![level])
                .ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut levels = Vec::new();
            while let Some(level) = seq.next_element::<Severity>()? {
                levels.push(level);
            }
            Ok(levels)
        }
    }

    deserializer.deserialize_any(LevelOrLevels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqfvm_diagnostics::CaptureSink;

    fn logger() -> Logger {
        Logger::new(CaptureSink::new())
    }

    #[test]
    fn default_keeps_every_gate_open() {
        let logger = logger();
        LoggingConfig::default().apply(&logger);
        assert_eq!(logger.enabled_levels(), Severity::ALL.to_vec());
    }

    #[test]
    fn threshold_then_enable_then_disable() {
        let config = LoggingConfig {
            level: Some(Severity::Warning),
            enable: vec![Severity::Trace],
            disable: vec![Severity::Error],
        };
        let logger = logger();
        config.apply(&logger);
        assert_eq!(
            logger.enabled_levels(),
            vec![Severity::Fatal, Severity::Warning, Severity::Trace]
        );
    }

    #[test]
    fn single_level_string_is_accepted() {
        let config: LoggingConfig = toml::from_str(r#"disable = "verbose""#).unwrap();
        assert_eq!(config.disable, vec![Severity::Verbose]);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let result: Result<LoggingConfig, _> = toml::from_str(r#"enable = "loud""#);
        assert!(result.is_err());
    }

    #[test]
    fn conflicts_are_reported_once() {
        let config = LoggingConfig {
            level: None,
            enable: vec![Severity::Info, Severity::Info, Severity::Trace],
            disable: vec![Severity::Info],
        };
        assert_eq!(config.conflicts(), vec![Severity::Info]);
    }
}
