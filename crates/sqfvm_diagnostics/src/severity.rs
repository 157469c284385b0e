//! Diagnostic severity levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a diagnostic message.
///
/// Ordered from least severe (`Trace`) to most severe (`Fatal`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order.
/// Every level owns an independent gate in the [`Logger`](crate::Logger).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fine-grained execution tracing.
    Trace,
    /// Chatty notices such as "returning a default value".
    Verbose,
    /// Informational output requested by a script.
    Info,
    /// An advisory problem; the stage continues.
    Warning,
    /// A problem that aborts the current unit of work.
    Error,
    /// A problem that aborts the whole run.
    Fatal,
}

impl Severity {
    /// All levels, from most to least severe.
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Verbose,
        Severity::Trace,
    ];

    /// Returns the bracketed display tag used by the console sink.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Fatal => "[FAT]",
            Severity::Error => "[ERR]",
            Severity::Warning => "[WRN]",
            Severity::Info => "[INF]",
            Severity::Verbose => "[VBS]",
            Severity::Trace => "[TRC]",
        }
    }

    /// Returns the lowercase name of this level.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Verbose => "verbose",
            Severity::Trace => "trace",
        }
    }

    /// Parses a lowercase level name.
    pub fn from_name(name: &str) -> Option<Self> {
        Severity::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Returns `true` if this severity is [`Fatal`](Severity::Fatal).
    pub fn is_fatal(self) -> bool {
        self == Severity::Fatal
    }

    /// Returns `true` if a stage receiving this severity should stop its current unit.
    pub fn is_abort_unit(self) -> bool {
        self >= Severity::Error
    }

    /// Slot of this level in a gate table.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Severity::Fatal > Severity::Error);
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert!(Severity::Info > Severity::Verbose);
        assert!(Severity::Verbose > Severity::Trace);
    }

    #[test]
    fn tags() {
        assert_eq!(Severity::Fatal.tag(), "[FAT]");
        assert_eq!(Severity::Error.tag(), "[ERR]");
        assert_eq!(Severity::Warning.tag(), "[WRN]");
        assert_eq!(Severity::Info.tag(), "[INF]");
        assert_eq!(Severity::Verbose.tag(), "[VBS]");
        assert_eq!(Severity::Trace.tag(), "[TRC]");
    }

    #[test]
    fn indices_are_distinct() {
        let mut seen = [false; 6];
        for level in Severity::ALL {
            assert!(!seen[level.index()]);
            seen[level.index()] = true;
        }
    }

    #[test]
    fn name_roundtrip() {
        for level in Severity::ALL {
            assert_eq!(Severity::from_name(level.name()), Some(level));
        }
        assert_eq!(Severity::from_name("loud"), None);
    }

    #[test]
    fn abort_classification() {
        assert!(Severity::Fatal.is_fatal());
        assert!(!Severity::Error.is_fatal());
        assert!(Severity::Error.is_abort_unit());
        assert!(!Severity::Warning.is_abort_unit());
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Severity::Verbose).unwrap();
        assert_eq!(json, "\"verbose\"");
        let back: Severity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(back, Severity::Warning);
    }
}
