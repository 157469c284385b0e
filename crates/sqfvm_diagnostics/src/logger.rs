//! Per-severity gates in front of a [`LogSink`].

use crate::severity::Severity;
use crate::sink::{ConsoleSink, LogSink};
use std::cell::Cell;
use std::fmt;

/// Holds one on/off gate per [`Severity`] and the sink that receives output.
///
/// All gates start open. Gates are toggled through `&self`, so a single
/// logger can be shared by reference between every component of a run. The
/// state is plain [`Cell`]s, which makes `Logger` `!Sync`.
pub struct Logger {
    gates: [Cell<bool>; 6],
    sink: Box<dyn LogSink>,
}

impl Logger {
    /// Creates a logger writing to `sink` with every gate open.
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            gates: std::array::from_fn(|_| Cell::new(true)),
            sink: Box::new(sink),
        }
    }

    /// Creates a logger writing to standard output.
    pub fn console() -> Self {
        Self::new(ConsoleSink)
    }

    /// Returns whether diagnostics of `level` pass the gate.
    pub fn is_enabled(&self, level: Severity) -> bool {
        self.gates[level.index()].get()
    }

    /// Opens or closes the gate for `level`. Other levels are unaffected.
    pub fn set_enabled(&self, level: Severity, enabled: bool) {
        self.gates[level.index()].set(enabled);
    }

    /// Opens every level at or above `threshold` and closes the rest.
    pub fn set_threshold(&self, threshold: Severity) {
        for level in Severity::ALL {
            self.set_enabled(level, level >= threshold);
        }
    }

    /// Returns the levels whose gate is currently open, most severe first.
    pub fn enabled_levels(&self) -> Vec<Severity> {
        Severity::ALL
            .into_iter()
            .filter(|level| self.is_enabled(*level))
            .collect()
    }

    /// Writes `text` to the sink.
    ///
    /// This does not consult the gate; filtering happens in
    /// [`Emitter::emit`](crate::Emitter::emit).
    pub fn log(&self, level: Severity, text: &str) {
        self.sink.write(level, text);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::console()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.enabled_levels())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CaptureSink;

    #[test]
    fn all_gates_start_open() {
        let logger = Logger::new(CaptureSink::new());
        for level in Severity::ALL {
            assert!(logger.is_enabled(level));
        }
    }

    #[test]
    fn set_enabled_touches_one_level() {
        let logger = Logger::new(CaptureSink::new());
        for level in Severity::ALL {
            logger.set_enabled(level, false);
            for other in Severity::ALL {
                assert_eq!(logger.is_enabled(other), other != level, "{level} / {other}");
            }
            logger.set_enabled(level, true);
        }
    }

    #[test]
    fn latest_setting_wins() {
        let logger = Logger::new(CaptureSink::new());
        logger.set_enabled(Severity::Trace, false);
        logger.set_enabled(Severity::Trace, false);
        logger.set_enabled(Severity::Trace, true);
        assert!(logger.is_enabled(Severity::Trace));
    }

    #[test]
    fn threshold_closes_lower_levels() {
        let logger = Logger::new(CaptureSink::new());
        logger.set_threshold(Severity::Warning);
        assert_eq!(
            logger.enabled_levels(),
            vec![Severity::Fatal, Severity::Error, Severity::Warning]
        );
    }

    #[test]
    fn log_bypasses_gates() {
        let sink = CaptureSink::new();
        let logger = Logger::new(sink.clone());
        logger.set_enabled(Severity::Info, false);
        logger.log(Severity::Info, "raw");
        assert_eq!(sink.lines(), vec![(Severity::Info, "raw".to_string())]);
    }
}
