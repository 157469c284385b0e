//! The capability components use to report diagnostics.

use crate::diagnostic::Diagnostic;
use crate::logger::Logger;

/// A borrowed handle on the run's [`Logger`].
///
/// Components receive an `Emitter` at construction and report through
/// [`emit`](Self::emit). The message is only rendered if its severity's gate
/// is open.
#[derive(Clone, Copy, Debug)]
pub struct Emitter<'l> {
    logger: &'l Logger,
}

impl<'l> Emitter<'l> {
    /// Binds an emitter to `logger`.
    pub fn new(logger: &'l Logger) -> Self {
        Self { logger }
    }

    /// Returns the bound logger.
    pub fn logger(&self) -> &'l Logger {
        self.logger
    }

    /// Renders `message` and forwards it to the sink if its severity is enabled.
    pub fn emit<D: Diagnostic + ?Sized>(&self, message: &D) {
        let severity = message.severity();
        if !self.logger.is_enabled(severity) {
            return;
        }
        self.logger.log(severity, &message.render());
    }
}
