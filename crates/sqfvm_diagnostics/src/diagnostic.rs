//! The [`Diagnostic`] trait and the located message type that implements it.

use crate::catalog::Payload;
use crate::code::DiagnosticCode;
use crate::kind::DiagnosticKind;
use crate::location::LocationInfo;
use crate::severity::Severity;
use std::fmt;

/// Anything that can be emitted through an [`Emitter`](crate::Emitter).
///
/// `severity()` and `code()` must not depend on the payload, and `render()`
/// must return the same text every time it is called on the same value.
pub trait Diagnostic {
    /// Fixed severity of this diagnostic.
    fn severity(&self) -> Severity;

    /// Fixed numeric code of this diagnostic.
    fn code(&self) -> DiagnosticCode;

    /// Produces the human-readable text, without the severity tag.
    fn render(&self) -> String;
}

/// A catalog diagnostic bound to the source position it was raised at.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagnosticMessage {
    /// Where the problem was detected.
    pub location: LocationInfo,
    /// The domain payload.
    pub payload: Payload,
}

impl DiagnosticMessage {
    /// Creates a message for `payload` at `location`.
    pub fn new(location: LocationInfo, payload: impl Into<Payload>) -> Self {
        Self {
            location,
            payload: payload.into(),
        }
    }

    /// Returns the catalog kind of the payload.
    pub fn kind(&self) -> DiagnosticKind {
        self.payload.kind()
    }
}

impl Diagnostic for DiagnosticMessage {
    fn severity(&self) -> Severity {
        self.kind().severity()
    }

    fn code(&self) -> DiagnosticCode {
        self.kind().code()
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.payload)
    }
}

impl<D: Diagnostic + ?Sized> Diagnostic for &D {
    fn severity(&self) -> Severity {
        (**self).severity()
    }

    fn code(&self) -> DiagnosticCode {
        (**self).code()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

impl<D: Diagnostic + ?Sized> Diagnostic for Box<D> {
    fn severity(&self) -> Severity {
        (**self).severity()
    }

    fn code(&self) -> DiagnosticCode {
        (**self).code()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArraySize, ParserDiagnostic, RuntimeDiagnostic};

    #[test]
    fn render_prefixes_location() {
        let msg = DiagnosticMessage::new(
            LocationInfo::new("test.sqf", 3, 7),
            RuntimeDiagnostic::VariableNotFound {
                variable: "_foo".to_string(),
            },
        );
        assert_eq!(msg.render(), "test.sqf:3:7: Variable '_foo' not found.");
        assert_eq!(msg.severity(), Severity::Warning);
        assert_eq!(msg.code().value(), 60_070);
    }

    #[test]
    fn severity_and_code_ignore_payload() {
        let small = DiagnosticMessage::new(
            LocationInfo::unknown(),
            RuntimeDiagnostic::ExpectedArraySizeMismatch(ArraySize::exact(1, 0)),
        );
        let large = DiagnosticMessage::new(
            LocationInfo::new("a.sqf", 90, 1),
            RuntimeDiagnostic::ExpectedArraySizeMismatch(ArraySize::range(3, 9, 12)),
        );
        assert_eq!(small.severity(), large.severity());
        assert_eq!(small.code(), large.code());
    }

    #[test]
    fn render_is_pure() {
        let msg = DiagnosticMessage::new(
            LocationInfo::new("init.sqf", 1, 0),
            ParserDiagnostic::MissingRightArgument {
                operator: "+".to_string(),
            },
        );
        assert_eq!(msg.render(), msg.render());
    }

    #[test]
    fn trait_objects_forward() {
        let msg: Box<dyn Diagnostic> = Box::new(DiagnosticMessage::new(
            LocationInfo::unknown(),
            RuntimeDiagnostic::ZeroDivisor,
        ));
        assert_eq!(msg.severity(), Severity::Warning);
        assert_eq!(msg.render(), "<unknown>:0:0: Division by zero.");
    }
}
