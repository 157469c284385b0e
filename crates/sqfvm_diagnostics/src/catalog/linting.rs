//! Diagnostics raised by static analysis passes (`50xxx`).

use crate::kind::DiagnosticKind;
use std::fmt;

/// Payload of a linting diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LintingDiagnostic {
    /// A variable is read before anything was assigned to it.
    UnassignedVariable {
        /// Name of the variable.
        variable: String,
    },
}

impl LintingDiagnostic {
    /// Returns the catalog kind of this payload.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            LintingDiagnostic::UnassignedVariable { .. } => DiagnosticKind::UnassignedVariable,
        }
    }
}

impl fmt::Display for LintingDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintingDiagnostic::UnassignedVariable { variable } => {
                write!(f, "Variable '{variable}' is read but never assigned.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    #[test]
    fn unassigned_variable() {
        let diag = LintingDiagnostic::UnassignedVariable {
            variable: "_unit".to_string(),
        };
        assert_eq!(diag.to_string(), "Variable '_unit' is read but never assigned.");
        assert_eq!(diag.kind().severity(), Severity::Warning);
        assert_eq!(diag.kind().code().value(), 50_001);
    }
}
