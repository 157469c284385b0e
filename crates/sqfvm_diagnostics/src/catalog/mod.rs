//! Diagnostic payloads, one enum per [`Domain`](crate::code::Domain).
//!
//! Every payload variant maps to exactly one [`DiagnosticKind`]; the kind fixes
//! severity and code, the payload supplies the values interpolated into the
//! message text.

pub mod assembly;
pub mod config;
pub mod linting;
pub mod parser;
pub mod preprocessor;
pub mod runtime;

pub use assembly::AssemblyDiagnostic;
pub use config::ConfigDiagnostic;
pub use linting::LintingDiagnostic;
pub use parser::ParserDiagnostic;
pub use preprocessor::PreprocessorDiagnostic;
pub use runtime::{
    ArrayElementType, ArraySize, CallstackLookup, ConfigEntry, IndexBounds, IndexRange,
    MinimumArraySize, RuntimeDiagnostic, SubArrayElementType, TypeExpectation,
};

use crate::kind::DiagnosticKind;
use std::fmt;

/// A payload from any domain.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// Preprocessor payload.
    Preprocessor(PreprocessorDiagnostic),
    /// Assembly parser payload.
    Assembly(AssemblyDiagnostic),
    /// Script parser payload.
    Parser(ParserDiagnostic),
    /// Config parser payload.
    Config(ConfigDiagnostic),
    /// Linting payload.
    Linting(LintingDiagnostic),
    /// Runtime payload.
    Runtime(RuntimeDiagnostic),
}

impl Payload {
    /// Returns the catalog kind of the wrapped payload.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Payload::Preprocessor(p) => p.kind(),
            Payload::Assembly(p) => p.kind(),
            Payload::Parser(p) => p.kind(),
            Payload::Config(p) => p.kind(),
            Payload::Linting(p) => p.kind(),
            Payload::Runtime(p) => p.kind(),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Preprocessor(p) => p.fmt(f),
            Payload::Assembly(p) => p.fmt(f),
            Payload::Parser(p) => p.fmt(f),
            Payload::Config(p) => p.fmt(f),
            Payload::Linting(p) => p.fmt(f),
            Payload::Runtime(p) => p.fmt(f),
        }
    }
}

macro_rules! payload_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Payload {
                fn from(payload: $ty) -> Self {
                    Payload::$variant(payload)
                }
            }
        )*
    };
}

payload_from!(
    Preprocessor(PreprocessorDiagnostic),
    Assembly(AssemblyDiagnostic),
    Parser(ParserDiagnostic),
    Config(ConfigDiagnostic),
    Linting(LintingDiagnostic),
    Runtime(RuntimeDiagnostic),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Domain;

    #[test]
    fn payload_kind_matches_domain() {
        let payloads: Vec<Payload> = vec![
            PreprocessorDiagnostic::EmptyArgument.into(),
            AssemblyDiagnostic::ExpectedPush.into(),
            ParserDiagnostic::EndOfFile.into(),
            ConfigDiagnostic::ExpectedValue.into(),
            LintingDiagnostic::UnassignedVariable {
                variable: "_x".to_string(),
            }
            .into(),
            RuntimeDiagnostic::ZeroDivisor.into(),
        ];
        let domains: Vec<Domain> = payloads.iter().map(|p| p.kind().domain()).collect();
        assert_eq!(domains, Domain::ALL.to_vec());
    }

    #[test]
    fn display_delegates_to_domain() {
        let payload = Payload::from(RuntimeDiagnostic::VariableNotFound {
            variable: "_foo".to_string(),
        });
        assert_eq!(payload.to_string(), "Variable '_foo' not found.");
    }
}
