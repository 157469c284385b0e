//! Diagnostics raised by the config file parser (`40xxx`).
//!
//! The variants mirror parser wording but live in their own code block, so
//! their [`DiagnosticKind`] names carry a `Config` prefix.

use crate::kind::DiagnosticKind;
use std::fmt;

/// Payload of a config parser diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigDiagnostic {
    /// A config statement is not terminated by `;`.
    ExpectedStatementTerminator,
    /// No config node form matches the input.
    NoViableAlternativeNode,
    /// An identifier was expected.
    ExpectedIdentifier,
    /// A `(` is never closed.
    MissingRoundClosingBracket,
    /// A class body is missing its `{`.
    MissingCurlyOpeningBracket,
    /// A `{` is never closed.
    MissingCurlyClosingBracket,
    /// A `[` is never closed.
    MissingSquareClosingBracket,
    /// A value assignment is missing its `=`.
    MissingEqualSign,
    /// An array value was expected.
    ExpectedArray,
    /// A value was expected.
    ExpectedValue,
    /// No value form matches the input.
    NoViableAlternativeValue,
    /// Parsing stopped before the end of the input.
    EndOfFileNotReached,
}

impl ConfigDiagnostic {
    /// Returns the catalog kind of this payload.
    pub fn kind(&self) -> DiagnosticKind {
        use ConfigDiagnostic as C;
        use DiagnosticKind as K;
        match self {
            C::ExpectedStatementTerminator => K::ConfigExpectedStatementTerminator,
            C::NoViableAlternativeNode => K::ConfigNoViableAlternativeNode,
            C::ExpectedIdentifier => K::ConfigExpectedIdentifier,
            C::MissingRoundClosingBracket => K::ConfigMissingRoundClosingBracket,
            C::MissingCurlyOpeningBracket => K::ConfigMissingCurlyOpeningBracket,
            C::MissingCurlyClosingBracket => K::ConfigMissingCurlyClosingBracket,
            C::MissingSquareClosingBracket => K::ConfigMissingSquareClosingBracket,
            C::MissingEqualSign => K::ConfigMissingEqualSign,
            C::ExpectedArray => K::ConfigExpectedArray,
            C::ExpectedValue => K::ConfigExpectedValue,
            C::NoViableAlternativeValue => K::ConfigNoViableAlternativeValue,
            C::EndOfFileNotReached => K::ConfigEndOfFileNotReached,
        }
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigDiagnostic as C;
        f.write_str(match self {
            C::ExpectedStatementTerminator => "Expected ';'.",
            C::NoViableAlternativeNode => "No viable alternative for config node.",
            C::ExpectedIdentifier => "Expected identifier.",
            C::MissingRoundClosingBracket => "Missing closing ')'.",
            C::MissingCurlyOpeningBracket => "Missing opening '{' for class body.",
            C::MissingCurlyClosingBracket => "Missing closing '}'.",
            C::MissingSquareClosingBracket => "Missing closing ']'.",
            C::MissingEqualSign => "Missing '='.",
            C::ExpectedArray => "Expected array.",
            C::ExpectedValue => "Expected value.",
            C::NoViableAlternativeValue => "No viable alternative for value.",
            C::EndOfFileNotReached => "Parsing stopped before reaching the end of the file.",
        })
    }
}
