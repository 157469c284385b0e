//! Diagnostics raised by the script parser (`30xxx`).

use crate::kind::DiagnosticKind;
use std::fmt;

/// Payload of a script parser diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParserDiagnostic {
    /// A statement is not terminated by `;` or `,`.
    ExpectedStatementTerminator,
    /// No statement form matches the input.
    NoViableAlternativeStatement,
    /// A `private` variable name does not start with `_`.
    MissingUnderscoreOnPrivateVariable {
        /// The offending variable name.
        variable: String,
    },
    /// A binary expression was expected.
    ExpectedBinaryExpression,
    /// A binary operator has no right-hand side.
    MissingRightArgument {
        /// The binary operator missing its right-hand side.
        operator: String,
    },
    /// A `(` is never closed.
    MissingRoundClosingBracket,
    /// A `{` is never closed.
    MissingCurlyClosingBracket,
    /// A `[` is never closed.
    MissingSquareClosingBracket,
    /// No primary expression form matches the input.
    NoViableAlternativePrimaryExpression,
    /// A number literal has no digits.
    EmptyNumber,
    /// Script code was expected.
    ExpectedSqf,
    /// The input ended unexpectedly.
    EndOfFile,
}

impl ParserDiagnostic {
    /// Returns the catalog kind of this payload.
    pub fn kind(&self) -> DiagnosticKind {
        use DiagnosticKind as K;
        use ParserDiagnostic as P;
        match self {
            P::ExpectedStatementTerminator => K::ExpectedStatementTerminator,
            P::NoViableAlternativeStatement => K::NoViableAlternativeStatement,
            P::MissingUnderscoreOnPrivateVariable { .. } => K::MissingUnderscoreOnPrivateVariable,
            P::ExpectedBinaryExpression => K::ExpectedBinaryExpression,
            P::MissingRightArgument { .. } => K::MissingRightArgument,
            P::MissingRoundClosingBracket => K::MissingRoundClosingBracket,
            P::MissingCurlyClosingBracket => K::MissingCurlyClosingBracket,
            P::MissingSquareClosingBracket => K::MissingSquareClosingBracket,
            P::NoViableAlternativePrimaryExpression => K::NoViableAlternativePrimaryExpression,
            P::EmptyNumber => K::EmptyNumber,
            P::ExpectedSqf => K::ExpectedSqf,
            P::EndOfFile => K::EndOfFile,
        }
    }
}

impl fmt::Display for ParserDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParserDiagnostic as P;
        match self {
            P::ExpectedStatementTerminator => f.write_str("Expected ';' or ','."),
            P::NoViableAlternativeStatement => f.write_str("No viable alternative for statement."),
            P::MissingUnderscoreOnPrivateVariable { variable } => write!(
                f,
                "Private variable '{variable}' is missing its leading underscore."
            ),
            P::ExpectedBinaryExpression => f.write_str("Expected binary expression."),
            P::MissingRightArgument { operator } => {
                write!(f, "Missing right argument for binary operator '{operator}'.")
            }
            P::MissingRoundClosingBracket => f.write_str("Missing closing ')'."),
            P::MissingCurlyClosingBracket => f.write_str("Missing closing '}'."),
            P::MissingSquareClosingBracket => f.write_str("Missing closing ']'."),
            P::NoViableAlternativePrimaryExpression => {
                f.write_str("No viable alternative for primary expression.")
            }
            P::EmptyNumber => f.write_str("Number literal has no digits."),
            P::ExpectedSqf => f.write_str("Expected SQF code."),
            P::EndOfFile => f.write_str("Unexpected end of file."),
        }
    }
}
