//! Diagnostics raised while reading SQF assembly (`20xxx`).

use crate::kind::DiagnosticKind;
use std::fmt;

/// Payload of an assembly parser diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssemblyDiagnostic {
    /// An assembly statement is not terminated by `;`.
    ExpectedSemicolon,
    /// No instruction form matches the assembly input.
    NoViableAlternativeInstructions,
    /// No argument form matches the assembly input.
    NoViableAlternativeArg,
    /// An `endStatement` instruction was expected.
    ExpectedEndStatement,
    /// A `callNular` instruction was expected.
    ExpectedCallNular,
    /// A nular operator name was expected.
    ExpectedNularOperator,
    /// The named nular operator does not exist.
    UnknownNularOperator {
        /// Operator name as written.
        operator: String,
    },
    /// A `callUnary` instruction was expected.
    ExpectedCallUnary,
    /// A unary operator name was expected.
    ExpectedUnaryOperator,
    /// The named unary operator does not exist.
    UnknownUnaryOperator {
        /// Operator name as written.
        operator: String,
    },
    /// A `callBinary` instruction was expected.
    ExpectedCallBinary,
    /// A binary operator name was expected.
    ExpectedBinaryOperator,
    /// The named binary operator does not exist.
    UnknownBinaryOperator {
        /// Operator name as written.
        operator: String,
    },
    /// An `assignTo` instruction was expected.
    ExpectedAssignTo,
    /// A variable name was expected.
    ExpectedVariableName,
    /// An `assignToLocal` instruction was expected.
    ExpectedAssignToLocal,
    /// A `getVariable` instruction was expected.
    ExpectedGetVariable,
    /// A `makeArray` instruction was expected.
    ExpectedMakeArray,
    /// An integer literal was expected.
    ExpectedInteger,
    /// A `push` instruction was expected.
    ExpectedPush,
    /// A type name was expected.
    ExpectedTypeName,
    /// A numeric literal does not fit its target type.
    NumberOutOfRange,
}

impl AssemblyDiagnostic {
    /// Returns the catalog kind of this payload.
    pub fn kind(&self) -> DiagnosticKind {
        use AssemblyDiagnostic as A;
        use DiagnosticKind as K;
        match self {
            A::ExpectedSemicolon => K::ExpectedSemicolon,
            A::NoViableAlternativeInstructions => K::NoViableAlternativeInstructions,
            A::NoViableAlternativeArg => K::NoViableAlternativeArg,
            A::ExpectedEndStatement => K::ExpectedEndStatement,
            A::ExpectedCallNular => K::ExpectedCallNular,
            A::ExpectedNularOperator => K::ExpectedNularOperator,
            A::UnknownNularOperator { .. } => K::UnknownNularOperator,
            A::ExpectedCallUnary => K::ExpectedCallUnary,
            A::ExpectedUnaryOperator => K::ExpectedUnaryOperator,
            A::UnknownUnaryOperator { .. } => K::UnknownUnaryOperator,
            A::ExpectedCallBinary => K::ExpectedCallBinary,
            A::ExpectedBinaryOperator => K::ExpectedBinaryOperator,
            A::UnknownBinaryOperator { .. } => K::UnknownBinaryOperator,
            A::ExpectedAssignTo => K::ExpectedAssignTo,
            A::ExpectedVariableName => K::ExpectedVariableName,
            A::ExpectedAssignToLocal => K::ExpectedAssignToLocal,
            A::ExpectedGetVariable => K::ExpectedGetVariable,
            A::ExpectedMakeArray => K::ExpectedMakeArray,
            A::ExpectedInteger => K::ExpectedInteger,
            A::ExpectedPush => K::ExpectedPush,
            A::ExpectedTypeName => K::ExpectedTypeName,
            A::NumberOutOfRange => K::NumberOutOfRange,
        }
    }
}

impl fmt::Display for AssemblyDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AssemblyDiagnostic as A;
        let text = match self {
            A::UnknownNularOperator { operator } => {
                return write!(f, "Unknown nular operator '{operator}'.");
            }
            A::UnknownUnaryOperator { operator } => {
                return write!(f, "Unknown unary operator '{operator}'.");
            }
            A::UnknownBinaryOperator { operator } => {
                return write!(f, "Unknown binary operator '{operator}'.");
            }
            A::ExpectedSemicolon => "Expected ';'.",
            A::NoViableAlternativeInstructions => "No viable alternative for instructions.",
            A::NoViableAlternativeArg => "No viable alternative for argument.",
            A::ExpectedEndStatement => "Expected 'endStatement'.",
            A::ExpectedCallNular => "Expected 'callNular'.",
            A::ExpectedNularOperator => "Expected nular operator name.",
            A::ExpectedCallUnary => "Expected 'callUnary'.",
            A::ExpectedUnaryOperator => "Expected unary operator name.",
            A::ExpectedCallBinary => "Expected 'callBinary'.",
            A::ExpectedBinaryOperator => "Expected binary operator name.",
            A::ExpectedAssignTo => "Expected 'assignTo'.",
            A::ExpectedVariableName => "Expected variable name.",
            A::ExpectedAssignToLocal => "Expected 'assignToLocal'.",
            A::ExpectedGetVariable => "Expected 'getVariable'.",
            A::ExpectedMakeArray => "Expected 'makeArray'.",
            A::ExpectedInteger => "Expected integer.",
            A::ExpectedPush => "Expected 'push'.",
            A::ExpectedTypeName => "Expected type name.",
            A::NumberOutOfRange => "Number out of range.",
        };
        f.write_str(text)
    }
}
