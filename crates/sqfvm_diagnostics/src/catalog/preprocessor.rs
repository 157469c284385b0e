//! Diagnostics raised by the macro preprocessor (`10xxx`).

use crate::kind::DiagnosticKind;
use crate::render::error_chain;
use std::fmt;

/// Payload of a preprocessor diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreprocessorDiagnostic {
    /// Macro invoked with the wrong number of arguments.
    ArgCountMismatch,
    /// Text after the path of an `#include`.
    UnexpectedDataAfterInclude,
    /// A file includes itself.
    RecursiveInclude {
        /// The include chain leading back to the file, rendered by the preprocessor.
        include_tree: String,
    },
    /// An `#include` could not be resolved.
    IncludeFailed {
        /// The directive line as written.
        line: String,
        /// The flattened error chain that made the include fail.
        cause: String,
    },
    /// A macro is defined twice.
    MacroDefinedTwice {
        /// Name of the macro.
        macro_name: String,
    },
    /// A macro is referenced but not defined.
    MacroNotFound {
        /// Name of the macro.
        macro_name: String,
    },
    /// Nested `#ifdef`.
    UnexpectedIfdef,
    /// Nested `#ifndef`.
    UnexpectedIfndef,
    /// Stray `#else`.
    UnexpectedElse,
    /// Stray `#endif`.
    UnexpectedEndif,
    /// Unterminated conditional block.
    MissingEndif,
    /// Unknown directive.
    UnknownInstruction {
        /// The directive name without the leading `#`.
        instruction: String,
    },
    /// Empty macro argument.
    EmptyArgument,
}

impl PreprocessorDiagnostic {
    /// Builds an [`IncludeFailed`](Self::IncludeFailed) from the error that caused it.
    ///
    /// The error's `source()` chain is flattened into the message.
    pub fn include_failed(line: impl Into<String>, cause: &dyn std::error::Error) -> Self {
        PreprocessorDiagnostic::IncludeFailed {
            line: line.into(),
            cause: error_chain(cause),
        }
    }

    /// Returns the catalog kind of this payload.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            PreprocessorDiagnostic::ArgCountMismatch => DiagnosticKind::ArgCountMismatch,
            PreprocessorDiagnostic::UnexpectedDataAfterInclude => {
                DiagnosticKind::UnexpectedDataAfterInclude
            }
            PreprocessorDiagnostic::RecursiveInclude { .. } => DiagnosticKind::RecursiveInclude,
            PreprocessorDiagnostic::IncludeFailed { .. } => DiagnosticKind::IncludeFailed,
            PreprocessorDiagnostic::MacroDefinedTwice { .. } => DiagnosticKind::MacroDefinedTwice,
            PreprocessorDiagnostic::MacroNotFound { .. } => DiagnosticKind::MacroNotFound,
            PreprocessorDiagnostic::UnexpectedIfdef => DiagnosticKind::UnexpectedIfdef,
            PreprocessorDiagnostic::UnexpectedIfndef => DiagnosticKind::UnexpectedIfndef,
            PreprocessorDiagnostic::UnexpectedElse => DiagnosticKind::UnexpectedElse,
            PreprocessorDiagnostic::UnexpectedEndif => DiagnosticKind::UnexpectedEndif,
            PreprocessorDiagnostic::MissingEndif => DiagnosticKind::MissingEndif,
            PreprocessorDiagnostic::UnknownInstruction { .. } => DiagnosticKind::UnknownInstruction,
            PreprocessorDiagnostic::EmptyArgument => DiagnosticKind::EmptyArgument,
        }
    }
}

impl fmt::Display for PreprocessorDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreprocessorDiagnostic::ArgCountMismatch => {
                f.write_str("Macro invoked with the wrong number of arguments.")
            }
            PreprocessorDiagnostic::UnexpectedDataAfterInclude => {
                f.write_str("Unexpected data after include path.")
            }
            PreprocessorDiagnostic::RecursiveInclude { include_tree } => {
                write!(f, "Recursive include detected. Include tree: {include_tree}")
            }
            PreprocessorDiagnostic::IncludeFailed { line, cause } => {
                write!(f, "Failed to include '{line}': {cause}")
            }
            PreprocessorDiagnostic::MacroDefinedTwice { macro_name } => {
                write!(f, "Macro '{macro_name}' is already defined.")
            }
            PreprocessorDiagnostic::MacroNotFound { macro_name } => {
                write!(f, "Macro '{macro_name}' is not defined.")
            }
            PreprocessorDiagnostic::UnexpectedIfdef => f.write_str(
                "Unexpected #ifdef. Already inside of an #ifdef or #ifndef block.",
            ),
            PreprocessorDiagnostic::UnexpectedIfndef => f.write_str(
                "Unexpected #ifndef. Already inside of an #ifdef or #ifndef block.",
            ),
            PreprocessorDiagnostic::UnexpectedElse => {
                f.write_str("Unexpected #else. Not inside of an #ifdef or #ifndef block.")
            }
            PreprocessorDiagnostic::UnexpectedEndif => {
                f.write_str("Unexpected #endif. Not inside of an #ifdef or #ifndef block.")
            }
            PreprocessorDiagnostic::MissingEndif => {
                f.write_str("Missing #endif before the end of the file.")
            }
            PreprocessorDiagnostic::UnknownInstruction { instruction } => {
                write!(f, "Unknown preprocessor directive '#{instruction}'.")
            }
            PreprocessorDiagnostic::EmptyArgument => f.write_str("Empty macro argument."),
        }
    }
}
