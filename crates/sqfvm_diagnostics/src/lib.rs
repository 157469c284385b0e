//! Structured diagnostics for the SQF toolchain.
//!
//! Every problem the preprocessor, parsers, linter, or VM can report is a
//! [`DiagnosticKind`] with a fixed [`Severity`] and a stable numeric
//! [`DiagnosticCode`]. Collaborators build a [`DiagnosticMessage`] from a
//! [`LocationInfo`] and a domain payload and hand it to their [`Emitter`],
//! which consults the shared [`Logger`]'s per-severity gates before rendering
//! and writing the text to a [`LogSink`].

#![warn(missing_docs)]

pub mod catalog;
pub mod code;
pub mod diagnostic;
pub mod emitter;
pub mod kind;
pub mod location;
pub mod logger;
mod render;
pub mod severity;
pub mod sink;

pub use catalog::{
    ArrayElementType, ArraySize, AssemblyDiagnostic, CallstackLookup, ConfigDiagnostic,
    ConfigEntry, IndexBounds, IndexRange, LintingDiagnostic, MinimumArraySize, ParserDiagnostic,
    Payload, PreprocessorDiagnostic, RuntimeDiagnostic, SubArrayElementType, TypeExpectation,
};
pub use code::{DiagnosticCode, Domain};
pub use diagnostic::{Diagnostic, DiagnosticMessage};
pub use emitter::Emitter;
pub use kind::DiagnosticKind;
pub use location::LocationInfo;
pub use logger::Logger;
pub use severity::Severity;
pub use sink::{CaptureSink, ConsoleSink, LogSink, WriterSink};
