//! Source positions as produced by the toolchain stages.
//!
//! Each stage tracks source locations in its own shape: the preprocessor
//! walks files with a [`PreprocessorFileInfo`] cursor, the parsers attach a
//! [`SyntaxSpan`] to their nodes (see [`Spanned`]), the assembler and VM keep
//! raw [`PositionInfo`] records, and compiled instructions reference their
//! origin through [`Instruction::debug_info`]. [`SourceFile`] converts byte
//! offsets into these line/column shapes.

#![warn(missing_docs)]

pub mod instruction;
pub mod position;
pub mod preprocessor_file;
pub mod source_file;
pub mod span;

pub use instruction::Instruction;
pub use position::PositionInfo;
pub use preprocessor_file::PreprocessorFileInfo;
pub use source_file::SourceFile;
pub use span::{Spanned, SyntaxSpan};
