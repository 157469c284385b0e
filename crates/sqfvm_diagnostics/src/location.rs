//! Source locations attached to every diagnostic message.

use sqfvm_source::{Instruction, PositionInfo, PreprocessorFileInfo, Spanned};
use std::fmt;

/// A normalized `{path, line, column}` triple.
///
/// Each toolchain stage tracks positions in its own shape; the four named
/// constructors convert those shapes into this single form. Values are copied
/// as-is and never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocationInfo {
    /// The (virtual) path of the source file, empty when unknown.
    pub path: String,
    /// The line number, `0` when unknown.
    pub line: u32,
    /// The column number, `0` when unknown.
    pub column: u32,
}

impl LocationInfo {
    /// Creates a location from explicit values.
    pub fn new(path: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }

    /// The "unknown origin" location: empty path, line 0, column 0.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Takes the active include position of a file being preprocessed.
    pub fn from_preprocessor_file(file: &PreprocessorFileInfo) -> Self {
        Self::new(file.path.clone(), file.line, file.column)
    }

    /// Takes the start of a syntax node's span.
    pub fn from_syntax_node(node: &impl Spanned) -> Self {
        let span = node.span();
        Self::new(span.path.clone(), span.start_line, span.start_col)
    }

    /// Copies a raw position record.
    pub fn from_position(position: &PositionInfo) -> Self {
        Self::new(position.path.clone(), position.line, position.column)
    }

    /// Follows an instruction's debug position back to its source.
    ///
    /// Instructions without debug information yield [`LocationInfo::unknown`].
    pub fn from_instruction(instruction: &impl Instruction) -> Self {
        instruction
            .debug_info()
            .map(Self::from_position)
            .unwrap_or_default()
    }

    /// Returns `true` if this is the unknown-origin location.
    pub fn is_unknown(&self) -> bool {
        self.path.is_empty() && self.line == 0 && self.column == 0
    }
}

/// Renders as `path:line:column`; an empty path renders as `<unknown>`.
impl fmt::Display for LocationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "<unknown>"
        } else {
            &self.path
        };
        write!(f, "{}:{}:{}", path, self.line, self.column)
    }
}
