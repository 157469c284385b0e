//! Raw position records shared by the assembler and the runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single point in a source file.
///
/// Lines and columns are 1-indexed when they come from [`SourceFile`](crate::SourceFile);
/// stages that build records by hand may use their own conventions, and the
/// values are carried through unvalidated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionInfo {
    /// The (virtual) path of the source file.
    pub path: String,
    /// The line number.
    pub line: u32,
    /// The column number.
    pub column: u32,
    /// Byte offset into the file content.
    pub offset: u32,
}

impl PositionInfo {
    /// Creates a position record.
    pub fn new(path: impl Into<String>, line: u32, column: u32, offset: u32) -> Self {
        Self {
            path: path.into(),
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for PositionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let pos = PositionInfo::new("init.sqf", 4, 12, 80);
        assert_eq!(format!("{pos}"), "init.sqf:4:12");
    }

    #[test]
    fn default_is_unknown_origin() {
        let pos = PositionInfo::default();
        assert!(pos.path.is_empty());
        assert_eq!((pos.line, pos.column, pos.offset), (0, 0, 0));
    }

    #[test]
    fn serde_roundtrip() {
        let pos = PositionInfo::new("a.sqf", 1, 2, 3);
        let json = serde_json::to_string(&pos).unwrap();
        let back: PositionInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, back);
    }
}
