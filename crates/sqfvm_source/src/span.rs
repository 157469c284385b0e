//! Resolved source spans attached to parsed syntax nodes.

use crate::position::PositionInfo;
use std::fmt;

/// A span resolved to line/column coordinates.
///
/// Produced by [`SourceFile::resolve_span`](crate::SourceFile::resolve_span)
/// and stored on the syntax nodes of the script and config parsers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxSpan {
    /// The path of the source file.
    pub path: String,
    /// The starting line number.
    pub start_line: u32,
    /// The starting column number.
    pub start_col: u32,
    /// The ending line number.
    pub end_line: u32,
    /// The ending column number.
    pub end_col: u32,
    /// Byte offset of the start of the span (inclusive).
    pub start: u32,
    /// Byte offset of the end of the span (exclusive).
    pub end: u32,
}

impl SyntaxSpan {
    /// Returns the start of this span as a raw position record.
    pub fn start_position(&self) -> PositionInfo {
        PositionInfo::new(self.path.clone(), self.start_line, self.start_col, self.start)
    }

    /// Returns the length of this span in bytes, or 0 if `end` precedes `start`.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for SyntaxSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.start_line, self.start_col)
    }
}

/// A parsed syntax node that knows where it came from.
///
/// Implemented by the AST node types of the script and config parsers.
pub trait Spanned {
    /// Returns the span of source text this node was parsed from.
    fn span(&self) -> &SyntaxSpan;
}

impl Spanned for SyntaxSpan {
    fn span(&self) -> &SyntaxSpan {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_span() -> SyntaxSpan {
        SyntaxSpan {
            path: "fn_init.sqf".to_string(),
            start_line: 10,
            start_col: 5,
            end_line: 12,
            end_col: 2,
            start: 140,
            end: 190,
        }
    }

    #[test]
    fn display_shows_start_only() {
        assert_eq!(format!("{}", make_span()), "fn_init.sqf:10:5");
    }

    #[test]
    fn start_position() {
        let pos = make_span().start_position();
        assert_eq!(pos, PositionInfo::new("fn_init.sqf", 10, 5, 140));
    }

    #[test]
    fn len_and_empty() {
        let span = make_span();
        assert_eq!(span.len(), 50);
        assert!(!span.is_empty());
        assert!(SyntaxSpan::default().is_empty());
    }

    #[test]
    fn inverted_span_has_zero_len() {
        let span = SyntaxSpan {
            start: 190,
            end: 140,
            ..make_span()
        };
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }
}
