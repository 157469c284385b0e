//! Source file representation with line-start indexing for fast line/column lookup.

use crate::position::PositionInfo;
use crate::span::SyntaxSpan;
use sqfvm_common::{InternalError, SqfResult};

/// A source file handed to one of the parsing stages.
///
/// Stores the file's content along with precomputed line-start offsets so
/// that byte offsets can be turned into [`PositionInfo`] and [`SyntaxSpan`]
/// values when a stage needs to report a location.
pub struct SourceFile {
    /// The (virtual) path of this file.
    pub path: String,
    /// The full text content of the file.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Creates a new `SourceFile` with precomputed line starts.
    pub fn new(path: impl Into<String>, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        Self {
            path: path.into(),
            content,
            line_starts,
        }
    }

    /// Converts a byte offset into 1-indexed (line, column) coordinates.
    ///
    /// Uses binary search on the precomputed line-start offsets.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = (line_idx as u32) + 1;
        let col = byte_offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the raw position record for a byte offset.
    pub fn position(&self, byte_offset: u32) -> PositionInfo {
        let (line, column) = self.line_col(byte_offset);
        PositionInfo::new(self.path.clone(), line, column, byte_offset)
    }

    /// Resolves a `[start, end)` byte range to a [`SyntaxSpan`].
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn resolve_span(&self, start: u32, end: u32) -> SyntaxSpan {
        assert!(start <= end, "span start {start} is after end {end}");
        let (start_line, start_col) = self.line_col(start);
        let (end_line, end_col) = self.line_col(end.saturating_sub(1).max(start));
        SyntaxSpan {
            path: self.path.clone(),
            start_line,
            start_col,
            end_line,
            end_col,
            start,
            end,
        }
    }

    /// Returns a substring of the file content between byte offsets.
    ///
    /// Fails if the range lies outside the content or splits a character.
    pub fn snippet(&self, start: u32, end: u32) -> SqfResult<&str> {
        self.content
            .get(start as usize..end as usize)
            .ok_or_else(|| {
                InternalError::new(format!(
                    "byte range {start}..{end} is not a valid slice of {}",
                    self.path
                ))
            })
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_file(content: &str) -> SourceFile {
        SourceFile::new("test.sqf", content.to_string())
    }

    #[test]
    fn line_starts_computation() {
        let f = make_file("abc\ndef\nghi");
        assert_eq!(f.line_starts, vec![0, 4, 8]);
    }

    #[test]
    fn line_col_resolution() {
        let f = make_file("abc\ndef\nghi");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_col(4), (2, 1));
        assert_eq!(f.line_col(5), (2, 2));
        assert_eq!(f.line_col(8), (3, 1));
    }

    #[test]
    fn position_record() {
        let f = make_file("private _a = 1;\n_b = _a;");
        let pos = f.position(21);
        assert_eq!(pos, PositionInfo::new("test.sqf", 2, 6, 21));
    }

    #[test]
    fn resolve_span() {
        let f = make_file("abc\ndef\nghi");
        let span = f.resolve_span(4, 7);
        assert_eq!(span.path, "test.sqf");
        assert_eq!((span.start_line, span.start_col), (2, 1));
        assert_eq!((span.end_line, span.end_col), (2, 3));
        assert_eq!(f.snippet(span.start, span.end).unwrap(), "def");
    }

    #[test]
    #[should_panic(expected = "span start 7 is after end 4")]
    fn resolve_span_rejects_inverted_range() {
        let f = make_file("abc\ndef\nghi");
        f.resolve_span(7, 4);
    }

    #[test]
    fn snippet_out_of_range_is_internal_error() {
        let f = make_file("abc");
        let err = f.snippet(2, 9).unwrap_err();
        assert!(err.message.contains("2..9"));
        assert!(err.message.contains("test.sqf"));
    }

    #[test]
    fn empty_file() {
        let f = make_file("");
        assert_eq!(f.line_starts, vec![0]);
        assert_eq!(f.line_col(0), (1, 1));
    }
}
