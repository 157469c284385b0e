//! Per-file cursor used by the preprocessor while expanding includes.

use crate::position::PositionInfo;

/// A file being walked by the preprocessor.
///
/// The preprocessor keeps one of these per active include level. The cursor
/// tracks the line and column of the last consumed character so that
/// diagnostics raised mid-expansion point at the active include position.
/// Lines start at 1 and columns at 0 before the first character of a line
/// is consumed. Carriage returns are skipped and never counted.
#[derive(Clone, Debug)]
pub struct PreprocessorFileInfo {
    /// The (virtual) path of the file.
    pub path: String,
    /// Current line.
    pub line: u32,
    /// Current column.
    pub column: u32,
    content: String,
    offset: usize,
    last_column: u32,
}

impl PreprocessorFileInfo {
    /// Creates a cursor positioned at the start of `content`.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line: 1,
            column: 0,
            content: content.into(),
            offset: 0,
            last_column: 0,
        }
    }

    /// Returns the byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` once every character has been consumed.
    pub fn is_eof(&self) -> bool {
        self.offset >= self.content.len()
    }

    /// Looks `ahead` characters past the next unread one without consuming anything.
    pub fn peek(&self, ahead: usize) -> Option<char> {
        self.content[self.offset..].chars().nth(ahead)
    }

    /// Consumes and returns the next character, advancing line and column.
    pub fn next_char(&mut self) -> Option<char> {
        let c = loop {
            let c = self.content[self.offset..].chars().next()?;
            self.offset += c.len_utf8();
            if c != '\r' {
                break c;
            }
        };
        match c {
            '\n' => {
                self.line += 1;
                self.last_column = self.column;
                self.column = 0;
                Some(c)
            }
            _ => {
                self.column += 1;
                Some(c)
            }
        }
    }

    /// Un-reads the last consumed character.
    ///
    /// Only a single line break can be stepped back over: the column of the
    /// line before the previous one is not retained.
    pub fn move_back(&mut self) {
        let c = loop {
            let Some(c) = self.content[..self.offset].chars().next_back() else {
                return;
            };
            self.offset -= c.len_utf8();
            if c != '\r' {
                break c;
            }
        };
        match c {
            '\n' => {
                self.line -= 1;
                self.column = self.last_column;
            }
            _ => self.column = self.column.saturating_sub(1),
        }
    }

    /// Returns the active position as a raw record.
    pub fn position(&self) -> PositionInfo {
        PositionInfo::new(self.path.clone(), self.line, self.column, self.offset as u32)
    }
}
