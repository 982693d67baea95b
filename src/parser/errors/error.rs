//! The syntax error record produced while parsing a recipe.

use thiserror::Error;

use crate::base::{LineIndex, TextSize};

/// One syntax error observed while parsing a recipe.
///
/// Holds the line number, the character position within that line where
/// the error is suspected, the parser's message, and the source line that
/// has the error. The record is immutable once built.
///
/// `Display` renders only the message. Reporting code that needs the
/// location has to read [`line_number`](Self::line_number) and
/// [`char_position`](Self::char_position) itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct SyntaxError {
    line_number: usize,
    char_position: usize,
    message: String,
    source_line: String,
}

impl SyntaxError {
    /// Create a syntax error record.
    ///
    /// Positions are stored as given; their base (0 or 1) is up to the
    /// caller.
    pub fn new(
        line_number: usize,
        char_position: usize,
        message: impl Into<String>,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            char_position,
            message: message.into(),
            source_line: source_line.into(),
        }
    }

    /// Create an error for a byte offset into a whole recipe.
    ///
    /// The line number is 1-based and the character position is the
    /// 0-based byte column within that line. Offsets past the end of
    /// `source` point at the end of the last line.
    ///
    /// # Panics
    /// Panics if `source` is 4 GiB or larger (see [`LineIndex::new`]).
    pub fn at_offset(source: &str, offset: TextSize, message: impl Into<String>) -> Self {
        let index = LineIndex::new(source);
        let pos = index.line_col(offset);
        let line = index.line_text(source, pos.line).unwrap_or_default();

        tracing::trace!(
            line = pos.line + 1,
            col = pos.col,
            "syntax error located in recipe"
        );

        Self::new(pos.line as usize + 1, pos.col as usize, message, line)
    }

    /// Line number where the syntax error occurred
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Character position within the line where the error is suspected
    pub fn char_position(&self) -> usize {
        self.char_position
    }

    /// The error message generated by the parser for the line
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Original line that has the syntax error
    pub fn source_line(&self) -> &str {
        &self.source_line
    }

    /// Consume the record, returning `(line_number, char_position, message, source_line)`
    pub fn into_parts(self) -> (usize, usize, String, String) {
        (
            self.line_number,
            self.char_position,
            self.message,
            self.source_line,
        )
    }
}
