//! Offset to line/column conversion for recipe sources.

use text_size::TextSize;

/// A zero-based line and byte column within a source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Maps byte offsets in a source text to [`LineCol`] positions.
///
/// Lines are terminated by `\n`. The index only stores line start
/// offsets, so the original text must be passed back in to read lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of each line. Always starts with 0.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    /// Build the index for `text`.
    ///
    /// # Panics
    /// Panics if `text` is 4 GiB or larger, since offsets are `u32`.
    pub fn new(text: &str) -> Self {
        // Checked first so every newline offset below fits in a u32
        let len = TextSize::of(text);
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(idx, _)| TextSize::new(idx as u32 + 1)),
        );

        Self { line_starts, len }
    }

    /// Number of lines, counting a trailing empty line after a final `\n`
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a line/column pair.
    ///
    /// Offsets past the end of the text are clamped to the end.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];

        LineCol::new(line as u32, col.into())
    }

    /// Convert a line/column pair back to a byte offset.
    ///
    /// Returns `None` if the line does not exist or the column lies past
    /// the end of that line. The column of the line's `\n` is accepted.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let line = line_col.line as usize;
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|&next| next - TextSize::new(1))
            .unwrap_or(self.len);

        let offset = u32::from(start).checked_add(line_col.col)?;
        (offset <= u32::from(end)).then(|| TextSize::new(offset))
    }

    /// Text of `line` without its `\n` or `\r\n` terminator
    pub fn line_text<'a>(&self, text: &'a str, line: u32) -> Option<&'a str> {
        let line = line as usize;
        let start = usize::from(*self.line_starts.get(line)?);
        let end = self
            .line_starts
            .get(line + 1)
            .map(|&next| usize::from(next) - 1)
            .unwrap_or(text.len());

        let raw = text.get(start..end)?;
        Some(raw.strip_suffix('\r').unwrap_or(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_one_line() {
        let index = LineIndex::new("");

        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(TextSize::new(0)), LineCol::new(0, 0));
        assert_eq!(index.line_text("", 0), Some(""));
        assert_eq!(index.line_text("", 1), None);
    }

    #[test]
    fn test_line_col_across_lines() {
        let text = "parse-as-csv body ,\ndrop body\nrename a b";
        let index = LineIndex::new(text);

        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(TextSize::new(0)), LineCol::new(0, 0));
        assert_eq!(index.line_col(TextSize::new(19)), LineCol::new(0, 19));
        // First byte after the newline
        assert_eq!(index.line_col(TextSize::new(20)), LineCol::new(1, 0));
        assert_eq!(index.line_col(TextSize::new(25)), LineCol::new(1, 5));
        assert_eq!(index.line_col(TextSize::new(30)), LineCol::new(2, 0));
    }

    #[test]
    fn test_line_col_clamps_past_end() {
        let text = "drop a\ndrop b";
        let index = LineIndex::new(text);

        assert_eq!(index.line_col(TextSize::new(500)), LineCol::new(1, 6));
    }

    #[test]
    fn test_offset_round_trips_line_col() {
        let text = "set-column a b\nfill-null-or-empty :c 'x'";
        let index = LineIndex::new(text);

        let pos = index.line_col(TextSize::new(22));
        assert_eq!(index.offset(pos), Some(TextSize::new(22)));
        assert_eq!(index.offset(LineCol::new(7, 0)), None);
    }

    #[test]
    fn test_offset_rejects_column_past_line_end() {
        let text = "ab\ncd";
        let index = LineIndex::new(text);

        // The newline itself is still on line 0
        assert_eq!(index.offset(LineCol::new(0, 2)), Some(TextSize::new(2)));
        assert_eq!(index.offset(LineCol::new(0, 3)), None);
        assert_eq!(index.offset(LineCol::new(0, 4)), None);
        assert_eq!(index.offset(LineCol::new(1, 2)), Some(TextSize::new(5)));
        assert_eq!(index.offset(LineCol::new(1, 50)), None);
    }

    #[test]
    fn test_offset_max_column_does_not_overflow() {
        let index = LineIndex::new("a\nb");

        assert_eq!(index.offset(LineCol::new(1, u32::MAX)), None);
        assert_eq!(index.offset(LineCol::new(0, u32::MAX)), None);
    }

    #[test]
    fn test_offset_agrees_with_line_col_for_every_offset() {
        let text = "drop a\r\n\nrename b c\n";
        let index = LineIndex::new(text);

        for raw in 0..=text.len() as u32 {
            let offset = TextSize::new(raw);
            assert_eq!(index.offset(index.line_col(offset)), Some(offset));
        }
    }

    #[test]
    fn test_line_text_strips_terminators() {
        let text = "lowercase :a\r\nuppercase :b\n\ntrim :c";
        let index = LineIndex::new(text);

        assert_eq!(index.line_text(text, 0), Some("lowercase :a"));
        assert_eq!(index.line_text(text, 1), Some("uppercase :b"));
        assert_eq!(index.line_text(text, 2), Some(""));
        assert_eq!(index.line_text(text, 3), Some("trim :c"));
        assert_eq!(index.line_text(text, 4), None);
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let text = "drop a\n";
        let index = LineIndex::new(text);

        assert_eq!(index.line_count(), 2);
        assert_eq!(index.line_col(TextSize::new(7)), LineCol::new(1, 0));
        assert_eq!(index.line_text(text, 1), Some(""));
    }
}
