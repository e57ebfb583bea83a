//! Line/column tracking for diagnostics
//!
//! Tokens and errors carry byte ranges; the CLI and other callers turn
//! those back into human coordinates through a [`LineIndex`].

use text_size::TextSize;

/// A position in source text (1-based line and column, column in chars)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Offsets of every line start in a source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    text: String,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(idx, _)| TextSize::new(idx as u32 + 1)),
        );
        Self {
            line_starts,
            text: text.to_owned(),
        }
    }

    /// Convert a byte offset to a line/column pair.
    ///
    /// Offsets past the end clamp to the end of the text.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(TextSize::of(self.text.as_str()));
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = usize::from(self.line_starts[line]);
        let col = self.text[start..usize::from(offset)].chars().count();
        LineCol::new(line as u32 + 1, col as u32 + 1)
    }

    /// The text of a 1-based line, without its newline
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = usize::from(*self.line_starts.get(idx)?);
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|s| usize::from(*s) - 1)
            .unwrap_or(self.text.len());
        Some(self.text[start..end].trim_end_matches('\r'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_first_line() {
        let index = LineIndex::new("@startuml\nactor A\n@enduml");
        assert_eq!(index.line_col(TextSize::new(0)), LineCol::new(1, 1));
        assert_eq!(index.line_col(TextSize::new(4)), LineCol::new(1, 5));
    }

    #[test]
    fn test_line_col_after_newline() {
        let index = LineIndex::new("@startuml\nactor A\n@enduml");
        assert_eq!(index.line_col(TextSize::new(10)), LineCol::new(2, 1));
        assert_eq!(index.line_col(TextSize::new(16)), LineCol::new(2, 7));
        assert_eq!(index.line_col(TextSize::new(18)), LineCol::new(3, 1));
    }

    #[test]
    fn test_line_col_clamps_past_end() {
        let index = LineIndex::new("ab");
        assert_eq!(index.line_col(TextSize::new(99)), LineCol::new(1, 3));
    }

    #[test]
    fn test_line_text() {
        let index = LineIndex::new("one\r\ntwo\n");
        assert_eq!(index.line_text(1), Some("one"));
        assert_eq!(index.line_text(2), Some("two"));
        assert_eq!(index.line_text(3), Some(""));
        assert_eq!(index.line_text(4), None);
        assert_eq!(index.line_text(0), None);
    }
}
