//! Byte offset <-> LSP position conversion.
//!
//! LSP columns count UTF-16 code units; AutoIt sources are handled as UTF-8.

use std::ops::Range;

use tower_lsp::lsp_types::Position;

/// Line start table over a document's text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first character of every line.
    line_starts: Vec<usize>,
    source: String,
}

impl LineIndex {
    pub fn new(source: String) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            line_starts,
            source,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte range of a line, excluding its line terminator.
    fn line_bounds(&self, line: usize) -> (usize, usize) {
        let start = self.line_starts[line];
        let end = match self.line_starts.get(line + 1) {
            Some(&next) => next - 1,
            None => self.source.len(),
        };
        let end = if self.source[start..end].ends_with('\r') {
            end - 1
        } else {
            end
        };
        (start, end)
    }

    /// Convert a byte offset to an LSP position. Offsets past the end clamp to the end.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let start = self.line_starts[line];

        let character: usize = self.source[start..]
            .char_indices()
            .take_while(|(i, _)| start + i < offset)
            .map(|(_, c)| c.len_utf16())
            .sum();

        Position::new(line as u32, character as u32)
    }

    /// Convert an LSP position to a byte offset.
    ///
    /// Columns past the end of the line clamp to the line end; lines past the
    /// end of the document yield `None`.
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        if line >= self.line_starts.len() {
            return None;
        }
        let (start, end) = self.line_bounds(line);

        let mut column = 0u32;
        for (i, c) in self.source[start..end].char_indices() {
            if column >= position.character {
                return Some(start + i);
            }
            column += c.len_utf16() as u32;
        }
        Some(end)
    }

    /// Convert a byte range to an LSP range.
    pub fn range(&self, span: Range<usize>) -> tower_lsp::lsp_types::Range {
        tower_lsp::lsp_types::Range::new(
            self.offset_to_position(span.start),
            self.offset_to_position(span.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_on_one_line() {
        let idx = LineIndex::new("MsgBox(0, 'a', 'b')".to_string());
        assert_eq!(idx.line_count(), 1);
        assert_eq!(idx.offset_to_position(0), Position::new(0, 0));
        assert_eq!(idx.offset_to_position(6), Position::new(0, 6));
        assert_eq!(idx.position_to_offset(Position::new(0, 6)), Some(6));
    }

    #[test]
    fn offsets_across_lines() {
        let idx = LineIndex::new("Local $a\nSleep(10)\n".to_string());
        assert_eq!(idx.line_count(), 3);
        assert_eq!(idx.offset_to_position(9), Position::new(1, 0));
        assert_eq!(idx.offset_to_position(14), Position::new(1, 5));
        assert_eq!(idx.position_to_offset(Position::new(1, 5)), Some(14));
        assert_eq!(idx.position_to_offset(Position::new(2, 0)), Some(19));
    }

    #[test]
    fn crlf_line_endings() {
        let idx = LineIndex::new("Beep()\r\nExit".to_string());
        assert_eq!(idx.offset_to_position(8), Position::new(1, 0));
        // Columns past the end stop before the carriage return.
        assert_eq!(idx.position_to_offset(Position::new(0, 40)), Some(6));
    }

    #[test]
    fn utf16_columns() {
        // U+1F600 is four bytes in UTF-8 and two UTF-16 code units.
        let idx = LineIndex::new("$s = \"\u{1F600}\" & @CRLF".to_string());
        assert_eq!(idx.offset_to_position(6), Position::new(0, 6));
        assert_eq!(idx.offset_to_position(10), Position::new(0, 8));
        assert_eq!(idx.position_to_offset(Position::new(0, 8)), Some(10));
    }

    #[test]
    fn out_of_bounds() {
        let idx = LineIndex::new("Exit".to_string());
        assert_eq!(idx.position_to_offset(Position::new(3, 0)), None);
        assert_eq!(idx.offset_to_position(100), Position::new(0, 4));
    }

    #[test]
    fn range_conversion() {
        let idx = LineIndex::new("Exit\n@CRLF".to_string());
        let range = idx.range(5..10);
        assert_eq!(range.start, Position::new(1, 0));
        assert_eq!(range.end, Position::new(1, 5));
    }
}
