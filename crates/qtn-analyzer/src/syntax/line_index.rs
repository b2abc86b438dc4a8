use crate::syntax::ast::{Position, SourceRange};

/// Fast mapping from byte offsets to (line, column).
///
/// Note: columns are byte-based (sufficient for typical QTN code). `\n` is
/// the line terminator, so `\r\n` counts as a single break.
pub struct LineIndex {
    line_starts: Box<[usize]>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut starts = Vec::with_capacity(source.len() / 40 + 1);
        starts.push(0usize);
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                starts.push(i + 1);
            }
        }
        Self {
            line_starts: starts.into_boxed_slice(),
        }
    }

    pub fn position(&self, byte_offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&byte_offset) {
            Ok(exact) => exact,
            Err(ins) => ins.saturating_sub(1),
        };
        let character = byte_offset.saturating_sub(self.line_starts[line]);
        Position::new(line as u32, character as u32)
    }

    pub fn range(&self, start: usize, end: usize) -> SourceRange {
        SourceRange::new(self.position(start), self.position(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_across_lines() {
        let index = LineIndex::new("ab\ncd\n");
        assert_eq!(index.position(0), Position::new(0, 0));
        assert_eq!(index.position(2), Position::new(0, 2));
        assert_eq!(index.position(3), Position::new(1, 0));
        assert_eq!(index.position(5), Position::new(1, 2));
        assert_eq!(index.position(6), Position::new(2, 0));
    }

    #[test]
    fn crlf_counts_as_one_break() {
        let index = LineIndex::new("ab\r\ncd");
        assert_eq!(index.position(4), Position::new(1, 0));
        assert_eq!(index.position(6), Position::new(1, 2));
    }
}
