//! Text offsets and line/column conversion.

pub use text_size::{TextRange, TextSize};

/// A 0-based line/column pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets of a document to line/column positions.
///
/// Built once per document; lookups are a binary search over line starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset at which each line starts. Always contains offset 0.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert an offset to a line/column pair.
    ///
    /// Offsets past the end of the document clamp to the end.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];
        LineCol {
            line: line as u32,
            col: u32::from(col),
        }
    }

    /// The 0-based line containing `offset`.
    pub fn line_number(&self, offset: TextSize) -> u32 {
        self.line_col(offset).line
    }
}
