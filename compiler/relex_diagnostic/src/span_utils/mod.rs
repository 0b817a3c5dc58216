//! Line and column lookup for byte offsets.
//!
//! For repeated lookups on the same source, build a [`LineOffsetTable`]
//! once; it pre-computes line starts for O(log L) lookup.

/// Pre-computed line offset table for efficient line/column lookup.
///
/// # Example
///
/// ```
/// use relex_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| i + 1));
        LineOffsetTable { offsets }
    }

    /// 1-based line number containing the given byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: usize) -> usize {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        line_idx + 1
    }

    /// 1-based `(line, column)` for a byte offset.
    ///
    /// Columns count characters, not bytes, from the start of the line.
    pub fn offset_to_line_col(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets.get(line - 1).copied().unwrap_or(0);
        let col = source
            .get(line_start..offset.min(source.len()))
            .map_or(0, |prefix| prefix.chars().count())
            + 1;
        (line, col)
    }

    /// Byte offset where a 1-based line starts.
    pub fn line_start_offset(&self, line: usize) -> Option<usize> {
        line.checked_sub(1)
            .and_then(|idx| self.offsets.get(idx).copied())
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: usize) -> Option<&'s str> {
        let start = self.line_start_offset(line)?;
        let end = self
            .offsets
            .get(line)
            .map_or(source.len(), |&next| next - 1);
        let text = source.get(start..end)?;
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
