use std::fmt;

/// Points at one position of an expression for diagnostics.
///
/// Rendered as two lines: the expression itself, then a line of spaces ending
/// in a single `^` under the offending character.
///
/// # Example
/// ```
/// use shunt::error::SourcePointer;
///
/// let at = SourcePointer::new("2 + foo", 4);
/// assert_eq!(at.to_string(), "2 + foo\n    ^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePointer {
    /// The full expression text.
    pub source: String,
    /// Byte offset of the position being pointed at.
    pub offset: usize,
}

impl SourcePointer {
    #[must_use]
    pub fn new(source: &str, offset: usize) -> Self {
        Self { source: source.to_string(),
               offset }
    }

    /// Points just past the last character of `source`.
    #[must_use]
    pub fn end_of(source: &str) -> Self {
        Self::new(source, source.len())
    }

    /// Zero-based character column of the offset.
    ///
    /// Offsets are byte positions, so anything before the offset is counted
    /// in characters to keep the caret aligned with multi-byte input. An
    /// offset past the end of the source clamps to the end.
    #[must_use]
    pub fn column(&self) -> usize {
        let mut end = self.offset.min(self.source.len());
        while !self.source.is_char_boundary(end) {
            end -= 1;
        }
        self.source[..end].chars().count()
    }
}

impl fmt::Display for SourcePointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}^", self.source, " ".repeat(self.column()))
    }
}
