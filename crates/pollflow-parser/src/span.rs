//! Byte ranges into the markdown source.

use std::ops::Range;

/// A half-open byte range `start..end` into the parsed source text.
///
/// Spans are attached to diagnostic labels so that front ends can show the
/// offending line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a span from a byte range.
    ///
    /// ```
    /// # use pollflow_parser::Span;
    /// let span = Span::new(4..10);
    /// assert_eq!(span.start(), 4);
    /// assert_eq!(span.len(), 6);
    /// ```
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the byte range covered by this span.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}
