//! Splitting the source into lines.

use crate::span::Span;

/// One source line, trimmed, with enough position information for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    number: usize,
    span: Span,
    indent: usize,
    text: &'a str,
}

impl<'a> Line<'a> {
    /// Creates a line. `number` is 1-based.
    pub fn new(number: usize, span: Span, indent: usize, text: &'a str) -> Self {
        Self {
            number,
            span,
            indent,
            text,
        }
    }

    /// 1-based line number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Byte range of the trimmed text within the source.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Number of leading whitespace characters before the text.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// The line with surrounding whitespace removed.
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Splits `source` on `\n` into trimmed [`Line`]s.
///
/// A trailing `\r` is treated as whitespace, so CRLF input behaves like LF.
pub fn lines(source: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    source.split('\n').enumerate().map(move |(index, raw)| {
        let line_start = offset;
        offset += raw.len() + 1;

        let without_leading = raw.trim_start();
        let leading = raw.len() - without_leading.len();
        let text = without_leading.trim_end();
        let indent = raw[..leading].chars().count();
        let start = line_start + leading;

        Line::new(index + 1, Span::new(start..start + text.len()), indent, text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_track_offsets_and_indent() {
        let source = "### 1. 下料\n  - **S1**: 边角料\r\n\n";
        let lines: Vec<_> = lines(source).collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].number(), 1);
        assert_eq!(lines[0].text(), "### 1. 下料");
        assert_eq!(lines[0].indent(), 0);

        assert_eq!(lines[1].text(), "- **S1**: 边角料");
        assert_eq!(lines[1].indent(), 2);
        assert_eq!(&source[lines[1].span().range()], "- **S1**: 边角料");

        assert!(lines[2].is_blank());
        assert!(lines[3].is_blank());
    }

    #[test]
    fn test_empty_source_is_one_blank_line() {
        let lines: Vec<_> = lines("").collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_blank());
    }
}
