//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a span of the markdown source.
///
/// - **Primary labels** mark the skipped line itself.
/// - **Secondary labels** add context, such as the header of the process
///   the line would have belonged to.
///
/// ```text
/// warning[E003]: pollutant entry outside a pollutant list
///   |
/// 1 | ### 1. 下料
///   | ----------- process `下料` starts here
/// 2 |   - **S1**: 金属边角料
///   |   ^^^^^^^^^^^^^^^^^^^^ ignored
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Check if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(12..30), "entry skipped");

        assert_eq!(label.span().start(), 12);
        assert_eq!(label.span().end(), 30);
        assert_eq!(label.message(), "entry skipped");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(0..11), "process starts here");

        assert!(!label.is_primary());
        assert!(label.is_secondary());
    }
}
