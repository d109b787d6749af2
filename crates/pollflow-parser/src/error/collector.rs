//! Collector for accumulating advisories during a parse.

use crate::error::Diagnostic;

/// Accumulates diagnostics in the order they are emitted.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        log::debug!(
            code:? = diagnostic.code(),
            severity:% = diagnostic.severity();
            "{}", diagnostic.message()
        );
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return every diagnostic in emission order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
