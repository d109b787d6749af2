//! # Pollflow Parser
//!
//! Parser for the markdown template that describes a production process and
//! its pollutant emissions:
//!
//! ```markdown
//! ## 工艺流程及污染物
//!
//! ### 1. 下料
//! - **工艺流程描述**：切割管材。
//! - **污染物**
//!   - **S1**: 金属边角料
//!   - **N**: 设备噪声
//! ```
//!
//! ## Usage
//!
//! ```
//! # use pollflow_parser::parse;
//! let output = parse("### 1. 下料\n- **污染物**\n  - **S1**: 金属边角料");
//!
//! assert_eq!(output.nodes().len(), 1);
//! assert_eq!(output.nodes()[0].pollutants()[0].label(), "S1");
//! assert!(output.diagnostics().is_empty());
//! ```
//!
//! Parsing never fails. Unusable lines are skipped and reported as warning
//! [`Diagnostic`](error::Diagnostic)s; an input without any `### ` header
//! simply yields no nodes.

mod emit;
pub mod error;
mod line;
mod recognize;
mod span;
mod state;

pub use emit::{DOCUMENT_HEADING, to_markdown};
pub use line::{Line, lines};
pub use span::Span;
pub use state::{FlowState, Transition, step};

use log::{debug, info, trace};

use pollflow_core::model::ProcessNode;

use error::{Diagnostic, DiagnosticCollector};

/// Nodes extracted from a document plus the advisories raised on the way.
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    nodes: Vec<ProcessNode>,
    diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    /// The process nodes in flow order.
    pub fn nodes(&self) -> &[ProcessNode] {
        &self.nodes
    }

    /// Advisories in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_parts(self) -> (Vec<ProcessNode>, Vec<Diagnostic>) {
        (self.nodes, self.diagnostics)
    }
}

/// Parse a markdown document into process nodes.
///
/// A single forward pass folds [`step`] over [`lines`]; the node still open
/// at the end of input is closed last.
pub fn parse(source: &str) -> ParseOutput {
    info!(bytes = source.len(); "Parsing process flow");
    trace!(source; "Markdown source");

    let mut state = FlowState::new();
    let mut nodes = Vec::new();
    let mut collector = DiagnosticCollector::new();

    for line in lines(source) {
        let Transition {
            state: next,
            emitted,
            advisory,
        } = step(state, &line);

        state = next;
        nodes.extend(emitted);
        if let Some(advisory) = advisory {
            collector.emit(advisory);
        }
    }
    nodes.extend(state.finish());

    let diagnostics = collector.finish();
    debug!(
        nodes = nodes.len(),
        advisories = diagnostics.len();
        "Parsed process flow"
    );

    ParseOutput { nodes, diagnostics }
}
