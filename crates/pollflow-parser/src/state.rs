//! The flow parser's state machine.
//!
//! Parsing is a fold of [`step`] over the source lines. [`FlowState`] holds
//! the open process node (if any) and whether the parser is inside that
//! node's pollutant list. Each step consumes the state and returns a
//! [`Transition`]: the next state, the node closed by this line (a new
//! process header closes the previous one) and at most one advisory.

use log::{debug, trace};

use pollflow_core::{
    model::ProcessNode,
    pollutant::{DigitRule, PollutantCategory},
};

use crate::{
    error::{Diagnostic, ErrorCode},
    line::Line,
    recognize::{LineKind, POLLUTANT_LIST_MARKER, classify},
    span::Span,
};

#[derive(Debug, Clone)]
struct OpenNode {
    node: ProcessNode,
    header: Span,
}

/// Parser state between two lines.
#[derive(Debug, Clone, Default)]
pub struct FlowState {
    open: Option<OpenNode>,
    in_pollutant_list: bool,
    next_index: usize,
}

/// Result of feeding one line to [`step`].
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: FlowState,
    /// The node closed by this line.
    pub emitted: Option<ProcessNode>,
    pub advisory: Option<Diagnostic>,
}

impl FlowState {
    /// The initial state: no open node, outside any pollutant list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node currently being filled.
    pub fn open_node(&self) -> Option<&ProcessNode> {
        self.open.as_ref().map(|open| &open.node)
    }

    pub fn in_pollutant_list(&self) -> bool {
        self.in_pollutant_list
    }

    /// Closes the open node at end of input.
    pub fn finish(self) -> Option<ProcessNode> {
        self.open.map(|open| open.node)
    }

    fn open_process(&mut self, title: &str, header: Span) -> Option<ProcessNode> {
        let closed = self.open.take().map(|open| open.node);
        let node = ProcessNode::new(self.next_index, title);
        debug!(id:% = node.id(), title; "Opened process node");

        self.next_index += 1;
        self.open = Some(OpenNode { node, header });
        self.in_pollutant_list = false;
        closed
    }

    fn describe(&mut self, line: &Line<'_>, text: &str) -> Option<Diagnostic> {
        let Some(open) = self.open.as_mut() else {
            return Some(
                Diagnostic::warning("process description without a process")
                    .with_code(ErrorCode::E001)
                    .with_label(line.span(), "ignored")
                    .with_help("add a `### ` process header above this line"),
            );
        };

        open.node.set_description(text);
        None
    }

    fn add_pollutant(&mut self, line: &Line<'_>, label: &str, text: &str) -> Option<Diagnostic> {
        let category = label.chars().next().and_then(PollutantCategory::from_code);

        if !self.in_pollutant_list {
            // Bold bullets with other labels are ordinary prose.
            if category.is_none() {
                return None;
            }
            let mut diagnostic = Diagnostic::warning(format!(
                "pollutant entry `{label}` outside a pollutant list"
            ))
            .with_code(ErrorCode::E003)
            .with_label(line.span(), "ignored")
            .with_help(format!("add `{POLLUTANT_LIST_MARKER}` above the entries"));
            if let Some(open) = &self.open {
                diagnostic = diagnostic.with_secondary_label(
                    open.header,
                    format!("process `{}` starts here", open.node.title()),
                );
            }
            return Some(diagnostic);
        }

        let Some(open) = self.open.as_mut() else {
            return Some(
                Diagnostic::warning(format!("pollutant entry `{label}` without a process"))
                    .with_code(ErrorCode::E002)
                    .with_label(line.span(), "ignored")
                    .with_help("add a `### ` process header above the pollutant list"),
            );
        };

        let Some(category) = category else {
            return Some(
                Diagnostic::warning(format!("unknown pollutant category in `{label}`"))
                    .with_code(ErrorCode::E101)
                    .with_label(line.span(), "entry skipped")
                    .with_help("pollutant labels start with `G`, `W`, `S` or `N`"),
            );
        };

        if !category.validate_label(label) {
            let code = category.code();
            let help = match category.digit_rule() {
                DigitRule::AtLeastOne => {
                    format!("`{code}` labels need at least one digit, e.g. `{code}1`")
                }
                DigitRule::Optional => format!("`{code}` may only be followed by digits"),
            };
            return Some(
                Diagnostic::warning(format!("invalid pollutant label `{label}`"))
                    .with_code(ErrorCode::E102)
                    .with_label(line.span(), "entry skipped")
                    .with_help(help),
            );
        }

        if text.is_empty() {
            return Some(
                Diagnostic::warning(format!("pollutant `{label}` has no description"))
                    .with_code(ErrorCode::E004)
                    .with_label(line.span(), "entry skipped")
                    .with_help(format!(
                        "write the pollutant after the separator: `- **{label}**: ...`"
                    )),
            );
        }

        let process_id = open.node.id().clone();
        let pollutant = open.node.push_pollutant(category, label, text);
        debug!(
            process:% = process_id,
            pollutant:% = pollutant.id(),
            category:% = category;
            "Added pollutant"
        );
        None
    }
}

impl Transition {
    fn unchanged(state: FlowState) -> Self {
        Self {
            state,
            emitted: None,
            advisory: None,
        }
    }
}

/// Applies one line to the state.
///
/// Rules are tried in priority order: process header, description,
/// pollutant-list header, pollutant entry. Blank and unrecognized lines
/// leave the state untouched.
///
/// # Examples
///
/// ```
/// # use pollflow_parser::{FlowState, Line, Span, step};
/// let header = Line::new(1, Span::new(0..13), 0, "### 1. 下料");
/// let transition = step(FlowState::new(), &header);
///
/// assert!(transition.emitted.is_none());
/// assert_eq!(transition.state.open_node().unwrap().title(), "下料");
/// ```
pub fn step(mut state: FlowState, line: &Line<'_>) -> Transition {
    let kind = classify(line.text());
    trace!(
        line = line.number(),
        indent = line.indent(),
        in_pollutant_list = state.in_pollutant_list,
        kind:? = kind;
        "Classified line"
    );

    match kind {
        LineKind::Blank | LineKind::Other => Transition::unchanged(state),
        LineKind::ProcessHeader { title } => {
            let emitted = state.open_process(title, line.span());
            Transition {
                state,
                emitted,
                advisory: None,
            }
        }
        LineKind::Description { text } => {
            let advisory = state.describe(line, text);
            Transition {
                state,
                emitted: None,
                advisory,
            }
        }
        LineKind::PollutantListHeader => {
            state.in_pollutant_list = true;
            Transition::unchanged(state)
        }
        LineKind::PollutantEntry { label, text } => {
            let advisory = state.add_pollutant(line, label, text);
            Transition {
                state,
                emitted: None,
                advisory,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Line<'_> {
        Line::new(1, Span::new(0..text.len()), 0, text)
    }

    fn run(state: FlowState, text: &str) -> Transition {
        step(state, &line(text))
    }

    #[test]
    fn test_header_closes_previous_node() {
        let first = run(FlowState::new(), "### 1. 下料");
        assert!(first.emitted.is_none());

        let second = run(first.state, "### 2. 焊接");
        let closed = second.emitted.expect("first node is closed");
        assert_eq!(closed.title(), "下料");
        assert_eq!(closed.id().as_str(), "process-1");
        assert_eq!(second.state.open_node().unwrap().id().as_str(), "process-2");
    }

    #[test]
    fn test_header_resets_pollutant_list_flag() {
        let state = run(FlowState::new(), "### 1. 下料").state;
        let state = run(state, "- **污染物**").state;
        assert!(state.in_pollutant_list());

        let state = run(state, "### 2. 焊接").state;
        assert!(!state.in_pollutant_list());
    }

    #[test]
    fn test_blank_line_keeps_state() {
        let state = run(FlowState::new(), "### 1. 下料").state;
        let state = run(state, "- **污染物**").state;
        let transition = run(state, "");

        assert!(transition.state.in_pollutant_list());
        assert!(transition.emitted.is_none());
        assert!(transition.advisory.is_none());
    }

    #[test]
    fn test_description_without_node() {
        let transition = run(FlowState::new(), "- **工艺流程描述**：切割。");
        let advisory = transition.advisory.expect("advisory");
        assert_eq!(advisory.code(), Some(ErrorCode::E001));
        assert!(advisory.severity().is_warning());
    }

    #[test]
    fn test_entry_outside_list_points_at_process() {
        let state = run(FlowState::new(), "### 1. 下料").state;
        let transition = run(state, "- **S1**: 金属边角料");

        let advisory = transition.advisory.expect("advisory");
        assert_eq!(advisory.code(), Some(ErrorCode::E003));
        assert_eq!(advisory.labels().len(), 2);
        assert!(advisory.labels()[1].is_secondary());
        assert!(transition.state.open_node().unwrap().pollutants().is_empty());
    }

    #[test]
    fn test_unknown_bold_bullet_outside_list_is_silent() {
        let state = run(FlowState::new(), "### 1. 下料").state;
        let transition = run(state, "- **X1**: 其它");
        assert!(transition.advisory.is_none());
    }

    #[test]
    fn test_entry_in_list_without_node() {
        let state = run(FlowState::new(), "- **污染物**").state;
        let advisory = run(state, "- **G1**: 粉尘").advisory.expect("advisory");
        assert_eq!(advisory.code(), Some(ErrorCode::E002));
    }

    #[test]
    fn test_entry_validation_codes() {
        let state = run(FlowState::new(), "### 1. 下料").state;
        let state = run(state, "- **污染物**").state;

        let cases = [
            ("- **X1**: 未知", ErrorCode::E101),
            ("- **G**: 粉尘", ErrorCode::E102),
            ("- **N2a**: 噪声", ErrorCode::E102),
            ("- **W1**:", ErrorCode::E004),
        ];
        for (text, expected) in cases {
            let transition = run(state.clone(), text);
            assert_eq!(
                transition.advisory.map(|d| d.code()),
                Some(Some(expected)),
                "line {text:?}"
            );
            assert!(transition.state.open_node().unwrap().pollutants().is_empty());
        }
    }

    #[test]
    fn test_valid_entries_are_appended_in_order() {
        let state = run(FlowState::new(), "### 1. 下料").state;
        let state = run(state, "- **污染物**").state;
        let state = run(state, "- **S1**: 金属边角料").state;
        let state = run(state, "- **N**：设备噪声").state;

        let node = state.finish().expect("open node");
        let labels: Vec<_> = node.pollutants().iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["S1", "N"]);
        assert_eq!(node.pollutants()[1].category(), PollutantCategory::Noise);
        assert_eq!(node.pollutants()[1].description(), "设备噪声");
    }

    #[test]
    fn test_finish_without_node() {
        assert!(FlowState::new().finish().is_none());
    }
}
