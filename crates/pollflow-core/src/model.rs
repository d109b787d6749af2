//! Process nodes and their pollutants.
//!
//! A parsed process flow is an ordered `Vec<ProcessNode>`: the vector order is
//! the flow order, and each node owns its pollutants in source order. Nodes
//! and pollutants are created fresh for every parse and never shared.

use std::fmt;

use crate::pollutant::{PollutantCategory, Side};

/// Identifier of a pollutant, unique within its process node.
///
/// Derived from the label. When a node lists the same label more than once,
/// later occurrences get a `#n` suffix (`G1`, `G1#2`) so that both entries
/// keep a distinct identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PollutantId(String);

impl PollutantId {
    fn from_label(label: &str, occurrence: usize) -> Self {
        if occurrence <= 1 {
            Self(label.to_string())
        } else {
            Self(format!("{label}#{occurrence}"))
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PollutantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single pollutant emitted by a process step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pollutant {
    id: PollutantId,
    category: PollutantCategory,
    label: String,
    description: String,
}

impl Pollutant {
    /// Returns the pollutant's identifier.
    pub fn id(&self) -> &PollutantId {
        &self.id
    }

    /// Returns the pollutant's category.
    pub fn category(&self) -> PollutantCategory {
        self.category
    }

    /// Returns the label, e.g. `"G1"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Identifier of a process node: `process-<n>` where `n` is its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// Creates the identifier for the node at the given 0-based index.
    pub fn from_index(index: usize) -> Self {
        Self(format!("process-{}", index + 1))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One step of the process flow.
///
/// # Examples
///
/// ```
/// # use pollflow_core::model::ProcessNode;
/// # use pollflow_core::pollutant::{PollutantCategory, Side};
/// let mut node = ProcessNode::new(0, "下料");
/// node.set_description("切割管材。");
/// node.push_pollutant(PollutantCategory::SolidWaste, "S1", "金属边角料");
/// node.push_pollutant(PollutantCategory::Noise, "N", "设备噪声");
///
/// assert_eq!(node.id().as_str(), "process-1");
/// assert_eq!(node.pollutants().len(), 2);
/// assert_eq!(node.pollutants_on(Side::Left).count(), 0);
/// assert_eq!(node.pollutants_on(Side::Right).count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessNode {
    id: NodeId,
    index: usize,
    title: String,
    description: String,
    pollutants: Vec<Pollutant>,
}

impl ProcessNode {
    /// Creates a node at the given 0-based position with an empty description.
    pub fn new(index: usize, title: impl Into<String>) -> Self {
        Self {
            id: NodeId::from_index(index),
            index,
            title: title.into(),
            description: String::new(),
            pollutants: Vec::new(),
        }
    }

    /// Returns the node identifier.
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Returns the 0-based position of the node in the flow.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the process step name.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the process description, empty when none was given.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replaces the process description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Returns the pollutants in source order.
    pub fn pollutants(&self) -> &[Pollutant] {
        &self.pollutants
    }

    /// Returns the pollutants drawn on the given side, in source order.
    pub fn pollutants_on(&self, side: Side) -> impl Iterator<Item = &Pollutant> {
        self.pollutants
            .iter()
            .filter(move |pollutant| pollutant.category.side() == side)
    }

    /// Appends a pollutant. Duplicate labels are kept; their ids are
    /// disambiguated with an occurrence suffix.
    pub fn push_pollutant(
        &mut self,
        category: PollutantCategory,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> &Pollutant {
        let label = label.into();
        let occurrence = 1 + self
            .pollutants
            .iter()
            .filter(|existing| existing.label == label)
            .count();

        let index = self.pollutants.len();
        self.pollutants.push(Pollutant {
            id: PollutantId::from_label(&label, occurrence),
            category,
            label,
            description: description.into(),
        });
        &self.pollutants[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_is_one_based() {
        assert_eq!(ProcessNode::new(0, "a").id().as_str(), "process-1");
        assert_eq!(ProcessNode::new(4, "e").id().as_str(), "process-5");
    }

    #[test]
    fn test_duplicate_labels_are_kept_with_unique_ids() {
        let mut node = ProcessNode::new(0, "焊接");
        node.push_pollutant(PollutantCategory::Gas, "G1", "焊接烟尘");
        node.push_pollutant(PollutantCategory::Gas, "G1", "焊接烟尘");
        node.push_pollutant(PollutantCategory::Gas, "G1", "焊接烟尘");

        let ids: Vec<_> = node.pollutants().iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, ["G1", "G1#2", "G1#3"]);
        assert!(node.pollutants().iter().all(|p| p.label() == "G1"));
    }

    #[test]
    fn test_pollutants_on_preserves_order() {
        let mut node = ProcessNode::new(0, "清洗");
        node.push_pollutant(PollutantCategory::Wastewater, "W1", "清洗废水");
        node.push_pollutant(PollutantCategory::SolidWaste, "S1", "废渣");
        node.push_pollutant(PollutantCategory::Gas, "G1", "酸雾");

        let left: Vec<_> = node.pollutants_on(Side::Left).map(|p| p.label()).collect();
        let right: Vec<_> = node.pollutants_on(Side::Right).map(|p| p.label()).collect();
        assert_eq!(left, ["W1", "G1"]);
        assert_eq!(right, ["S1"]);
    }
}
