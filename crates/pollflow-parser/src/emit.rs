//! Serializing process nodes back into the markdown template.

use std::fmt;

use pollflow_core::model::ProcessNode;

use crate::recognize::{DESCRIPTION_MARKER, POLLUTANT_LIST_MARKER, PROCESS_HEADER_PREFIX};

/// Heading the template puts above the process list.
pub const DOCUMENT_HEADING: &str = "## 工艺流程及污染物";

/// Writes `nodes` in the extraction template format.
///
/// Parsing the result yields nodes with the same titles, descriptions and
/// pollutant lists. Empty descriptions and empty pollutant lists are
/// omitted.
///
/// # Examples
///
/// ```
/// # use pollflow_core::model::ProcessNode;
/// # use pollflow_core::pollutant::PollutantCategory;
/// # use pollflow_parser::to_markdown;
/// let mut node = ProcessNode::new(0, "下料");
/// node.set_description("切割管材。");
/// node.push_pollutant(PollutantCategory::SolidWaste, "S1", "金属边角料");
///
/// let markdown = to_markdown(&[node]);
/// assert!(markdown.contains("### 1. 下料\n"));
/// assert!(markdown.contains("  - **S1**: 金属边角料\n"));
/// ```
pub fn to_markdown(nodes: &[ProcessNode]) -> String {
    Template(nodes).to_string()
}

struct Template<'a>(&'a [ProcessNode]);

impl fmt::Display for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{DOCUMENT_HEADING}")?;

        for (position, node) in self.0.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{PROCESS_HEADER_PREFIX}{}. {}", position + 1, node.title())?;

            if !node.description().is_empty() {
                writeln!(f, "{DESCRIPTION_MARKER}：{}", node.description())?;
            }

            if !node.pollutants().is_empty() {
                writeln!(f, "{POLLUTANT_LIST_MARKER}")?;
                for pollutant in node.pollutants() {
                    writeln!(f, "  - **{}**: {}", pollutant.label(), pollutant.description())?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pollflow_core::pollutant::PollutantCategory;

    use super::*;

    #[test]
    fn test_empty_flow_is_only_the_heading() {
        assert_eq!(to_markdown(&[]), "## 工艺流程及污染物\n");
    }

    #[test]
    fn test_layout_of_template() {
        let mut cutting = ProcessNode::new(0, "下料");
        cutting.set_description("切割管材。");
        cutting.push_pollutant(PollutantCategory::SolidWaste, "S1", "金属边角料");
        cutting.push_pollutant(PollutantCategory::Noise, "N", "设备噪声");
        let welding = ProcessNode::new(1, "焊接");

        let expected = "\
## 工艺流程及污染物

### 1. 下料
- **工艺流程描述**：切割管材。
- **污染物**
  - **S1**: 金属边角料
  - **N**: 设备噪声

### 2. 焊接
";
        assert_eq!(to_markdown(&[cutting, welding]), expected);
    }
}
