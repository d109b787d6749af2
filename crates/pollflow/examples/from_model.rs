//! Example: Creating a flow diagram from the process model
//!
//! This example demonstrates how to build process nodes programmatically
//! and render them, without parsing markdown.

use pollflow::{FlowBuilder, model::ProcessNode, pollutant::PollutantCategory};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building flow diagram from process model...\n");

    let mut cutting = ProcessNode::new(0, "下料");
    cutting.set_description("切割管材。");
    cutting.push_pollutant(PollutantCategory::SolidWaste, "S1", "金属边角料");
    cutting.push_pollutant(PollutantCategory::Noise, "N", "设备噪声");

    let mut welding = ProcessNode::new(1, "焊接");
    welding.set_description("管材焊接成型。");
    welding.push_pollutant(PollutantCategory::Gas, "G1", "焊接烟尘");
    welding.push_pollutant(PollutantCategory::SolidWaste, "S2", "焊渣");

    let mut painting = ProcessNode::new(2, "喷涂");
    painting.push_pollutant(PollutantCategory::Gas, "G2", "有机废气");
    painting.push_pollutant(PollutantCategory::Wastewater, "W1", "清洗废水");

    let nodes = [cutting, welding, painting];
    for node in &nodes {
        println!("  {} {} ({} pollutants)", node.id(), node.title(), node.pollutants().len());
    }

    // Print the markdown this model corresponds to
    println!("\n{}", pollflow_parser::to_markdown(&nodes));

    let builder = FlowBuilder::default();
    let layout = builder.layout(&nodes);
    println!(
        "Canvas: {}x{}, suggested zoom {:.2}",
        layout.dimensions().width(),
        layout.dimensions().height(),
        layout.optimal_scale()
    );

    let svg = builder.render_svg(&nodes)?;
    let output_path = "from_model_example.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to {output_path}");

    Ok(())
}
