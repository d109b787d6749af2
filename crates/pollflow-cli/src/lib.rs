//! CLI logic for the Pollflow diagram tool.
//!
//! This module contains the core CLI logic: reading a markdown file,
//! running it through the [`FlowBuilder`] pipeline and writing the diagram.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::fs;

use log::{info, warn};

use pollflow::{FlowBuilder, PollflowError};

use error_adapter::{Reportable, diagnostics_to_reportables};

/// Run the Pollflow CLI application
///
/// This function processes the input file through the Pollflow pipeline
/// and writes the resulting SVG or PNG to the output file. Parser
/// advisories are reported as warnings and do not fail the run.
///
/// # Errors
///
/// Returns `PollflowError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Rejected input (empty or too long)
/// - Markdown without any process step
/// - Rendering and export errors
pub fn run(args: &Args) -> Result<(), PollflowError> {
    let format = args.output_format();
    info!(
        input_path = args.input,
        output_path = args.output,
        format:?;
        "Processing flow"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = FlowBuilder::new(app_config);
    let parsed = builder.parse(&source)?;
    for reportable in diagnostics_to_reportables(parsed.diagnostics(), &source) {
        warn!("{}", render_report(&reportable));
    }

    // Render fully before touching the output so a failed run keeps the old file.
    let mut rendered = Vec::new();
    builder.export(parsed.nodes(), format, &mut rendered)?;
    fs::write(&args.output, rendered)?;

    info!(output_file = args.output; "Diagram exported successfully");

    Ok(())
}

/// Render a reportable as a graphical miette report.
pub fn render_report(reportable: &Reportable<'_>) -> String {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    if reporter.render_report(&mut writer, reportable).is_err() {
        // Fall back to the plain message if the report cannot be laid out.
        return reportable.to_string();
    }
    writer
}
