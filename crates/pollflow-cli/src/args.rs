//! Command-line argument definitions for the Pollflow CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output format,
//! configuration file selection, and logging verbosity.

use std::path::Path;

use clap::{Parser, ValueEnum};

use pollflow::OutputFormat;

/// Command-line arguments for the Pollflow diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input markdown file
    #[arg(help = "Path to the input markdown file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Output formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Svg,
    Png,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Svg => OutputFormat::Svg,
            Format::Png => OutputFormat::Png,
        }
    }
}

impl Args {
    /// Returns the requested format, falling back to the output extension.
    ///
    /// `.png` (in any case) selects PNG; everything else is SVG.
    pub fn output_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        let is_png = Path::new(&self.output)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png {
            OutputFormat::Png
        } else {
            OutputFormat::Svg
        }
    }
}
