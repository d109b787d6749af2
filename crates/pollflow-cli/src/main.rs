//! Pollflow CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use pollflow_cli::{Args, error_adapter::to_reportables, render_report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Pollflow");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = pollflow_cli::run(&args) {
        // Render each diagnostic independently
        for reportable in to_reportables(&err) {
            error!("{}", render_report(&reportable));
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
