//! Pollflow Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Pollflow parser,
//! layout and rendering crates. It includes:
//!
//! - **Geometry**: Points, sizes, bounds and insets ([`geometry`] module)
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Pollutants**: The four pollutant categories and their label grammar
//!   ([`pollutant`] module)
//! - **Model**: Process nodes and their pollutants ([`model`] module)
//! - **Draw**: Stroke definitions and typed drawing primitives ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod model;
pub mod pollutant;
