//! CLI logic for the geoshape document validator.
//!
//! Reads a shape document, validates every entry and reports how many shapes
//! of each type it contains.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use geoshape::{GeoshapeError, ShapeBuilder, ShapeSummary};

/// Run the geoshape CLI application
///
/// Validates the input document and returns the per-type summary of its
/// shapes. The caller decides how to print it.
///
/// # Errors
///
/// Returns `GeoshapeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document syntax errors
/// - Invalid colors, missing styling or rejected geometry
pub fn run(args: &Args) -> Result<ShapeSummary, GeoshapeError> {
    info!(input_path = args.input; "Validating shape document");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    let builder = ShapeBuilder::new(app_config);
    let shapes = builder.parse(&source)?;
    let summary = builder.summarize(&shapes);

    info!(
        shapes_count = summary.total(),
        relative_count = summary.relative();
        "Shape document is valid"
    );

    Ok(summary)
}
