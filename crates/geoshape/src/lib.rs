//! Geoshape - validated shapes for map rendering.
//!
//! Builds [`Shape`](shape::Shape) values from TOML shape documents. Every
//! entry goes through the validating constructors of `geoshape-core`, so the
//! shapes handed to a renderer are always well formed.

pub mod config;
pub mod document;

mod error;
mod summary;

pub use geoshape_core::{color, geo, paint, shape};

pub use error::GeoshapeError;
pub use geoshape_core::error::InvalidGeometryError;
pub use summary::ShapeSummary;

use log::{debug, info, trace};

use config::AppConfig;
use document::{ShapeDocument, StyleDefaults};
use shape::Shape;

/// Builder for turning shape documents into validated shapes.
///
/// # Examples
///
/// ```
/// use geoshape::{ShapeBuilder, config::AppConfig, shape::ShapeType};
///
/// let source = r#"
///     [[shapes]]
///     type = "geo_polyline"
///     points = [[51.5, -0.12], [51.6, -0.10]]
///     colour = "green"
/// "#;
///
/// let builder = ShapeBuilder::new(AppConfig::default());
/// let shapes = builder.parse(source).expect("Failed to parse");
///
/// assert_eq!(shapes.len(), 1);
/// assert_eq!(shapes[0].shape_type(), ShapeType::GeoPolyline);
/// ```
#[derive(Debug, Default)]
pub struct ShapeBuilder {
    config: AppConfig,
}

impl ShapeBuilder {
    /// Create a new shape builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including default styling
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML shape document into validated shapes.
    ///
    /// Shapes are returned in document order.
    ///
    /// # Errors
    ///
    /// Returns `GeoshapeError` for TOML syntax errors, unknown shape types,
    /// invalid colors, missing styling and rejected geometry. Building stops
    /// at the first invalid entry.
    pub fn parse(&self, source: &str) -> Result<Vec<Shape>, GeoshapeError> {
        info!("Parsing shape document");

        let document: ShapeDocument = toml::from_str(source)
            .map_err(|err| GeoshapeError::new_document_error(&err, source))?;

        debug!(entries = document.shapes().len(); "Shape document parsed");
        trace!(document:?; "Parsed document");

        self.build(document)
    }

    /// Validate an already parsed document into shapes.
    ///
    /// # Errors
    ///
    /// See [`ShapeBuilder::parse`].
    pub fn build(&self, document: ShapeDocument) -> Result<Vec<Shape>, GeoshapeError> {
        let defaults = StyleDefaults::from_config(self.config.style())?;

        let shapes = document
            .into_shapes()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_shape(index, &defaults))
            .collect::<Result<Vec<_>, _>>()?;

        info!(shapes_count = shapes.len(); "Shapes built successfully");
        Ok(shapes)
    }

    /// Summarize shapes by type.
    pub fn summarize(&self, shapes: &[Shape]) -> ShapeSummary {
        ShapeSummary::from_shapes(shapes)
    }
}
