//! TOML shape documents.
//!
//! A document is a list of `[[shapes]]` tables, each tagged with its shape
//! `type`. Coordinates are `[latitude, longitude]` pairs, pixel offsets are
//! `[x, y]` pairs and colors are CSS color strings.
//!
//! ```toml
//! [[shapes]]
//! type = "geo_circle"
//! centre = [51.5, -0.12]
//! radius = { value = 100.0, unit = "meters" }
//! fill = "blue"
//!
//! [[shapes]]
//! type = "geo_relative_polyline"
//! reference = [51.5, -0.12]
//! points = [[0.0, 0.0], [0.0, 20.0]]
//! colour = "green"
//! ```
//!
//! Entries are plain data. [`ShapeEntry::into_shape`] turns one into a
//! validated [`Shape`], filling in missing styling from [`StyleDefaults`].

use log::trace;
use serde::Deserialize;

use geoshape_core::{
    color::Color,
    error::InvalidGeometryError,
    geo::{LatLong, Length, LengthUnit, Vector2d},
    paint::Paint,
    shape::{
        GeoCircle, GeoPolygon, GeoPolyline, GeoRelativeCircle, GeoRelativePolygon,
        GeoRelativePolyline, Shape, ShapeType,
    },
};

use crate::{config::StyleConfig, error::GeoshapeError};

/// A parsed, not yet validated, shape document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeDocument {
    #[serde(default)]
    shapes: Vec<ShapeEntry>,
}

impl ShapeDocument {
    /// Borrow the entries in document order.
    pub fn shapes(&self) -> &[ShapeEntry] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<ShapeEntry> {
        self.shapes
    }
}

/// A radius with an optional unit (meters when omitted).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LengthEntry {
    pub value: f64,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl From<LengthEntry> for Length {
    fn from(entry: LengthEntry) -> Self {
        Length::new(entry.value, entry.unit)
    }
}

/// One `[[shapes]]` table.
///
/// Keys that do not belong to the entry's shape type are rejected, so a
/// misspelled style key never falls back to the configured defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum ShapeEntry {
    GeoCircle {
        centre: [f64; 2],
        radius: LengthEntry,
        stroke: Option<String>,
        fill: Option<String>,
    },
    GeoPolygon {
        vertices: Vec<[f64; 2]>,
        stroke: Option<String>,
        fill: Option<String>,
    },
    GeoPolyline {
        points: Vec<[f64; 2]>,
        colour: Option<String>,
    },
    GeoRelativeCircle {
        centre_ref: [f64; 2],
        #[serde(default)]
        centre_offset: [f64; 2],
        radius: f64,
        stroke: Option<String>,
        fill: Option<String>,
    },
    GeoRelativePolygon {
        reference: [f64; 2],
        vertices: Vec<[f64; 2]>,
        stroke: Option<String>,
        fill: Option<String>,
    },
    GeoRelativePolyline {
        reference: [f64; 2],
        points: Vec<[f64; 2]>,
        colour: Option<String>,
    },
}

/// Styling used for entries that specify none of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleDefaults {
    paint: Option<Paint>,
    line: Option<Color>,
}

impl StyleDefaults {
    pub fn new(paint: Option<Paint>, line: Option<Color>) -> Self {
        Self { paint, line }
    }

    /// Resolves the defaults from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeoshapeError::Config`] if a configured color is invalid.
    pub fn from_config(style: &StyleConfig) -> Result<Self, GeoshapeError> {
        let paint = style.default_paint().map_err(GeoshapeError::Config)?;
        let line = style.default_stroke().map_err(GeoshapeError::Config)?;
        Ok(Self { paint, line })
    }
}

impl ShapeEntry {
    /// Returns the shape type this entry describes.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::GeoCircle { .. } => ShapeType::GeoCircle,
            Self::GeoPolygon { .. } => ShapeType::GeoPolygon,
            Self::GeoPolyline { .. } => ShapeType::GeoPolyline,
            Self::GeoRelativeCircle { .. } => ShapeType::GeoRelativeCircle,
            Self::GeoRelativePolygon { .. } => ShapeType::GeoRelativePolygon,
            Self::GeoRelativePolyline { .. } => ShapeType::GeoRelativePolyline,
        }
    }

    /// Validates this entry and builds the corresponding [`Shape`].
    ///
    /// `index` is the entry's position in its document and is only used for
    /// error reporting.
    ///
    /// # Errors
    ///
    /// Returns an error for unparsable colors, missing styling with no
    /// default, and geometry rejected by the shape constructors.
    pub fn into_shape(self, index: usize, defaults: &StyleDefaults) -> Result<Shape, GeoshapeError> {
        let shape_type = self.shape_type();
        let geometry = |source: InvalidGeometryError| GeoshapeError::Geometry { index, source };

        let shape: Shape = match self {
            Self::GeoCircle {
                centre,
                radius,
                stroke,
                fill,
            } => {
                let paint = resolve_paint(index, shape_type, stroke, fill, defaults)?;
                GeoCircle::new(latlong(centre), radius.into(), paint)
                    .map_err(geometry)?
                    .into()
            }
            Self::GeoPolygon {
                vertices,
                stroke,
                fill,
            } => {
                let paint = resolve_paint(index, shape_type, stroke, fill, defaults)?;
                GeoPolygon::new(latlongs(vertices), paint)
                    .map_err(geometry)?
                    .into()
            }
            Self::GeoPolyline { points, colour } => {
                let colour = resolve_line(index, shape_type, colour, defaults)?;
                GeoPolyline::new(latlongs(points), colour)
                    .map_err(geometry)?
                    .into()
            }
            Self::GeoRelativeCircle {
                centre_ref,
                centre_offset,
                radius,
                stroke,
                fill,
            } => {
                let paint = resolve_paint(index, shape_type, stroke, fill, defaults)?;
                GeoRelativeCircle::new(latlong(centre_ref), vector(centre_offset), radius, paint)
                    .map_err(geometry)?
                    .into()
            }
            Self::GeoRelativePolygon {
                reference,
                vertices,
                stroke,
                fill,
            } => {
                let paint = resolve_paint(index, shape_type, stroke, fill, defaults)?;
                GeoRelativePolygon::new(latlong(reference), vectors(vertices), paint)
                    .map_err(geometry)?
                    .into()
            }
            Self::GeoRelativePolyline {
                reference,
                points,
                colour,
            } => {
                let colour = resolve_line(index, shape_type, colour, defaults)?;
                GeoRelativePolyline::new(latlong(reference), vectors(points), colour)
                    .map_err(geometry)?
                    .into()
            }
        };

        trace!(index, shape:?; "Built shape");
        Ok(shape)
    }
}

fn latlong([latitude, longitude]: [f64; 2]) -> LatLong {
    LatLong::new(latitude, longitude)
}

fn latlongs(pairs: Vec<[f64; 2]>) -> Vec<LatLong> {
    pairs.into_iter().map(latlong).collect()
}

fn vector([x, y]: [f64; 2]) -> Vector2d {
    Vector2d::new(x, y)
}

fn vectors(pairs: Vec<[f64; 2]>) -> Vec<Vector2d> {
    pairs.into_iter().map(vector).collect()
}

fn parse_color(index: usize, value: &str) -> Result<Color, GeoshapeError> {
    Color::new(value).map_err(|message| GeoshapeError::Colour { index, message })
}

fn resolve_paint(
    index: usize,
    shape: ShapeType,
    stroke: Option<String>,
    fill: Option<String>,
    defaults: &StyleDefaults,
) -> Result<Paint, GeoshapeError> {
    let stroke = stroke.map(|s| parse_color(index, &s)).transpose()?;
    let fill = fill.map(|f| parse_color(index, &f)).transpose()?;

    match (stroke, fill) {
        (Some(stroke), Some(fill)) => Ok(Paint::complete(stroke, fill)),
        (Some(stroke), None) => Ok(Paint::stroke_only(stroke)),
        (None, Some(fill)) => Ok(Paint::fill_only(fill)),
        (None, None) => defaults
            .paint
            .ok_or(GeoshapeError::MissingPaint { index, shape }),
    }
}

fn resolve_line(
    index: usize,
    shape: ShapeType,
    colour: Option<String>,
    defaults: &StyleDefaults,
) -> Result<Color, GeoshapeError> {
    match colour {
        Some(colour) => parse_color(index, &colour),
        None => defaults
            .line
            .ok_or(GeoshapeError::MissingPaint { index, shape }),
    }
}
