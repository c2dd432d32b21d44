//! Screen-sized polygon anchored to a geographic point.

use crate::{
    error::Result,
    geo::{LatLong, Vector2d},
    paint::Paint,
    shape::{ShapeType, check_not_empty, check_offsets},
};

/// Polygon whose vertices are defined as pixel offsets from a reference
/// latitude/longitude.
///
/// Offset is in pixels (x axis is right and y axis is down). Every vertex is
/// relative to the same reference point.
///
/// # Examples
///
/// ```
/// use geoshape_core::{
///     color::Color,
///     geo::{LatLong, Vector2d},
///     paint::Paint,
///     shape::GeoRelativePolygon,
/// };
///
/// let triangle = [
///     Vector2d::new(0.0, 0.0),
///     Vector2d::new(10.0, 0.0),
///     Vector2d::new(10.0, 10.0),
/// ];
/// let polygon = GeoRelativePolygon::new(
///     LatLong::new(40.71, -74.0),
///     triangle,
///     Paint::stroke_only(Color::new("red").unwrap()),
/// )
/// .unwrap();
///
/// assert_eq!(polygon.vertices(), triangle);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRelativePolygon {
    reference: LatLong,
    vertices: Vec<Vector2d>,
    paint: Paint,
}

impl GeoRelativePolygon {
    pub const SHAPE_TYPE: ShapeType = ShapeType::GeoRelativePolygon;

    /// Creates a new screen-sized polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if `vertices` is empty or contains a non-finite offset.
    pub fn new(reference: LatLong, vertices: impl Into<Vec<Vector2d>>, paint: Paint) -> Result<Self> {
        let vertices = vertices.into();
        check_not_empty(Self::SHAPE_TYPE, &vertices, "vertex")?;
        check_offsets(Self::SHAPE_TYPE, &vertices)?;
        Ok(Self {
            reference,
            vertices,
            paint,
        })
    }

    pub fn shape_type(&self) -> ShapeType {
        Self::SHAPE_TYPE
    }

    /// Returns the geographic reference point all vertices are offset from.
    pub fn reference(&self) -> LatLong {
        self.reference
    }

    pub fn vertices(&self) -> &[Vector2d] {
        &self.vertices
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }
}
