//! Screen-sized polyline anchored to a geographic point.

use crate::{
    color::Color,
    error::Result,
    geo::{LatLong, Vector2d},
    shape::{ShapeType, check_not_empty, check_offsets},
};

/// Polyline whose points are defined as pixel offsets from a reference
/// latitude/longitude.
///
/// Offset is in pixels (x axis is right and y axis is down).
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRelativePolyline {
    reference: LatLong,
    points: Vec<Vector2d>,
    colour: Color,
}

impl GeoRelativePolyline {
    pub const SHAPE_TYPE: ShapeType = ShapeType::GeoRelativePolyline;

    /// Creates a new screen-sized polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty or contains a non-finite offset.
    pub fn new(reference: LatLong, points: impl Into<Vec<Vector2d>>, colour: Color) -> Result<Self> {
        let points = points.into();
        check_not_empty(Self::SHAPE_TYPE, &points, "point")?;
        check_offsets(Self::SHAPE_TYPE, &points)?;
        Ok(Self {
            reference,
            points,
            colour,
        })
    }

    pub fn shape_type(&self) -> ShapeType {
        Self::SHAPE_TYPE
    }

    pub fn reference(&self) -> LatLong {
        self.reference
    }

    pub fn points(&self) -> &[Vector2d] {
        &self.points
    }

    pub fn colour(&self) -> Color {
        self.colour
    }
}
