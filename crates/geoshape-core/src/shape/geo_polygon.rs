//! Polygon with geographic vertices.

use crate::{
    error::Result,
    geo::LatLong,
    paint::Paint,
    shape::{ShapeType, check_not_empty},
};

/// Polygon whose vertices are latitude/longitude.
///
/// Vertices are kept in the given order, duplicates included. Edges join
/// consecutive vertices and the last vertex joins the first.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPolygon {
    vertices: Vec<LatLong>,
    paint: Paint,
}

impl GeoPolygon {
    pub const SHAPE_TYPE: ShapeType = ShapeType::GeoPolygon;

    /// Creates a new polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if `vertices` is empty.
    pub fn new(vertices: impl Into<Vec<LatLong>>, paint: Paint) -> Result<Self> {
        let vertices = vertices.into();
        check_not_empty(Self::SHAPE_TYPE, &vertices, "vertex")?;
        Ok(Self { vertices, paint })
    }

    pub fn shape_type(&self) -> ShapeType {
        Self::SHAPE_TYPE
    }

    pub fn vertices(&self) -> &[LatLong] {
        &self.vertices
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }
}
