//! Open line through geographic points.

use crate::{
    color::Color,
    error::Result,
    geo::LatLong,
    shape::{ShapeType, check_not_empty},
};

/// Polyline whose points are latitude/longitude.
///
/// A line has no interior, so it is drawn with a single color instead of a
/// [`Paint`](crate::paint::Paint).
///
/// # Examples
///
/// ```
/// use geoshape_core::{color::Color, geo::LatLong, shape::GeoPolyline};
///
/// let green = Color::new("green").unwrap();
/// let route = [
///     LatLong::new(51.50, -0.12),
///     LatLong::new(51.51, -0.10),
///     LatLong::new(51.52, -0.09),
/// ];
///
/// let line = GeoPolyline::new(route, green).unwrap();
/// assert_eq!(line.points(), route);
/// assert_eq!(line.colour(), green);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPolyline {
    points: Vec<LatLong>,
    colour: Color,
}

impl GeoPolyline {
    pub const SHAPE_TYPE: ShapeType = ShapeType::GeoPolyline;

    /// Creates a new polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty.
    pub fn new(points: impl Into<Vec<LatLong>>, colour: Color) -> Result<Self> {
        let points = points.into();
        check_not_empty(Self::SHAPE_TYPE, &points, "point")?;
        Ok(Self { points, colour })
    }

    pub fn shape_type(&self) -> ShapeType {
        Self::SHAPE_TYPE
    }

    pub fn points(&self) -> &[LatLong] {
        &self.points
    }

    pub fn colour(&self) -> Color {
        self.colour
    }
}
