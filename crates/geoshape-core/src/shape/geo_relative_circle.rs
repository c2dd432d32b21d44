//! Screen-sized circle anchored to a geographic point.

use crate::{
    error::Result,
    geo::{LatLong, Vector2d},
    paint::Paint,
    shape::{ShapeType, check_offsets, check_radius},
};

/// Circle whose centre is defined as an offset in pixels from a reference
/// latitude/longitude, with a radius in pixels.
///
/// Only the reference point follows the map; the circle keeps the same size
/// on screen at every zoom level. Offsets are in pixels, x to the right and
/// y downward.
///
/// # Examples
///
/// ```
/// use geoshape_core::{
///     color::Color,
///     geo::{LatLong, Vector2d},
///     paint::Paint,
///     shape::GeoRelativeCircle,
/// };
///
/// let marker = GeoRelativeCircle::new(
///     LatLong::new(48.85, 2.35),
///     Vector2d::new(0.0, -12.0),
///     6.0,
///     Paint::complete(Color::new("black").unwrap(), Color::new("yellow").unwrap()),
/// )
/// .unwrap();
///
/// assert_eq!(marker.centre_offset(), Vector2d::new(0.0, -12.0));
/// assert_eq!(marker.radius(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRelativeCircle {
    centre_ref: LatLong,
    centre_offset: Vector2d,
    radius: f64,
    paint: Paint,
}

impl GeoRelativeCircle {
    pub const SHAPE_TYPE: ShapeType = ShapeType::GeoRelativeCircle;

    /// Creates a new screen-sized circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or not finite, or if the
    /// centre offset is not finite.
    pub fn new(
        centre_ref: LatLong,
        centre_offset: Vector2d,
        radius: f64,
        paint: Paint,
    ) -> Result<Self> {
        check_offsets(Self::SHAPE_TYPE, &[centre_offset])?;
        check_radius(Self::SHAPE_TYPE, radius)?;
        Ok(Self {
            centre_ref,
            centre_offset,
            radius,
            paint,
        })
    }

    pub fn shape_type(&self) -> ShapeType {
        Self::SHAPE_TYPE
    }

    /// Returns the geographic reference point.
    pub fn centre_ref(&self) -> LatLong {
        self.centre_ref
    }

    /// Returns the pixel offset of the centre from the reference point.
    pub fn centre_offset(&self) -> Vector2d {
        self.centre_offset
    }

    /// Returns the radius in pixels.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }
}
