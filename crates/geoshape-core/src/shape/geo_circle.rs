//! Circle with a geographic centre and a physical radius.

use crate::{
    error::Result,
    geo::{LatLong, Length},
    paint::Paint,
    shape::{ShapeType, check_radius},
};

/// Circle whose centre is defined by latitude/longitude.
///
/// The radius is a physical distance, so the circle grows and shrinks on
/// screen with the map zoom.
///
/// # Examples
///
/// ```
/// use geoshape_core::{
///     color::Color,
///     geo::{LatLong, Length, LengthUnit},
///     paint::Paint,
///     shape::GeoCircle,
/// };
///
/// let blue = Color::new("blue").unwrap();
/// let circle = GeoCircle::new(
///     LatLong::new(51.5, -0.12),
///     Length::new(100.0, LengthUnit::Meters),
///     Paint::fill_only(blue),
/// )
/// .unwrap();
///
/// assert_eq!(circle.centre(), LatLong::new(51.5, -0.12));
/// assert_eq!(circle.radius(), Length::new(100.0, LengthUnit::Meters));
/// assert_eq!(circle.paint().fill(), Some(blue));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoCircle {
    centre: LatLong,
    radius: Length,
    paint: Paint,
}

impl GeoCircle {
    pub const SHAPE_TYPE: ShapeType = ShapeType::GeoCircle;

    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius magnitude is negative or not finite.
    pub fn new(centre: LatLong, radius: Length, paint: Paint) -> Result<Self> {
        check_radius(Self::SHAPE_TYPE, radius.value())?;
        Ok(Self {
            centre,
            radius,
            paint,
        })
    }

    pub fn shape_type(&self) -> ShapeType {
        Self::SHAPE_TYPE
    }

    pub fn centre(&self) -> LatLong {
        self.centre
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }
}
