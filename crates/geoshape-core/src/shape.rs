//! Shape variants and the [`Shape`] sum type.
//!
//! A shape is an immutable value describing what to draw: geometry plus a
//! style. Renderers dispatch on [`Shape`] (or on its [`ShapeType`]
//! discriminant) with an exhaustive `match`.
//!
//! # Variants
//!
//! | Variant | Geometry | Style |
//! |---|---|---|
//! | [`GeoCircle`] | centre + radius as a [`Length`](crate::geo::Length) | [`Paint`] |
//! | [`GeoPolygon`] | vertices in lat/long | [`Paint`] |
//! | [`GeoPolyline`] | points in lat/long | [`Color`] |
//! | [`GeoRelativeCircle`] | reference + pixel offset + pixel radius | [`Paint`] |
//! | [`GeoRelativePolygon`] | reference + pixel vertices | [`Paint`] |
//! | [`GeoRelativePolyline`] | reference + pixel points | [`Color`] |
//!
//! Absolute shapes scale with the map; relative shapes keep a constant size
//! on screen and only their reference point follows the map.
//!
//! # Adding a Variant
//!
//! A new variant needs a [`ShapeType`] case and a [`Shape`] case. Every
//! exhaustive match then stops compiling until it handles the new case:
//!
//! ```compile_fail
//! use geoshape_core::shape::ShapeType;
//!
//! fn describe(shape_type: ShapeType) -> &'static str {
//!     match shape_type {
//!         ShapeType::GeoCircle => "circle",
//!         ShapeType::GeoPolygon => "polygon",
//!         ShapeType::GeoPolyline => "polyline",
//!         ShapeType::GeoRelativeCircle => "relative circle",
//!         ShapeType::GeoRelativePolygon => "relative polygon",
//!     }
//! }
//! ```
//!
//! Fields are private and there are no setters:
//!
//! ```compile_fail
//! use geoshape_core::{color::Color, geo::{LatLong, Length}, paint::Paint, shape::GeoCircle};
//!
//! let mut circle = GeoCircle::new(
//!     LatLong::new(0.0, 0.0),
//!     Length::meters(10.0),
//!     Paint::fill_only(Color::default()),
//! )
//! .unwrap();
//! circle.radius = Length::meters(20.0);
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    error::{InvalidGeometryError, Result},
    geo::{LatLong, Vector2d},
    paint::Paint,
};

mod geo_circle;
mod geo_polygon;
mod geo_polyline;
mod geo_relative_circle;
mod geo_relative_polygon;
mod geo_relative_polyline;

pub use geo_circle::GeoCircle;
pub use geo_polygon::GeoPolygon;
pub use geo_polyline::GeoPolyline;
pub use geo_relative_circle::GeoRelativeCircle;
pub use geo_relative_polygon::GeoRelativePolygon;
pub use geo_relative_polyline::GeoRelativePolyline;

/// Discriminant identifying each [`Shape`] variant.
///
/// The names match external configuration strings (snake_case).
// Planned: arc, text and symbol shapes (absolute and relative) and
// canvas-space shapes that are not tied to a geographic position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeType {
    GeoCircle,
    GeoPolygon,
    GeoPolyline,
    GeoRelativeCircle,
    GeoRelativePolygon,
    GeoRelativePolyline,
}

impl ShapeType {
    /// Every shape type, in declaration order.
    pub const ALL: [ShapeType; 6] = [
        Self::GeoCircle,
        Self::GeoPolygon,
        Self::GeoPolyline,
        Self::GeoRelativeCircle,
        Self::GeoRelativePolygon,
        Self::GeoRelativePolyline,
    ];

    /// Returns the stable snake_case name of this shape type.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns true for shapes sized in screen pixels around a reference point.
    pub fn is_relative(self) -> bool {
        match self {
            Self::GeoCircle | Self::GeoPolygon | Self::GeoPolyline => false,
            Self::GeoRelativeCircle | Self::GeoRelativePolygon | Self::GeoRelativePolyline => true,
        }
    }

    /// Returns true for shapes styled with a [`Paint`], false for the
    /// polylines which carry a single [`Color`].
    pub fn uses_paint(self) -> bool {
        match self {
            Self::GeoCircle
            | Self::GeoPolygon
            | Self::GeoRelativeCircle
            | Self::GeoRelativePolygon => true,
            Self::GeoPolyline | Self::GeoRelativePolyline => false,
        }
    }
}

impl FromStr for ShapeType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "geo_circle" => Ok(Self::GeoCircle),
            "geo_polygon" => Ok(Self::GeoPolygon),
            "geo_polyline" => Ok(Self::GeoPolyline),
            "geo_relative_circle" => Ok(Self::GeoRelativeCircle),
            "geo_relative_polygon" => Ok(Self::GeoRelativePolygon),
            "geo_relative_polyline" => Ok(Self::GeoRelativePolyline),
            _ => Err(format!("unsupported shape type `{s}`")),
        }
    }
}

impl From<ShapeType> for &'static str {
    fn from(val: ShapeType) -> Self {
        match val {
            ShapeType::GeoCircle => "geo_circle",
            ShapeType::GeoPolygon => "geo_polygon",
            ShapeType::GeoPolyline => "geo_polyline",
            ShapeType::GeoRelativeCircle => "geo_relative_circle",
            ShapeType::GeoRelativePolygon => "geo_relative_polygon",
            ShapeType::GeoRelativePolyline => "geo_relative_polyline",
        }
    }
}

impl Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Any drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    GeoCircle(GeoCircle),
    GeoPolygon(GeoPolygon),
    GeoPolyline(GeoPolyline),
    GeoRelativeCircle(GeoRelativeCircle),
    GeoRelativePolygon(GeoRelativePolygon),
    GeoRelativePolyline(GeoRelativePolyline),
}

impl Shape {
    /// Returns the discriminant of the wrapped variant.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::GeoCircle(s) => s.shape_type(),
            Self::GeoPolygon(s) => s.shape_type(),
            Self::GeoPolyline(s) => s.shape_type(),
            Self::GeoRelativeCircle(s) => s.shape_type(),
            Self::GeoRelativePolygon(s) => s.shape_type(),
            Self::GeoRelativePolyline(s) => s.shape_type(),
        }
    }

    /// Returns the paint of closed shapes, `None` for polylines.
    pub fn paint(&self) -> Option<&Paint> {
        match self {
            Self::GeoCircle(s) => Some(s.paint()),
            Self::GeoPolygon(s) => Some(s.paint()),
            Self::GeoRelativeCircle(s) => Some(s.paint()),
            Self::GeoRelativePolygon(s) => Some(s.paint()),
            Self::GeoPolyline(_) | Self::GeoRelativePolyline(_) => None,
        }
    }

    /// Returns the line color of polylines, `None` for painted shapes.
    pub fn colour(&self) -> Option<Color> {
        match self {
            Self::GeoPolyline(s) => Some(s.colour()),
            Self::GeoRelativePolyline(s) => Some(s.colour()),
            Self::GeoCircle(_)
            | Self::GeoPolygon(_)
            | Self::GeoRelativeCircle(_)
            | Self::GeoRelativePolygon(_) => None,
        }
    }

    pub fn is_relative(&self) -> bool {
        self.shape_type().is_relative()
    }

    /// Returns the reference point that pixel geometry is anchored to.
    ///
    /// Absolute shapes have no reference point.
    pub fn reference(&self) -> Option<LatLong> {
        match self {
            Self::GeoRelativeCircle(s) => Some(s.centre_ref()),
            Self::GeoRelativePolygon(s) => Some(s.reference()),
            Self::GeoRelativePolyline(s) => Some(s.reference()),
            Self::GeoCircle(_) | Self::GeoPolygon(_) | Self::GeoPolyline(_) => None,
        }
    }

    /// Returns the number of vertices or points; circles count as one.
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::GeoCircle(_) | Self::GeoRelativeCircle(_) => 1,
            Self::GeoPolygon(s) => s.vertices().len(),
            Self::GeoPolyline(s) => s.points().len(),
            Self::GeoRelativePolygon(s) => s.vertices().len(),
            Self::GeoRelativePolyline(s) => s.points().len(),
        }
    }
}

impl From<GeoCircle> for Shape {
    fn from(shape: GeoCircle) -> Self {
        Self::GeoCircle(shape)
    }
}

impl From<GeoPolygon> for Shape {
    fn from(shape: GeoPolygon) -> Self {
        Self::GeoPolygon(shape)
    }
}

impl From<GeoPolyline> for Shape {
    fn from(shape: GeoPolyline) -> Self {
        Self::GeoPolyline(shape)
    }
}

impl From<GeoRelativeCircle> for Shape {
    fn from(shape: GeoRelativeCircle) -> Self {
        Self::GeoRelativeCircle(shape)
    }
}

impl From<GeoRelativePolygon> for Shape {
    fn from(shape: GeoRelativePolygon) -> Self {
        Self::GeoRelativePolygon(shape)
    }
}

impl From<GeoRelativePolyline> for Shape {
    fn from(shape: GeoRelativePolyline) -> Self {
        Self::GeoRelativePolyline(shape)
    }
}

// =============================================================================
// Validation
// =============================================================================

fn reject(err: InvalidGeometryError) -> InvalidGeometryError {
    debug!(shape:% = err.shape_type(), reason:% = err; "Rejected shape geometry");
    err
}

/// Radius must be finite and non-negative.
pub(crate) fn check_radius(shape: ShapeType, radius: f64) -> Result<()> {
    if !radius.is_finite() {
        return Err(reject(InvalidGeometryError::NonFiniteRadius { shape }));
    }
    if radius < 0.0 {
        return Err(reject(InvalidGeometryError::NegativeRadius { shape, radius }));
    }
    Ok(())
}

pub(crate) fn check_not_empty<T>(shape: ShapeType, items: &[T], what: &'static str) -> Result<()> {
    if items.is_empty() {
        return Err(reject(InvalidGeometryError::Empty { shape, what }));
    }
    Ok(())
}

pub(crate) fn check_offsets(shape: ShapeType, offsets: &[Vector2d]) -> Result<()> {
    match offsets.iter().position(|offset| !offset.is_finite()) {
        Some(index) => Err(reject(InvalidGeometryError::NonFiniteOffset { shape, index })),
        None => Ok(()),
    }
}
