//! Geographic and screen-space value types used by shapes.
//!
//! # Overview
//!
//! - [`LatLong`] - A geographic position in degrees
//! - [`Length`] - A physical distance carrying a [`LengthUnit`]
//! - [`Vector2d`] - A displacement in screen pixels
//!
//! These types only store and compare values. Projection onto the screen,
//! great-circle arithmetic and the like belong to the renderer.
//!
//! # Pixel Coordinate System
//!
//! Pixel offsets follow the screen convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A geographic position given as latitude and longitude in degrees.
///
/// No range check is applied; the renderer decides what to do with
/// out-of-range values.
///
/// # Examples
///
/// ```
/// # use geoshape_core::geo::LatLong;
/// let london = LatLong::new(51.5, -0.12);
/// assert_eq!(london.latitude(), 51.5);
/// assert_eq!(london.longitude(), -0.12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatLong {
    latitude: f64,
    longitude: f64,
}

impl LatLong {
    /// Creates a new position from latitude and longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude in degrees
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees
    pub fn longitude(self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for LatLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Units a [`Length`] can be expressed in.
///
/// The names match external configuration strings (snake_case). The short
/// forms `m`, `km`, `ft` and `nm` are accepted wherever a name is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    #[serde(alias = "m")]
    Meters,
    #[serde(alias = "km")]
    Kilometers,
    #[serde(alias = "ft")]
    Feet,
    #[serde(alias = "nm")]
    NauticalMiles,
}

impl LengthUnit {
    /// Number of meters in one of this unit
    pub fn meters_per_unit(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Kilometers => 1_000.0,
            Self::Feet => 0.3048,
            Self::NauticalMiles => 1_852.0,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meters" | "m" => Ok(Self::Meters),
            "kilometers" | "km" => Ok(Self::Kilometers),
            "feet" | "ft" => Ok(Self::Feet),
            "nautical_miles" | "nm" => Ok(Self::NauticalMiles),
            _ => Err("Unsupported length unit"),
        }
    }
}

impl From<LengthUnit> for &'static str {
    fn from(val: LengthUnit) -> Self {
        match val {
            LengthUnit::Meters => "meters",
            LengthUnit::Kilometers => "kilometers",
            LengthUnit::Feet => "feet",
            LengthUnit::NauticalMiles => "nautical_miles",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A physical distance: a magnitude together with its unit.
///
/// Two lengths are equal when both magnitude and unit match, so
/// `1 km != 1000 m`. Use [`Length::to_meters`] to compare across units.
///
/// # Examples
///
/// ```
/// # use geoshape_core::geo::{Length, LengthUnit};
/// let radius = Length::new(2.0, LengthUnit::Kilometers);
/// assert_eq!(radius.to_meters(), 2_000.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Shorthand for a length in meters
    pub fn meters(value: f64) -> Self {
        Self::new(value, LengthUnit::Meters)
    }

    /// Returns the magnitude in this length's own unit
    pub fn value(self) -> f64 {
        self.value
    }

    pub fn unit(self) -> LengthUnit {
        self.unit
    }

    /// Converts the magnitude to meters
    pub fn to_meters(self) -> f64 {
        self.value * self.unit.meters_per_unit()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A 2D displacement in screen pixels (x right-positive, y down-positive).
///
/// # Examples
///
/// ```
/// # use geoshape_core::geo::Vector2d;
/// let offset = Vector2d::new(10.0, -5.0);
/// assert_eq!(offset.x(), 10.0);
/// assert_eq!(offset.y(), -5.0);
/// assert!(offset.is_finite());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2d {
    x: f64,
    y: f64,
}

impl Vector2d {
    /// Creates a new offset with the specified pixel components
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal component (positive to the right)
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the vertical component (positive downward)
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns true when neither component is NaN or infinite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
