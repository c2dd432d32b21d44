//! Construction errors for shapes.
//!
//! Every validating shape constructor returns [`InvalidGeometryError`] when
//! its geometry is malformed. Checks happen once, at construction, so a shape
//! that exists is always well formed.

use thiserror::Error;

use crate::shape::ShapeType;

/// Geometry rejected by a shape constructor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidGeometryError {
    #[error("{shape}: radius must not be negative, got {radius}")]
    NegativeRadius { shape: ShapeType, radius: f64 },

    #[error("{shape}: radius must be a finite number")]
    NonFiniteRadius { shape: ShapeType },

    #[error("{shape}: at least one {what} is required")]
    Empty { shape: ShapeType, what: &'static str },

    #[error("{shape}: pixel offset at index {index} is not finite")]
    NonFiniteOffset { shape: ShapeType, index: usize },
}

impl InvalidGeometryError {
    /// Returns the shape type whose construction failed.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::NegativeRadius { shape, .. }
            | Self::NonFiniteRadius { shape }
            | Self::Empty { shape, .. }
            | Self::NonFiniteOffset { shape, .. } => *shape,
        }
    }
}

/// Result alias for shape construction.
pub type Result<T> = std::result::Result<T, InvalidGeometryError>;
