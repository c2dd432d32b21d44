//! Paint definitions for filled and stroked shapes.
//!
//! # Overview
//!
//! Exported types:
//! - [`Paint`]: A stroke color, a fill color, or both
//! - [`PaintLayer`]: One pass of a paint, yielded in draw order by [`Paint::layers`]
//!
//! A paint always carries at least one color. There is no way to build an
//! empty paint: the only constructors are [`Paint::stroke_only`], [`Paint::fill_only`]
//! and [`Paint::complete`].
//!
//! # Draw Order
//!
//! When both colors are present the fill is drawn first and the stroke on
//! top of it, so the outline is never hidden by the interior.
//!
//! ```
//! use geoshape_core::color::Color;
//! use geoshape_core::paint::{Paint, PaintLayer};
//!
//! let black = Color::new("black").unwrap();
//! let white = Color::new("white").unwrap();
//!
//! let paint = Paint::complete(black, white);
//! let layers: Vec<_> = paint.layers().collect();
//! assert_eq!(layers, [PaintLayer::Fill(white), PaintLayer::Stroke(black)]);
//! ```

use crate::color::Color;

// =============================================================================
// Type Definitions
// =============================================================================

/// The three forms a paint can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum PaintKind {
    Stroke(Color),
    Fill(Color),
    Complete { stroke: Color, fill: Color },
}

/// Visual style of a closed shape: an outline color, an interior color, or both.
///
/// # Examples
///
/// ```
/// use geoshape_core::color::Color;
/// use geoshape_core::paint::Paint;
///
/// let red = Color::new("red").unwrap();
///
/// let outline = Paint::stroke_only(red);
/// assert_eq!(outline.stroke(), Some(red));
/// assert_eq!(outline.fill(), None);
///
/// let solid = Paint::fill_only(red);
/// assert_eq!(solid.fill(), Some(red));
/// assert_eq!(solid.stroke(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paint {
    kind: PaintKind,
}

/// A single drawing pass of a [`Paint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintLayer {
    /// Fill the interior with this color
    Fill(Color),
    /// Draw the outline with this color
    Stroke(Color),
}

impl PaintLayer {
    /// Returns the color of this pass
    pub fn color(self) -> Color {
        match self {
            Self::Fill(color) | Self::Stroke(color) => color,
        }
    }
}

impl Paint {
    /// Creates a paint that only strokes the outline.
    pub fn stroke_only(stroke: Color) -> Self {
        Self {
            kind: PaintKind::Stroke(stroke),
        }
    }

    /// Creates a paint that only fills the interior.
    pub fn fill_only(fill: Color) -> Self {
        Self {
            kind: PaintKind::Fill(fill),
        }
    }

    /// Creates a paint with both a stroke and a fill.
    ///
    /// The fill is drawn first so that the stroke appears on top.
    pub fn complete(stroke: Color, fill: Color) -> Self {
        Self {
            kind: PaintKind::Complete { stroke, fill },
        }
    }

    /// Returns the stroke color, if any.
    pub fn stroke(&self) -> Option<Color> {
        match self.kind {
            PaintKind::Stroke(stroke) | PaintKind::Complete { stroke, .. } => Some(stroke),
            PaintKind::Fill(_) => None,
        }
    }

    /// Returns the fill color, if any.
    pub fn fill(&self) -> Option<Color> {
        match self.kind {
            PaintKind::Fill(fill) | PaintKind::Complete { fill, .. } => Some(fill),
            PaintKind::Stroke(_) => None,
        }
    }

    pub fn has_stroke(&self) -> bool {
        self.stroke().is_some()
    }

    pub fn has_fill(&self) -> bool {
        self.fill().is_some()
    }

    /// Returns the drawing passes of this paint in the order they must be drawn.
    ///
    /// Fill always precedes stroke.
    pub fn layers(&self) -> impl Iterator<Item = PaintLayer> {
        self.fill()
            .map(PaintLayer::Fill)
            .into_iter()
            .chain(self.stroke().map(PaintLayer::Stroke))
    }
}
