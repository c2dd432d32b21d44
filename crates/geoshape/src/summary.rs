//! Per-type shape counts.

use std::{collections::BTreeMap, fmt};

use geoshape_core::shape::{Shape, ShapeType};

/// Number of shapes of each [`ShapeType`] in a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeSummary {
    counts: BTreeMap<ShapeType, usize>,
}

impl ShapeSummary {
    /// Counts the shapes in `shapes` by type.
    pub fn from_shapes(shapes: &[Shape]) -> Self {
        let mut counts = BTreeMap::new();
        for shape in shapes {
            *counts.entry(shape.shape_type()).or_default() += 1;
        }
        Self { counts }
    }

    /// Returns how many shapes of `shape_type` were counted.
    pub fn count(&self, shape_type: ShapeType) -> usize {
        self.counts.get(&shape_type).copied().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns how many counted shapes are sized in screen pixels.
    pub fn relative(&self) -> usize {
        self.counts
            .iter()
            .filter(|(shape_type, _)| shape_type.is_relative())
            .map(|(_, count)| count)
            .sum()
    }

    /// Iterates over every shape type with its count, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeType, usize)> + '_ {
        ShapeType::ALL
            .into_iter()
            .map(|shape_type| (shape_type, self.count(shape_type)))
    }
}

impl fmt::Display for ShapeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (shape_type, count) in self.iter() {
            writeln!(f, "{:<24}{count}", shape_type.name())?;
        }
        write!(f, "{:<24}{}", "total", self.total())
    }
}
