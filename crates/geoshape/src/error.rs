//! Error types for geoshape operations.
//!
//! This module provides the main error type [`GeoshapeError`] which wraps
//! the error conditions that can occur while turning a shape document into
//! validated shapes.

use std::{io, ops::Range};

use thiserror::Error;

use geoshape_core::{error::InvalidGeometryError, shape::ShapeType};

/// The main error type for geoshape operations.
///
/// Shape-level variants carry the zero-based `index` of the offending entry
/// in the document.
#[derive(Debug, Error)]
pub enum GeoshapeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid shape document: {message}")]
    Document {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("shape #{index}: {message}")]
    Colour { index: usize, message: String },

    #[error("shape #{index} ({shape}): no stroke or fill given and no default configured")]
    MissingPaint { index: usize, shape: ShapeType },

    #[error("shape #{index}: {source}")]
    Geometry {
        index: usize,
        source: InvalidGeometryError,
    },
}

impl GeoshapeError {
    /// Create a new `Document` error from a TOML error and the source it came from.
    pub fn new_document_error(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self::Document {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }

    /// Returns the index of the document entry this error belongs to, if any.
    pub fn shape_index(&self) -> Option<usize> {
        match self {
            Self::Colour { index, .. }
            | Self::MissingPaint { index, .. }
            | Self::Geometry { index, .. } => Some(*index),
            Self::Io(_) | Self::Config(_) | Self::Document { .. } => None,
        }
    }
}
