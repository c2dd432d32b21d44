//! Error adapter for converting GeoshapeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Document errors carry the offending source and byte span, so they are
//! rendered with a labelled snippet. Every other error is rendered as a plain
//! message with an error code.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use geoshape::GeoshapeError;

/// Adapter for a [`GeoshapeError::Document`] error.
pub struct DocumentAdapter<'a> {
    message: &'a str,
    span: Option<&'a Range<usize>>,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> DocumentAdapter<'a> {
    /// Create a new document adapter.
    pub fn new(message: &'a str, span: Option<&'a Range<usize>>, src: &'a str) -> Self {
        Self { message, span, src }
    }
}

impl fmt::Debug for DocumentAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentAdapter")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for DocumentAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid shape document: {}", self.message)
    }
}

impl std::error::Error for DocumentAdapter<'_> {}

impl MietteDiagnostic for DocumentAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("geoshape::document"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        let label = LabeledSpan::new_primary_with_span(
            Some(self.message.to_string()),
            span_to_miette(span),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-document [`GeoshapeError`] variants.
pub struct ErrorAdapter<'a>(pub &'a GeoshapeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GeoshapeError::Io(_) => "geoshape::io",
            GeoshapeError::Config(_) => "geoshape::config",
            GeoshapeError::Document { .. } => "geoshape::document",
            GeoshapeError::Colour { .. } => "geoshape::colour",
            GeoshapeError::MissingPaint { .. } => "geoshape::paint",
            GeoshapeError::Geometry { .. } => "geoshape::geometry",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            GeoshapeError::MissingPaint { .. } => {
                "set `stroke` or `fill` on the entry, or configure `default_stroke`/`default_fill`"
            }
            GeoshapeError::Colour { .. } => "colors are CSS color strings such as \"red\" or \"#ff0000\"",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A document error with source location information.
    Document(DocumentAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Document(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Document(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Document(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Document(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Document(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Document(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a byte range to a miette [`SourceSpan`].
fn span_to_miette(span: &Range<usize>) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.len())
}

/// Convert a [`GeoshapeError`] into a reportable error.
pub fn to_reportable(err: &GeoshapeError) -> Reportable<'_> {
    match err {
        GeoshapeError::Document { message, span, src } => {
            Reportable::Document(DocumentAdapter::new(message, span.as_ref(), src))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
