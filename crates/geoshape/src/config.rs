//! Configuration types for building shapes from documents.
//!
//! All types implement [`serde::Deserialize`] for loading from external
//! sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Default colors applied to document entries that leave
//!   their styling out.
//!
//! # Example
//!
//! ```
//! # use geoshape::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r##"
//!     [style]
//!     default_stroke = "black"
//!     default_fill = "#ffffff80"
//!     "##,
//! )
//! .unwrap();
//!
//! let paint = config.style().default_paint().unwrap().unwrap();
//! assert!(paint.has_stroke() && paint.has_fill());
//! ```

use serde::Deserialize;

use geoshape_core::{color::Color, paint::Paint};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Default styling for document entries.
///
/// Colors are kept as strings and parsed on access so that a bad value is
/// reported against the configuration rather than against a shape.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Stroke color for painted shapes without one, and line color for
    /// polylines without one.
    #[serde(default)]
    default_stroke: Option<String>,

    /// Fill color for painted shapes without one.
    #[serde(default)]
    default_fill: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] from color strings.
    pub fn new(default_stroke: Option<String>, default_fill: Option<String>) -> Self {
        Self {
            default_stroke,
            default_fill,
        }
    }

    /// Returns the parsed default stroke [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn default_stroke(&self) -> Result<Option<Color>, String> {
        parse_color("default_stroke", self.default_stroke.as_deref())
    }

    /// Returns the parsed default fill [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn default_fill(&self) -> Result<Option<Color>, String> {
        parse_color("default_fill", self.default_fill.as_deref())
    }

    /// Combines the default colors into a [`Paint`].
    ///
    /// Returns `None` when neither color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if either configured color string cannot be parsed.
    pub fn default_paint(&self) -> Result<Option<Paint>, String> {
        let paint = match (self.default_stroke()?, self.default_fill()?) {
            (Some(stroke), Some(fill)) => Some(Paint::complete(stroke, fill)),
            (Some(stroke), None) => Some(Paint::stroke_only(stroke)),
            (None, Some(fill)) => Some(Paint::fill_only(fill)),
            (None, None) => None,
        };
        Ok(paint)
    }
}

fn parse_color(key: &str, value: Option<&str>) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {key} in config: {err}"))
}
