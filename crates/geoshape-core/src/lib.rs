//! Geoshape Core Types and Definitions
//!
//! This crate provides the value types a map renderer consumes to draw
//! shapes on top of a map. It includes:
//!
//! - **Colors**: Opaque color values with CSS color support ([`color::Color`])
//! - **Geo**: Positions, distances and pixel offsets ([`geo`] module)
//! - **Paint**: Stroke and fill styling for closed shapes ([`paint::Paint`])
//! - **Shapes**: The closed set of drawable shapes ([`shape::Shape`])
//! - **Errors**: Geometry rejected at construction ([`error::InvalidGeometryError`])
//!
//! Nothing here draws, projects or blends. Every type is an immutable value
//! that can be shared freely between threads.

pub mod color;
pub mod error;
pub mod geo;
pub mod paint;
pub mod shape;
