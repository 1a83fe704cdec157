//! Core types shared across the orbfield crates.
//!
//! Holds the tunable field configuration (with the built-in presets), the
//! geometry snapshot published by the viewport tracker, and the error type
//! for configuration problems.

mod error;
mod field;
mod geometry;

pub use error::ConfigError;
pub use field::{DustLaw, FieldConfig, Preset};
pub use geometry::{Geometry, GeometryKind, Point, Size, Viewport};
