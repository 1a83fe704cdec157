//! Viewport tracking for orbfield.
//!
//! Decides how large the drawing surface is and where it sits, preferring
//! the geometry of the whole display and falling back to the window when
//! display geometry is unavailable. Results are published as immutable
//! snapshots through [`GeometryCell`].

mod cell;
mod source;
mod tracker;

pub use cell::GeometryCell;
pub use source::{GeometryError, GeometrySource};
pub use tracker::{ViewportTracker, resolve_geometry};
