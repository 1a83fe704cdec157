//! Host geometry collaborator.

use orbfield_core::Size;

/// Why display geometry could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("display geometry is not available on this host")]
    Unsupported,

    #[error("display geometry request failed: {0}")]
    Rejected(String),
}

/// Supplies display and window geometry.
pub trait GeometrySource {
    /// Bounding rectangle of the display currently hosting the window.
    ///
    /// Called first on every update, so sources may refresh cached window
    /// state here.
    fn display_rect(&mut self) -> Result<Size, GeometryError>;

    /// Inner size of the window.
    fn window_inner(&self) -> Size;

    /// The window's on-screen origin relative to its display.
    fn window_origin(&self) -> (i32, i32);
}
