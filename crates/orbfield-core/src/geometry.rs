//! Geometry snapshot shared between the viewport tracker and the renderer.

/// Width/height pair in surface pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Midpoint of a rectangle of this size anchored at the origin.
    pub fn center(self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

/// A 2D point in surface coordinates (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawing surface size and its offset relative to the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Horizontal offset of the surface's top-left corner, in pixels.
    pub left: i32,
    /// Vertical offset of the surface's top-left corner, in pixels.
    pub top: i32,
}

impl Viewport {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Which path produced a geometry snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GeometryKind {
    /// Surface spans the physical display hosting the window.
    Display,
    /// Surface pinned to the window's inner area.
    #[default]
    Window,
}

/// Immutable geometry snapshot.
///
/// The viewport and its center are always replaced together, so a reader
/// never pairs a new surface size with a stale center.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub viewport: Viewport,
    pub center: Point,
    /// Inner size of the window the surface is seen through.
    pub window: Size,
    pub kind: GeometryKind,
}

impl Geometry {
    /// Surface spanning a whole display, shifted so it stays aligned with the
    /// display while the window moves across it.
    pub fn display(display: Size, window: Size, origin: (i32, i32)) -> Self {
        Self {
            viewport: Viewport {
                width: display.width,
                height: display.height,
                left: -origin.0,
                top: -origin.1,
            },
            center: display.center(),
            window,
            kind: GeometryKind::Display,
        }
    }

    /// Surface covering exactly the window, with no translation.
    pub fn window(window: Size) -> Self {
        Self {
            viewport: Viewport {
                width: window.width,
                height: window.height,
                left: 0,
                top: 0,
            },
            center: window.center(),
            window,
            kind: GeometryKind::Window,
        }
    }
}
