//! Drawing surface abstraction.

use orbfield_core::{Point, Viewport};

use crate::color::Rgba;

/// A 2D immediate-mode drawing target.
pub trait Surface {
    /// Set the surface's pixel dimensions.
    fn resize(&mut self, width: u32, height: u32);
    /// Position the surface's top-left corner relative to the window.
    fn set_offset(&mut self, left: i32, top: i32);
    /// Erase everything drawn so far.
    fn clear(&mut self);
    /// Fill a solid disc.
    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba);
}

/// One filled disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Point,
    pub radius: f64,
    pub color: Rgba,
}

/// A surface that records discs in paint order.
#[derive(Debug, Clone, Default)]
pub struct DiscBuffer {
    viewport: Viewport,
    discs: Vec<Disc>,
}

impl DiscBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Discs in the order they were painted.
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }
}

impl Surface for DiscBuffer {
    fn resize(&mut self, width: u32, height: u32) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    fn set_offset(&mut self, left: i32, top: i32) {
        self.viewport.left = left;
        self.viewport.top = top;
    }

    fn clear(&mut self) {
        self.discs.clear();
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgba) {
        self.discs.push(Disc {
            center,
            radius,
            color,
        });
    }
}
