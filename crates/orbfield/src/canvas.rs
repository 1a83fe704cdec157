//! Braille canvas widget that shows a recorded disc buffer.

use orbfield_core::Size;
use orbfield_field::{Disc, DiscBuffer};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Painter, Shape},
    },
};

/// Paints the part of the surface visible through the window.
#[derive(Debug)]
pub struct FieldCanvas<'a> {
    surface: &'a DiscBuffer,
    window: Size,
}

impl<'a> FieldCanvas<'a> {
    pub fn new(surface: &'a DiscBuffer, window: Size) -> Self {
        Self { surface, window }
    }

    /// Surface-space x range and (negated) y range seen through the window.
    ///
    /// The canvas y axis points up while surface y points down, so y is
    /// mirrored.
    fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let viewport = self.surface.viewport();
        let left = -(viewport.left as f64);
        let top = -(viewport.top as f64);
        let x = [left, left + self.window.width as f64];
        let y = [-(top + self.window.height as f64), -top];
        (x, y)
    }
}

impl Widget for FieldCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (x_bounds, y_bounds) = self.bounds();
        let layer = DiscLayer {
            discs: self.surface.discs(),
        };
        Canvas::default()
            .marker(Marker::Braille)
            .background_color(Color::Black)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| ctx.draw(&layer))
            .render(area, buf);
    }
}

/// Discs drawn as single braille dots; a dot is already larger than any
/// particle.
struct DiscLayer<'a> {
    discs: &'a [Disc],
}

impl Shape for DiscLayer<'_> {
    fn draw(&self, painter: &mut Painter) {
        for disc in self.discs {
            if let Some((x, y)) = painter.get_point(disc.center.x, -disc.center.y) {
                painter.paint(x, y, disc.color.over_black());
            }
        }
    }
}
