//! Terminal-backed display and window geometry.

use std::io;

use crossterm::terminal::{self, WindowSize};
use orbfield_core::Size;
use orbfield_viewport::{GeometryError, GeometrySource};

/// Cell size assumed when the terminal does not report pixels.
const NOMINAL_CELL_PX: (u32, u32) = (8, 16);

/// Geometry source that reads the controlling terminal.
///
/// The display is the terminal's pixel area as reported by the tty. A
/// terminal cannot see where it sits on screen, so the origin is always
/// `(0, 0)`.
#[derive(Debug, Default)]
pub struct TerminalGeometry {
    window: Size,
}

impl TerminalGeometry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GeometrySource for TerminalGeometry {
    fn display_rect(&mut self) -> Result<Size, GeometryError> {
        match terminal::window_size() {
            Ok(size) => {
                let (window, display) = measure(&size);
                self.window = window;
                display.ok_or(GeometryError::Unsupported)
            }
            Err(err) => {
                if let Ok((columns, rows)) = terminal::size() {
                    self.window = estimate(columns, rows);
                }
                Err(query_error(err))
            }
        }
    }

    fn window_inner(&self) -> Size {
        self.window
    }

    fn window_origin(&self) -> (i32, i32) {
        (0, 0)
    }
}

/// Window size and (if reported) display size for a tty window report.
fn measure(size: &WindowSize) -> (Size, Option<Size>) {
    if size.width == 0 || size.height == 0 {
        return (estimate(size.columns, size.rows), None);
    }
    let pixels = Size::new(size.width as u32, size.height as u32);
    (pixels, Some(pixels))
}

fn estimate(columns: u16, rows: u16) -> Size {
    Size::new(
        columns as u32 * NOMINAL_CELL_PX.0,
        rows as u32 * NOMINAL_CELL_PX.1,
    )
}

fn query_error(err: io::Error) -> GeometryError {
    if err.kind() == io::ErrorKind::Unsupported {
        GeometryError::Unsupported
    } else {
        GeometryError::Rejected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_with_pixels() {
        let report = WindowSize {
            rows: 50,
            columns: 200,
            width: 1600,
            height: 900,
        };
        let (window, display) = measure(&report);
        assert_eq!(window, Size::new(1600, 900));
        assert_eq!(display, Some(Size::new(1600, 900)));
    }

    #[test]
    fn test_measure_without_pixels_estimates_window() {
        let report = WindowSize {
            rows: 24,
            columns: 80,
            width: 0,
            height: 0,
        };
        let (window, display) = measure(&report);
        assert_eq!(window, Size::new(640, 384));
        assert_eq!(display, None);
    }

    #[test]
    fn test_unsupported_io_error_maps_to_unsupported() {
        let err = io::Error::new(io::ErrorKind::Unsupported, "no ioctl");
        assert_eq!(query_error(err), GeometryError::Unsupported);
        let err = io::Error::other("boom");
        assert!(matches!(query_error(err), GeometryError::Rejected(_)));
    }
}
