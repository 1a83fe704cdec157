//! Surface geometry policy and the periodic tracker that applies it.

use std::sync::Arc;

use orbfield_core::Geometry;
use orbfield_field::Surface;
use tracing::{debug, warn};

use crate::cell::GeometryCell;
use crate::source::{GeometryError, GeometrySource};

/// Pick the surface geometry for the current display/window state.
///
/// Returns the geometry together with the reason display geometry was not
/// used, if it wasn't. Failure never escapes: any error selects the window
/// fallback. The display is queried before the window is read.
pub fn resolve_geometry<G>(source: &mut G) -> (Geometry, Option<GeometryError>)
where
    G: GeometrySource + ?Sized,
{
    let display = source.display_rect();
    let window = source.window_inner();
    match display {
        Ok(display) => (
            Geometry::display(display, window, source.window_origin()),
            None,
        ),
        Err(err) => (Geometry::window(window), Some(err)),
    }
}

/// Keeps the drawing surface sized and positioned over the display.
#[derive(Debug)]
pub struct ViewportTracker<G> {
    source: G,
    cell: GeometryCell,
    /// Last fallback reason, so a persistent failure is warned about once.
    last_failure: Option<GeometryError>,
}

impl<G: GeometrySource> ViewportTracker<G> {
    pub fn new(source: G, cell: GeometryCell) -> Self {
        Self {
            source,
            cell,
            last_failure: None,
        }
    }

    /// The cell this tracker publishes to.
    pub fn cell(&self) -> &GeometryCell {
        &self.cell
    }

    pub fn source_mut(&mut self) -> &mut G {
        &mut self.source
    }

    /// Re-read geometry, publish it and apply it to `surface`.
    ///
    /// The caller is expected to render immediately with the returned
    /// snapshot so a stale frame is never shown.
    pub fn update<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Arc<Geometry> {
        let (geometry, failure) = resolve_geometry(&mut self.source);

        match &failure {
            Some(err) if self.last_failure.as_ref() != Some(err) => {
                warn!("{err}; centering on the window instead");
            }
            Some(err) => debug!("{err}; still using window geometry"),
            None if self.last_failure.is_some() => {
                debug!("display geometry available again");
            }
            None => {}
        }
        self.last_failure = failure;

        let previous = self.cell.snapshot();
        if *previous != geometry {
            debug!(
                width = geometry.viewport.width,
                height = geometry.viewport.height,
                left = geometry.viewport.left,
                top = geometry.viewport.top,
                kind = ?geometry.kind,
                "geometry changed"
            );
        }

        let published = self.cell.publish(geometry);
        surface.resize(published.viewport.width, published.viewport.height);
        surface.set_offset(published.viewport.left, published.viewport.top);
        published
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbfield_core::{GeometryKind, Point, Size, Viewport};
    use orbfield_field::DiscBuffer;

    struct StubSource {
        display: Result<Size, GeometryError>,
        window: Size,
        origin: (i32, i32),
        queries: usize,
    }

    impl StubSource {
        fn new(display: Result<Size, GeometryError>) -> Self {
            Self {
                display,
                window: Size::new(1024, 768),
                origin: (0, 0),
                queries: 0,
            }
        }
    }

    impl GeometrySource for StubSource {
        fn display_rect(&mut self) -> Result<Size, GeometryError> {
            self.queries += 1;
            self.display.clone()
        }

        fn window_inner(&self) -> Size {
            self.window
        }

        fn window_origin(&self) -> (i32, i32) {
            self.origin
        }
    }

    #[test]
    fn test_fallback_when_capability_missing() {
        let source = StubSource::new(Err(GeometryError::Unsupported));
        let mut tracker = ViewportTracker::new(source, GeometryCell::default());
        let mut surface = DiscBuffer::new();

        let geometry = tracker.update(&mut surface);

        assert_eq!(geometry.kind, GeometryKind::Window);
        assert_eq!(geometry.center, Point::new(512.0, 384.0));
        assert_eq!(
            surface.viewport(),
            Viewport {
                width: 1024,
                height: 768,
                left: 0,
                top: 0,
            }
        );
    }

    #[test]
    fn test_fallback_when_request_rejected() {
        let mut source = StubSource::new(Err(GeometryError::Rejected("denied".into())));
        let (geometry, reason) = resolve_geometry(&mut source);
        assert_eq!(geometry, Geometry::window(Size::new(1024, 768)));
        assert_eq!(reason, Some(GeometryError::Rejected("denied".into())));
    }

    #[test]
    fn test_display_geometry_offsets_surface() {
        let mut source = StubSource::new(Ok(Size::new(1920, 1080)));
        source.origin = (100, 50);
        let mut tracker = ViewportTracker::new(source, GeometryCell::default());
        let mut surface = DiscBuffer::new();

        let geometry = tracker.update(&mut surface);

        assert_eq!(geometry.kind, GeometryKind::Display);
        assert_eq!(geometry.center, Point::new(960.0, 540.0));
        let viewport = surface.viewport();
        assert_eq!((viewport.width, viewport.height), (1920, 1080));
        assert_eq!((viewport.left, viewport.top), (-100, -50));
    }

    #[test]
    fn test_update_publishes_each_tick() {
        let source = StubSource::new(Err(GeometryError::Unsupported));
        let cell = GeometryCell::default();
        let mut tracker = ViewportTracker::new(source, cell.clone());
        let mut surface = DiscBuffer::new();

        tracker.update(&mut surface);
        tracker.update(&mut surface);
        assert_eq!(cell.generation(), 2);
        assert_eq!(tracker.source_mut().queries, 2);
    }

    #[test]
    fn test_update_returns_the_geometry_it_applied() {
        let mut source = StubSource::new(Ok(Size::new(1920, 1080)));
        source.origin = (30, 40);
        let cell = GeometryCell::default();
        let mut tracker = ViewportTracker::new(source, cell.clone());
        let mut surface = DiscBuffer::new();

        let applied = tracker.update(&mut surface);
        assert!(Arc::ptr_eq(&applied, &cell.snapshot()));

        // A second writer replaces the cell's snapshot, not the one returned.
        cell.publish(Geometry::window(Size::new(640, 480)));
        assert_eq!(applied.viewport, surface.viewport());
        assert_eq!(applied.kind, GeometryKind::Display);
        assert_eq!(cell.snapshot().viewport.width, 640);
    }

    #[test]
    fn test_recovers_when_display_returns() {
        let source = StubSource::new(Err(GeometryError::Unsupported));
        let mut tracker = ViewportTracker::new(source, GeometryCell::default());
        let mut surface = DiscBuffer::new();

        assert_eq!(tracker.update(&mut surface).kind, GeometryKind::Window);
        tracker.source_mut().display = Ok(Size::new(2560, 1440));
        let geometry = tracker.update(&mut surface);
        assert_eq!(geometry.kind, GeometryKind::Display);
        assert_eq!(tracker.cell().snapshot().viewport.width, 2560);
    }

    #[test]
    fn test_zero_sized_window_is_not_rejected() {
        let mut source = StubSource::new(Err(GeometryError::Unsupported));
        source.window = Size::new(0, 0);
        let (geometry, _) = resolve_geometry(&mut source);
        assert_eq!(geometry.viewport.size(), Size::new(0, 0));
        assert_eq!(geometry.center, Point::new(0.0, 0.0));
    }
}
