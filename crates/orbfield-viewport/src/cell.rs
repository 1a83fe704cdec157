//! Single-writer, multi-reader geometry snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use orbfield_core::Geometry;

/// Shared holder of the latest committed [`Geometry`].
///
/// Readers always see a whole snapshot; a new one replaces the old one in a
/// single swap.
#[derive(Debug, Clone, Default)]
pub struct GeometryCell {
    current: Arc<RwLock<Arc<Geometry>>>,
    generation: Arc<AtomicU64>,
}

impl GeometryCell {
    pub fn new(initial: Geometry) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(initial))),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Replace the snapshot and bump the generation.
    ///
    /// Returns the snapshot that was stored, which later writers cannot
    /// change.
    pub fn publish(&self, geometry: Geometry) -> Arc<Geometry> {
        let next = Arc::new(geometry);
        match self.current.write() {
            Ok(mut guard) => *guard = Arc::clone(&next),
            Err(poisoned) => *poisoned.into_inner() = Arc::clone(&next),
        }
        self.generation.fetch_add(1, Ordering::Release);
        next
    }

    /// The latest committed snapshot.
    pub fn snapshot(&self) -> Arc<Geometry> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Number of snapshots published so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}
