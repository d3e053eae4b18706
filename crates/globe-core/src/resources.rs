//! Bookkeeping for drawing resources owned by scene objects.
//!
//! Markers and transient effects acquire a handle when created and must hand
//! it back when destroyed; nothing is reclaimed implicitly. The renderer sizes
//! its instance buffers from the live set.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawHandle(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Marker,
    Ring,
    Particle,
    RegionMarker,
}

#[derive(Debug, Default)]
pub struct ResourceLedger {
    next: u32,
    live: FnvHashMap<DrawHandle, ResourceKind>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&mut self, kind: ResourceKind) -> DrawHandle {
        let handle = DrawHandle(self.next);
        self.next = self.next.wrapping_add(1);
        self.live.insert(handle, kind);
        handle
    }

    /// Returns `false` if the handle was already released.
    pub fn release(&mut self, handle: DrawHandle) -> bool {
        self.live.remove(&handle).is_some()
    }

    pub fn is_live(&self, handle: DrawHandle) -> bool {
        self.live.contains_key(&handle)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_of(&self, kind: ResourceKind) -> usize {
        self.live.values().filter(|k| **k == kind).count()
    }
}
