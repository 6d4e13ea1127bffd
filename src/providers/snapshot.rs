//! Snapshot capture capability and the opaque view resource.

use crate::Result;
use async_trait::async_trait;

/// Opaque handle to the mounted map view.
///
/// Acquired by the host when the widget mounts and threaded through capture
/// calls; released when the picker is dropped. The engine never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewHandle(u64);

impl ViewHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Capability trait over a visual snapshot backend.
#[async_trait]
pub trait SnapshotCapturer: Send + Sync {
    /// Capture the visible map as a PNG data URL.
    async fn capture(&self, view: &ViewHandle) -> Result<String>;
}
