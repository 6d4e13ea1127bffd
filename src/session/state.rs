//! Session phase and mutable state owned by the picker.

use crate::core::geo::Gcj02;
use crate::providers::search::SearchResult;

/// Lifecycle phase of the picker session.
///
/// `Uninitialized -> Ready -> {Marking, Searching, Screenshotting} -> Ready`,
/// with `Disposed` terminal: once reached, every pending completion becomes a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Ready,
    Marking,
    Searching,
    Screenshotting,
    Disposed,
}

impl Phase {
    /// Whether the session is still alive (anything but `Disposed`).
    pub fn is_active(&self) -> bool {
        !matches!(self, Phase::Disposed)
    }

    /// Whether user interactions (marking, searching, selecting, layer
    /// switches) are accepted right now. Screenshot capture suspends them.
    pub fn accepts_interaction(&self) -> bool {
        matches!(self, Phase::Ready | Phase::Marking | Phase::Searching)
    }
}

/// Aggregate state of one picker session.
///
/// Owned exclusively by the [`crate::Picker`] instance; lives from mount to
/// dispose; never persisted.
#[derive(Debug)]
pub struct SessionState {
    pub phase: Phase,
    /// Current marker position, display representation.
    pub position: Option<Gcj02>,
    /// Current marker label.
    pub label: String,
    /// Last authoritative search result set (external representation).
    pub results: Vec<SearchResult>,
    /// Monotonic token for placement actions; stale geocode completions
    /// compare against it and are discarded.
    pub mark_seq: u64,
    /// Monotonic token for search requests; last write wins.
    pub search_seq: u64,
    /// Captured image awaiting the user's confirm/cancel decision.
    pub pending_image: Option<String>,
}

impl SessionState {
    pub fn new(position: Option<Gcj02>, label: String) -> Self {
        Self {
            phase: Phase::Uninitialized,
            position,
            label,
            results: Vec::new(),
            mark_seq: 0,
            search_seq: 0,
            pending_image: None,
        }
    }
}
