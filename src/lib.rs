//! # mappick
//!
//! A headless, provider-agnostic engine for an embeddable map place-picker.
//!
//! The crate owns the position/view state machine of the picker: searching for
//! a place, dropping a marker, toggling base layers and the road-net overlay,
//! and capturing an annotated screenshot of the visible map. Rendering, tile
//! fetching, geocoding and pixel capture live behind injected provider traits,
//! so the engine runs the same against a real mapping SDK or test doubles.
//!
//! Positions exist in two coordinate spaces that are kept apart at the type
//! level: [`Wgs84`] (the contract with the embedding caller and with search
//! results) and [`Gcj02`] (what the map provider consumes for display in
//! mainland China). Every boundary crossing goes through the transform
//! gateway in [`crate::core::transform`].

pub mod core;
pub mod layers;
pub mod prelude;
pub mod providers;
pub mod runtime;
pub mod session;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::PickerBuilder,
    config::PickerOptions,
    geo::{Gcj02, LatLng, Wgs84},
    transform::{to_display, to_external},
};

pub use crate::layers::{controller::LayerController, LayerChoice, ViewKind};

pub use crate::providers::{
    callbacks::{NoopCallbacks, PickerCallbacks, Screenshot},
    map::{ContextMenu, MapProvider, MenuAction, MenuItem, Overlay},
    search::{SearchProvider, SearchResult},
    snapshot::{SnapshotCapturer, ViewHandle},
};

pub use crate::session::{
    picker::{MarkTicket, Picker, SearchTicket},
    state::{Phase, SessionState},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, PickerError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("map provider failed to load: {0}")]
    ProviderLoad(String),

    #[error("context menu setup failed: {0}")]
    MenuSetup(String),

    #[error("reverse geocode failed: {0}")]
    Geocode(String),

    #[error("place search failed: {0}")]
    Search(String),

    #[error("snapshot capture failed: {0}")]
    Snapshot(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = PickerError;
