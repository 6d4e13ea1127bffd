//! Prelude module for common mappick types and traits
//!
//! Re-exports the most commonly used types, traits and functions for easy
//! importing with `use mappick::prelude::*;`

pub use crate::core::{
    builder::PickerBuilder,
    config::PickerOptions,
    constants,
    geo::{Gcj02, LatLng, Wgs84},
    transform::{to_display, to_external},
};

pub use crate::layers::{controller::LayerController, LayerChoice, ViewKind};

pub use crate::providers::{
    amap::AmapSearch,
    callbacks::{NoopCallbacks, PickerCallbacks, Screenshot},
    map::{ContextMenu, MapProvider, MenuAction, MenuItem, Overlay},
    search::{SearchProvider, SearchResult},
    snapshot::{SnapshotCapturer, ViewHandle},
};

pub use crate::session::{
    picker::{MarkTicket, Picker, SearchTicket},
    state::{Phase, SessionState},
};

pub use crate::{Error as PickerError, Result};

pub use std::{sync::Arc, time::Duration};

pub use futures::future::BoxFuture;
