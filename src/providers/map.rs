//! Map provider capability.
//!
//! Models the slice of a mapping SDK the picker needs: centering, base view
//! switching, overlays, tile layers, a context menu and reverse geocoding.
//! All positions crossing this seam are display-space [`Gcj02`]; the engine
//! performs the external/display conversions before calling in.

use crate::core::geo::Gcj02;
use crate::layers::ViewKind;
use crate::Result;
use async_trait::async_trait;

/// Action bound to a context-menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Place the marker at the clicked position.
    Mark,
    /// Start the screenshot flow.
    Screenshot,
}

/// A single entry of the provider context menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// The context menu installed on the map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    /// Width hint in pixels.
    pub width: u32,
    pub items: Vec<MenuItem>,
}

/// A visual element drawn on top of the base map.
///
/// The picker only ever draws one kind of overlay: the authoritative marker
/// with an optional info-window label.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub id: String,
    pub position: Gcj02,
    pub label: Option<String>,
}

impl Overlay {
    pub fn marker(id: impl Into<String>, position: Gcj02, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position,
            label: Some(label.into()),
        }
    }
}

/// Capability trait over the mapping SDK.
///
/// Synchronous methods mirror SDK calls that complete immediately;
/// `reverse_geocode` is the one genuinely asynchronous lookup.
#[async_trait]
pub trait MapProvider: Send + Sync {
    /// Center the view on a display-space position at the given zoom.
    fn set_center(&mut self, center: Gcj02, zoom: f64);

    /// Switch the base view.
    fn set_view(&mut self, view: ViewKind);

    /// Constrain the maximum zoom level.
    fn set_max_zoom(&mut self, zoom: f64);

    /// Current zoom level.
    fn zoom(&self) -> f64;

    /// Draw an overlay on top of the base map.
    fn add_overlay(&mut self, overlay: Overlay);

    /// Remove every overlay.
    fn clear_overlays(&mut self);

    /// Snapshot of the overlays currently drawn.
    fn overlays(&self) -> Vec<Overlay>;

    /// Attach a tile layer under the given identity.
    fn add_layer(&mut self, id: &str, url: &str);

    /// Detach the tile layer with the given identity, if present.
    fn remove_layer(&mut self, id: &str);

    /// Identities of the tile layers currently attached.
    fn layer_ids(&self) -> Vec<String>;

    /// Install the right-click context menu.
    fn install_menu(&mut self, menu: ContextMenu) -> Result<()>;

    /// Resolve a display-space position to a human-readable label.
    async fn reverse_geocode(&self, position: Gcj02) -> Result<Option<String>>;
}
