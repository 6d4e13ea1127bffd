//! Picker configuration
//!
//! Mirrors the widget props of the embedding surface: initial position and
//! label, zoom, the layer set offered to the user, button labels and default
//! view state. Everything has a sensible default so a bare
//! `PickerOptions::default()` produces a usable session.

use crate::core::constants::{
    DEFAULT_MARKER_LABEL, DEFAULT_MARK_NOTIFY_DELAY_MS, DEFAULT_MAX_ZOOM, DEFAULT_MENU_WIDTH,
    DEFAULT_ZOOM, ROAD_NET_LAYER_URL,
};
use crate::core::geo::Wgs84;
use crate::layers::{LayerChoice, ViewKind};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PickerOptions {
    /// Human-readable description of the initial position.
    pub initial_label: Option<String>,
    /// Initial marker position, external (WGS84) representation. `None` or an
    /// invalid position means the session starts without a marker.
    pub initial_position: Option<Wgs84>,
    /// Keyword for an initial search issued once the provider is ready.
    pub initial_keyword: Option<String>,
    /// Zoom level for centering operations.
    pub zoom: f64,
    /// Maximum zoom requested from the provider.
    pub max_zoom: f64,
    /// Layer choices offered on the toolbar.
    pub layer_choices: Vec<LayerChoice>,
    /// Context-menu label for the "mark here" entry.
    pub mark_label: String,
    /// Context-menu label for the screenshot entry.
    pub screenshot_label: String,
    /// Base view active at startup.
    pub default_view: ViewKind,
    /// Whether the road-net overlay preference starts enabled.
    pub default_road_net_visible: bool,
    /// WMTS template for the road-net overlay layer.
    pub road_net_url: String,
    /// Delay ceiling between label resolution and the mark notification.
    pub mark_notify_delay: Duration,
    /// Width hint for the provider context menu (pixels).
    pub menu_width: u32,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            initial_label: None,
            initial_position: None,
            initial_keyword: None,
            zoom: DEFAULT_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            layer_choices: vec![
                LayerChoice::TwoD,
                LayerChoice::Satellite,
                LayerChoice::RoadNet,
            ],
            mark_label: "Mark this place".to_string(),
            screenshot_label: "Screenshot".to_string(),
            default_view: ViewKind::Satellite,
            default_road_net_visible: false,
            road_net_url: ROAD_NET_LAYER_URL.to_string(),
            mark_notify_delay: Duration::from_millis(DEFAULT_MARK_NOTIFY_DELAY_MS),
            menu_width: DEFAULT_MENU_WIDTH,
        }
    }
}

impl PickerOptions {
    /// The label used for the marker before any geocode or selection, falling
    /// back to the crate default placeholder.
    pub fn effective_label(&self) -> String {
        self.initial_label
            .clone()
            .unwrap_or_else(|| DEFAULT_MARKER_LABEL.to_string())
    }

    /// Whether the road-net toggle is part of the configured layer set.
    pub fn offers_road_net(&self) -> bool {
        self.layer_choices.contains(&LayerChoice::RoadNet)
    }
}
