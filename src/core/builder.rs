//! Picker builder for fluent API configuration
//!
//! Collects the widget options and the injected provider capabilities, then
//! produces a [`Picker`] in the `Uninitialized` phase. The map provider and
//! the view handle are mandatory; search, capture and callbacks are optional
//! and degrade to no-ops when absent.

use crate::core::config::PickerOptions;
use crate::core::geo::Wgs84;
use crate::layers::{LayerChoice, ViewKind};
use crate::providers::{
    callbacks::{NoopCallbacks, PickerCallbacks},
    map::MapProvider,
    search::SearchProvider,
    snapshot::{SnapshotCapturer, ViewHandle},
};
use crate::session::picker::Picker;
use crate::{PickerError, Result};
use std::time::Duration;

/// Builder for creating and configuring Picker instances
pub struct PickerBuilder {
    options: PickerOptions,
    map: Option<Box<dyn MapProvider>>,
    searcher: Option<Box<dyn SearchProvider>>,
    capturer: Option<Box<dyn SnapshotCapturer>>,
    callbacks: Option<Box<dyn PickerCallbacks>>,
    view: Option<ViewHandle>,
}

impl PickerBuilder {
    /// Create a new PickerBuilder with default options
    pub fn new() -> Self {
        Self {
            options: PickerOptions::default(),
            map: None,
            searcher: None,
            capturer: None,
            callbacks: None,
            view: None,
        }
    }

    /// Replace the whole option set at once
    pub fn with_options(mut self, options: PickerOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the initial marker label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.options.initial_label = Some(label.into());
        self
    }

    /// Set the initial marker position (external representation)
    pub fn with_position(mut self, position: Wgs84) -> Self {
        self.options.initial_position = Some(position);
        self
    }

    /// Issue a search for this keyword once the provider is ready
    pub fn with_initial_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.options.initial_keyword = Some(keyword.into());
        self
    }

    /// Set the centering zoom level
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.options.zoom = zoom;
        self
    }

    /// Set the layer choices offered to the user
    pub fn with_layer_choices(mut self, choices: Vec<LayerChoice>) -> Self {
        self.options.layer_choices = choices;
        self
    }

    /// Set the base view active at startup
    pub fn with_default_view(mut self, view: ViewKind) -> Self {
        self.options.default_view = view;
        self
    }

    /// Set the startup road-net overlay preference
    pub fn with_road_net_visible(mut self, visible: bool) -> Self {
        self.options.default_road_net_visible = visible;
        self
    }

    /// Set the delay ceiling before the mark notification
    pub fn with_mark_notify_delay(mut self, delay: Duration) -> Self {
        self.options.mark_notify_delay = delay;
        self
    }

    /// Set the map provider capability (mandatory)
    pub fn with_map_provider(mut self, map: Box<dyn MapProvider>) -> Self {
        self.map = Some(map);
        self
    }

    /// Set the search provider capability
    pub fn with_search_provider(mut self, searcher: Box<dyn SearchProvider>) -> Self {
        self.searcher = Some(searcher);
        self
    }

    /// Set the snapshot capturer capability
    pub fn with_snapshot_capturer(mut self, capturer: Box<dyn SnapshotCapturer>) -> Self {
        self.capturer = Some(capturer);
        self
    }

    /// Set the callback sink for outbound events
    pub fn with_callbacks(mut self, callbacks: Box<dyn PickerCallbacks>) -> Self {
        self.callbacks = Some(callbacks);
        self
    }

    /// Set the opaque view handle acquired on mount (mandatory)
    pub fn with_view(mut self, view: ViewHandle) -> Self {
        self.view = Some(view);
        self
    }

    /// Build the picker in the `Uninitialized` phase
    pub fn build(self) -> Result<Picker> {
        let map = self
            .map
            .ok_or_else(|| PickerError::ProviderLoad("no map provider injected".to_string()))?;
        let view = self
            .view
            .ok_or_else(|| PickerError::ProviderLoad("no view handle acquired".to_string()))?;
        let callbacks = self
            .callbacks
            .unwrap_or_else(|| Box::new(NoopCallbacks));

        Ok(Picker::new(
            self.options,
            map,
            self.searcher,
            self.capturer,
            callbacks,
            view,
        ))
    }
}

impl Default for PickerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
