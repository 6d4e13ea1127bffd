//! Layer/overlay controller.
//!
//! Tracks the active base view and the user's road-net preference, and keeps
//! the provider's layer list consistent with both. Invariant: the road-net
//! overlay is attached iff the base view is satellite and the preference flag
//! is set. Switching to 2D detaches the overlay without clearing the
//! preference; switching back reattaches it.

use crate::core::constants::ROAD_NET_LAYER_ID;
use crate::layers::ViewKind;
use crate::providers::map::MapProvider;

pub struct LayerController {
    view: ViewKind,
    road_net_visible: bool,
    road_net_url: String,
}

impl LayerController {
    pub fn new(view: ViewKind, road_net_visible: bool, road_net_url: impl Into<String>) -> Self {
        Self {
            view,
            road_net_visible,
            road_net_url: road_net_url.into(),
        }
    }

    pub fn view(&self) -> ViewKind {
        self.view
    }

    /// The stored preference flag, independent of whether the overlay is
    /// currently attached.
    pub fn road_net_visible(&self) -> bool {
        self.road_net_visible
    }

    /// Switch the base view and resync the overlay.
    pub fn set_view(&mut self, view: ViewKind, provider: &mut dyn MapProvider) {
        self.view = view;
        provider.set_view(view);
        self.sync_road_net(provider);
    }

    /// Update the road-net preference and resync the overlay.
    pub fn set_road_net_visible(&mut self, visible: bool, provider: &mut dyn MapProvider) {
        self.road_net_visible = visible;
        self.sync_road_net(provider);
    }

    /// Flip the road-net preference, returning the new value.
    pub fn toggle_road_net(&mut self, provider: &mut dyn MapProvider) -> bool {
        let next = !self.road_net_visible;
        self.set_road_net_visible(next, provider);
        next
    }

    /// Reconcile the provider layer list with the current view and
    /// preference. Detach-first makes the operation idempotent: no duplicate
    /// layers, and detaching when absent is a no-op.
    pub fn sync_road_net(&self, provider: &mut dyn MapProvider) {
        Self::detach_road_net(provider);
        if self.view == ViewKind::Satellite && self.road_net_visible {
            provider.add_layer(ROAD_NET_LAYER_ID, &self.road_net_url);
            log::debug!("road-net overlay attached");
        }
    }

    fn detach_road_net(provider: &mut dyn MapProvider) {
        for id in provider.layer_ids() {
            if id == ROAD_NET_LAYER_ID {
                provider.remove_layer(&id);
            }
        }
    }
}
