//! The picker session engine.
//!
//! `Picker` owns the session state exclusively and mediates between the
//! injected provider capabilities and the embedding caller. Every suspension
//! point re-validates the session phase and its sequence token, so completions
//! arriving after a newer action, or after dispose, become no-ops.

use crate::core::config::PickerOptions;
use crate::core::constants::{DEFAULT_MARKER_LABEL, INITIAL_RESOLUTION, MARKER_OVERLAY_ID};
use crate::core::geo::{Gcj02, Wgs84};
use crate::core::transform::{to_display, to_external};
use crate::layers::{controller::LayerController, ViewKind};
use crate::providers::{
    callbacks::{PickerCallbacks, Screenshot},
    map::{ContextMenu, MapProvider, MenuAction, MenuItem, Overlay},
    search::{SearchProvider, SearchResult},
    snapshot::{SnapshotCapturer, ViewHandle},
};
use crate::runtime::async_delay;
use crate::session::state::{Phase, SessionState};
use crate::Result;

/// Token for one placement action.
///
/// `begin_mark` issues it, the geocode completion hands it back; a mismatch
/// against the current sequence means a newer placement superseded this one.
#[derive(Debug, Clone, Copy)]
pub struct MarkTicket {
    seq: u64,
    external: Wgs84,
}

impl MarkTicket {
    /// The placed position in the external representation.
    pub fn position(&self) -> Wgs84 {
        self.external
    }
}

/// Token for one search request; last write wins.
#[derive(Debug, Clone, Copy)]
pub struct SearchTicket {
    seq: u64,
}

/// The map place-picker session engine.
pub struct Picker {
    options: PickerOptions,
    state: SessionState,
    layers: LayerController,
    map: Box<dyn MapProvider>,
    searcher: Option<Box<dyn SearchProvider>>,
    capturer: Option<Box<dyn SnapshotCapturer>>,
    callbacks: Box<dyn PickerCallbacks>,
    view: ViewHandle,
}

impl Picker {
    pub(crate) fn new(
        options: PickerOptions,
        map: Box<dyn MapProvider>,
        searcher: Option<Box<dyn SearchProvider>>,
        capturer: Option<Box<dyn SnapshotCapturer>>,
        callbacks: Box<dyn PickerCallbacks>,
        view: ViewHandle,
    ) -> Self {
        // Constructor boundary: external to display. A missing or malformed
        // position means the session starts without a marker.
        let initial_display = options
            .initial_position
            .filter(|p| p.is_valid())
            .map(to_display);
        let layers = LayerController::new(
            options.default_view,
            options.default_road_net_visible,
            options.road_net_url.clone(),
        );
        let state = SessionState::new(initial_display, options.effective_label());
        Self {
            options,
            state,
            layers,
            map,
            searcher,
            capturer,
            callbacks,
            view,
        }
    }

    // --- accessors -------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Current marker position, display representation.
    pub fn position(&self) -> Option<Gcj02> {
        self.state.position
    }

    pub fn label(&self) -> &str {
        &self.state.label
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.state.results
    }

    pub fn view_kind(&self) -> ViewKind {
        self.layers.view()
    }

    pub fn road_net_visible(&self) -> bool {
        self.layers.road_net_visible()
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Captured image awaiting confirm/cancel, if any.
    pub fn pending_screenshot(&self) -> Option<&str> {
        self.state.pending_image.as_deref()
    }

    // --- lifecycle -------------------------------------------------------

    /// The map provider finished initializing: `Uninitialized -> Ready`.
    ///
    /// Draws the initial marker if one was configured, installs the context
    /// menu, attaches the road-net overlay per the startup preference and
    /// issues the initial search when a keyword was supplied. Menu failures
    /// degrade the session instead of killing it.
    pub async fn provider_ready(&mut self) {
        if self.state.phase != Phase::Uninitialized {
            return;
        }
        self.state.phase = Phase::Ready;

        self.map.set_max_zoom(self.options.max_zoom);
        self.map.set_view(self.layers.view());
        if let Some(position) = self.state.position {
            self.map.set_center(position, self.options.zoom);
            self.draw_marker();
        }
        self.install_menu();
        self.layers.sync_road_net(self.map.as_mut());

        if let Some(keyword) = self.options.initial_keyword.clone() {
            self.search(&keyword).await;
        }
        log::debug!("picker ready");
    }

    /// The map provider could not be loaded; the session stays degraded but
    /// alive.
    pub fn provider_load_failed(&self, message: &str) {
        log::error!("map provider failed to load: {message}");
        self.callbacks
            .on_error(&format!("map provider failed to load: {message}"));
    }

    /// Tear the session down. All pending completions become no-ops.
    pub fn dispose(&mut self) {
        if self.state.phase == Phase::Disposed {
            return;
        }
        self.state.phase = Phase::Disposed;
        // Invalidate every outstanding ticket.
        self.state.mark_seq += 1;
        self.state.search_seq += 1;
        self.state.pending_image = None;
        self.state.results.clear();
        self.map.clear_overlays();
        log::debug!("picker disposed");
    }

    // --- marking ---------------------------------------------------------

    /// Place the marker at a display-space position and resolve its label.
    pub async fn place_marker(&mut self, at: Gcj02) {
        let Some(ticket) = self.begin_mark(at) else {
            return;
        };
        let outcome = self.map.reverse_geocode(at).await;
        self.complete_mark(ticket, outcome).await;
    }

    /// First half of a placement: records the position, bumps the sequence
    /// and hands out the ticket the geocode completion must present.
    pub fn begin_mark(&mut self, at: Gcj02) -> Option<MarkTicket> {
        if !self.state.phase.accepts_interaction() {
            return None;
        }
        if !at.is_valid() {
            log::warn!("ignoring marker placement at invalid position {at:?}");
            return None;
        }
        self.state.phase = Phase::Marking;
        self.state.mark_seq += 1;
        self.state.position = Some(at);
        Some(MarkTicket {
            seq: self.state.mark_seq,
            // Placement boundary: display to external, before anything
            // reaches the caller.
            external: to_external(at),
        })
    }

    /// Second half of a placement: applies the geocode outcome if the ticket
    /// is still current, then notifies the caller after the configured delay
    /// ceiling.
    ///
    /// A geocode failure is non-fatal: the label falls back to the default
    /// placeholder and the error callback stays silent.
    pub async fn complete_mark(&mut self, ticket: MarkTicket, outcome: Result<Option<String>>) {
        if !self.state.phase.is_active() {
            return;
        }
        if ticket.seq != self.state.mark_seq {
            log::debug!(
                "discarding stale geocode completion (seq {} < {})",
                ticket.seq,
                self.state.mark_seq
            );
            return;
        }

        let label = match outcome {
            Ok(label) => label,
            Err(e) => {
                log::warn!("reverse geocode failed, using fallback label: {e}");
                None
            }
        };

        self.state.label = label
            .clone()
            .unwrap_or_else(|| DEFAULT_MARKER_LABEL.to_string());
        self.state.phase = Phase::Ready;
        self.draw_marker();

        if label.is_some() {
            async_delay(self.options.mark_notify_delay).await;
            // A newer placement or a dispose may have landed while waiting.
            if !self.state.phase.is_active() || ticket.seq != self.state.mark_seq {
                return;
            }
        }
        self.callbacks.on_mark(ticket.external, label.as_deref());
    }

    // --- searching -------------------------------------------------------

    /// Run a keyword search and apply its outcome.
    pub async fn search(&mut self, keyword: &str) {
        let Some(ticket) = self.begin_search(keyword) else {
            return;
        };
        let outcome = match self.searcher.as_ref() {
            Some(searcher) => searcher.search(keyword).await,
            None => Ok(Vec::new()),
        };
        self.apply_search(ticket, outcome);
    }

    /// First half of a search: bumps the query sequence so any in-flight
    /// request is superseded.
    pub fn begin_search(&mut self, keyword: &str) -> Option<SearchTicket> {
        if keyword.trim().is_empty() || !self.state.phase.accepts_interaction() {
            return None;
        }
        self.state.phase = Phase::Searching;
        self.state.search_seq += 1;
        Some(SearchTicket {
            seq: self.state.search_seq,
        })
    }

    /// Second half of a search: replaces the result set wholesale if the
    /// ticket is still current. Failure and empty responses both clear the
    /// list; neither reaches the error callback.
    pub fn apply_search(&mut self, ticket: SearchTicket, outcome: Result<Vec<SearchResult>>) {
        if !self.state.phase.is_active() {
            return;
        }
        if ticket.seq != self.state.search_seq {
            log::debug!(
                "discarding stale search response (seq {} < {})",
                ticket.seq,
                self.state.search_seq
            );
            return;
        }
        if self.state.phase == Phase::Searching {
            self.state.phase = Phase::Ready;
        }
        match outcome {
            Ok(results) => {
                if results.is_empty() {
                    log::debug!("search returned no results");
                }
                self.state.results = results;
            }
            Err(e) => {
                log::warn!("search failed: {e}");
                self.state.results.clear();
            }
        }
    }

    /// Adopt a search result: position and label are replaced together,
    /// never one without the other, and the map recenters on the selection.
    pub fn select_result(&mut self, result: &SearchResult) {
        if !self.state.phase.accepts_interaction() {
            return;
        }
        if !result.position.is_valid() {
            log::warn!("ignoring search result with invalid position {:?}", result.position);
            return;
        }
        // Selection boundary: external to display.
        let display = to_display(result.position);
        self.state.position = Some(display);
        self.state.label = result.name.clone();
        self.map.set_center(display, self.options.zoom);
        self.draw_marker();
    }

    // --- layers ----------------------------------------------------------

    pub fn set_view(&mut self, view: ViewKind) {
        if !self.state.phase.accepts_interaction() {
            return;
        }
        self.layers.set_view(view, self.map.as_mut());
    }

    pub fn set_road_net_visible(&mut self, visible: bool) {
        if !self.state.phase.accepts_interaction() || !self.options.offers_road_net() {
            return;
        }
        self.layers.set_road_net_visible(visible, self.map.as_mut());
    }

    /// Flip the road-net preference, returning the new value. No-op when the
    /// road-net toggle is not part of the configured layer set.
    pub fn toggle_road_net(&mut self) -> bool {
        if !self.state.phase.accepts_interaction() || !self.options.offers_road_net() {
            return self.layers.road_net_visible();
        }
        self.layers.toggle_road_net(self.map.as_mut())
    }

    // --- screenshot ------------------------------------------------------

    /// Enter the screenshot flow: overlays are hidden and the visible map is
    /// captured. Capture failure reports through the error callback and
    /// restores the marker.
    pub async fn start_screenshot(&mut self) {
        if self.state.phase != Phase::Ready {
            return;
        }
        let Some(capturer) = self.capturer.as_ref() else {
            log::debug!("screenshot requested without a capturer");
            return;
        };
        self.state.phase = Phase::Screenshotting;
        self.map.clear_overlays();

        match capturer.capture(&self.view).await {
            Ok(image) => {
                log::debug!("captured snapshot ({} bytes)", image.len());
                self.state.pending_image = Some(image);
            }
            Err(e) => {
                log::error!("snapshot capture failed: {e}");
                self.callbacks
                    .on_error(&format!("snapshot capture failed: {e}"));
                self.state.phase = Phase::Ready;
                self.draw_marker();
            }
        }
    }

    /// Confirm the pending screenshot with the (possibly cropped) image.
    ///
    /// The marker is restored, the caller receives the image together with
    /// the 100-pixel ground scale, and any pending operation the caller
    /// returns is awaited before the session resumes.
    pub async fn confirm_screenshot(&mut self, image_data: String) {
        if self.state.phase != Phase::Screenshotting {
            return;
        }
        self.state.pending_image = None;
        self.state.phase = Phase::Ready;
        self.draw_marker();

        let shot = Screenshot {
            image_data,
            north_arrow: 0.0,
            scale: self.ground_scale_per_100px(),
        };
        if let Some(pending) = self.callbacks.on_screenshot(shot) {
            pending.await;
        }
    }

    /// Discard the pending screenshot and restore the marker.
    pub fn cancel_screenshot(&mut self) {
        if self.state.phase != Phase::Screenshotting {
            return;
        }
        self.state.pending_image = None;
        self.state.phase = Phase::Ready;
        self.draw_marker();
    }

    /// Ground distance covered by 100 display pixels at the current zoom and
    /// marker latitude.
    pub fn ground_scale_per_100px(&self) -> f64 {
        let lat = self.state.position.map(|p| p.lat()).unwrap_or(0.0);
        100_000.0 * INITIAL_RESOLUTION * lat.to_radians().cos() / 2_f64.powf(self.map.zoom())
    }

    // --- misc ------------------------------------------------------------

    /// Dispatch a context-menu click reported by the map provider.
    pub async fn handle_menu(&mut self, action: MenuAction, at: Gcj02) {
        match action {
            MenuAction::Mark => self.place_marker(at).await,
            MenuAction::Screenshot => self.start_screenshot().await,
        }
    }

    /// The user asked to leave the widget.
    pub fn back(&self) {
        if !self.state.phase.is_active() {
            return;
        }
        self.callbacks.on_back();
    }

    /// Redraw the single authoritative marker with its info-window label.
    fn draw_marker(&mut self) {
        let Some(position) = self.state.position else {
            return;
        };
        self.map.clear_overlays();
        self.map.add_overlay(Overlay::marker(
            MARKER_OVERLAY_ID,
            position,
            self.state.label.clone(),
        ));
    }

    fn install_menu(&mut self) {
        let mut items = vec![MenuItem::new(self.options.mark_label.clone(), MenuAction::Mark)];
        if self.capturer.is_some() {
            items.push(MenuItem::new(
                self.options.screenshot_label.clone(),
                MenuAction::Screenshot,
            ));
        }
        let menu = ContextMenu {
            width: self.options.menu_width,
            items,
        };
        if let Err(e) = self.map.install_menu(menu) {
            log::error!("context menu setup failed: {e}");
            self.callbacks
                .on_error(&format!("context menu setup failed: {e}"));
        }
    }
}
