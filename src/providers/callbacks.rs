//! Outbound event sink.
//!
//! The embedding caller receives picker events through this trait. Every
//! method defaults to a no-op so hosts implement only what they consume.

use crate::core::geo::Wgs84;
use futures::future::BoxFuture;

/// Payload delivered after a confirmed screenshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Screenshot {
    /// PNG data URL of the captured (and possibly cropped) map.
    pub image_data: String,
    /// Bearing of the north arrow in degrees; the engine never rotates the
    /// view, so this is always 0.
    pub north_arrow: f64,
    /// Ground distance covered by 100 display pixels at the current zoom and
    /// latitude.
    pub scale: f64,
}

/// Callback sink for events leaving the picker.
pub trait PickerCallbacks: Send + Sync {
    /// Non-fatal failure surfaced to the host (provider load, menu setup,
    /// snapshot capture).
    fn on_error(&self, _message: &str) {}

    /// A marker was placed; position is external (WGS84), label is the
    /// reverse-geocoded description when one resolved.
    fn on_mark(&self, _position: Wgs84, _label: Option<&str>) {}

    /// The user asked to leave the widget.
    fn on_back(&self) {}

    /// A screenshot was confirmed. The host may return a pending operation;
    /// the engine awaits it before resuming.
    fn on_screenshot(&self, _shot: Screenshot) -> Option<BoxFuture<'static, ()>> {
        None
    }
}

/// Sink that drops every event.
pub struct NoopCallbacks;

impl PickerCallbacks for NoopCallbacks {}
