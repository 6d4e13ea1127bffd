#![allow(dead_code)]

//! Recording test doubles for the provider capabilities.

use async_trait::async_trait;
use futures::future::BoxFuture;
use mappick::prelude::*;
use std::sync::{Arc, Mutex};

/// Everything the mock map provider was asked to do.
#[derive(Debug)]
pub struct MapLog {
    pub center: Option<(Gcj02, f64)>,
    pub view: Option<ViewKind>,
    pub max_zoom: Option<f64>,
    pub zoom: f64,
    pub overlays: Vec<Overlay>,
    pub layers: Vec<(String, String)>,
    pub menu: Option<ContextMenu>,
    pub layer_adds: u32,
}

impl Default for MapLog {
    fn default() -> Self {
        Self {
            center: None,
            view: None,
            max_zoom: None,
            zoom: 16.0,
            overlays: Vec::new(),
            layers: Vec::new(),
            menu: None,
            layer_adds: 0,
        }
    }
}

impl MapLog {
    pub fn road_net_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|(id, _)| id == constants::ROAD_NET_LAYER_ID)
            .count()
    }

    pub fn marker(&self) -> Option<&Overlay> {
        self.overlays
            .iter()
            .find(|o| o.id == constants::MARKER_OVERLAY_ID)
    }
}

/// Scripted outcome of a reverse geocode.
#[derive(Debug, Clone)]
pub enum GeocodeScript {
    Label(String),
    NoAddress,
    Fail,
}

pub struct MockMap {
    pub log: Arc<Mutex<MapLog>>,
    pub geocode: GeocodeScript,
    pub fail_menu: bool,
}

impl MockMap {
    pub fn new() -> (Self, Arc<Mutex<MapLog>>) {
        let log = Arc::new(Mutex::new(MapLog::default()));
        (
            Self {
                log: log.clone(),
                geocode: GeocodeScript::NoAddress,
                fail_menu: false,
            },
            log,
        )
    }

    pub fn with_geocode(mut self, script: GeocodeScript) -> Self {
        self.geocode = script;
        self
    }

    pub fn with_failing_menu(mut self) -> Self {
        self.fail_menu = true;
        self
    }
}

#[async_trait]
impl MapProvider for MockMap {
    fn set_center(&mut self, center: Gcj02, zoom: f64) {
        self.log.lock().unwrap().center = Some((center, zoom));
    }

    fn set_view(&mut self, view: ViewKind) {
        self.log.lock().unwrap().view = Some(view);
    }

    fn set_max_zoom(&mut self, zoom: f64) {
        self.log.lock().unwrap().max_zoom = Some(zoom);
    }

    fn zoom(&self) -> f64 {
        self.log.lock().unwrap().zoom
    }

    fn add_overlay(&mut self, overlay: Overlay) {
        self.log.lock().unwrap().overlays.push(overlay);
    }

    fn clear_overlays(&mut self) {
        self.log.lock().unwrap().overlays.clear();
    }

    fn overlays(&self) -> Vec<Overlay> {
        self.log.lock().unwrap().overlays.clone()
    }

    fn add_layer(&mut self, id: &str, url: &str) {
        let mut log = self.log.lock().unwrap();
        log.layer_adds += 1;
        log.layers.push((id.to_string(), url.to_string()));
    }

    fn remove_layer(&mut self, id: &str) {
        self.log
            .lock()
            .unwrap()
            .layers
            .retain(|(layer_id, _)| layer_id != id);
    }

    fn layer_ids(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap()
            .layers
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn install_menu(&mut self, menu: ContextMenu) -> Result<()> {
        if self.fail_menu {
            return Err(PickerError::MenuSetup("menu rejected by SDK".to_string()));
        }
        self.log.lock().unwrap().menu = Some(menu);
        Ok(())
    }

    async fn reverse_geocode(&self, _position: Gcj02) -> Result<Option<String>> {
        match &self.geocode {
            GeocodeScript::Label(label) => Ok(Some(label.clone())),
            GeocodeScript::NoAddress => Ok(None),
            GeocodeScript::Fail => Err(PickerError::Geocode("backend unreachable".to_string())),
        }
    }
}

/// Scripted search backend.
pub enum SearchScript {
    Results(Vec<SearchResult>),
    Fail,
}

pub struct MockSearch {
    pub script: SearchScript,
}

impl MockSearch {
    pub fn returning(results: Vec<SearchResult>) -> Self {
        Self {
            script: SearchScript::Results(results),
        }
    }

    pub fn failing() -> Self {
        Self {
            script: SearchScript::Fail,
        }
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    async fn search(&self, _keyword: &str) -> Result<Vec<SearchResult>> {
        match &self.script {
            SearchScript::Results(results) => Ok(results.clone()),
            SearchScript::Fail => Err(PickerError::Search("search backend down".to_string())),
        }
    }
}

/// Scripted snapshot backend.
pub struct MockCapturer {
    pub image: std::result::Result<String, String>,
}

impl MockCapturer {
    pub fn returning(image: impl Into<String>) -> Self {
        Self {
            image: Ok(image.into()),
        }
    }

    pub fn failing() -> Self {
        Self {
            image: Err("canvas unavailable".to_string()),
        }
    }
}

#[async_trait]
impl SnapshotCapturer for MockCapturer {
    async fn capture(&self, _view: &ViewHandle) -> Result<String> {
        match &self.image {
            Ok(image) => Ok(image.clone()),
            Err(message) => Err(PickerError::Snapshot(message.clone())),
        }
    }
}

/// Every event the picker emitted, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackEvent {
    Error(String),
    Mark {
        position: Wgs84,
        label: Option<String>,
    },
    Back,
    Screenshot {
        image: String,
        north_arrow: f64,
        scale: f64,
    },
}

pub struct RecordingCallbacks {
    pub events: Arc<Mutex<Vec<CallbackEvent>>>,
    /// When set, `on_screenshot` returns a continuation that flips the flag.
    pub continuation_flag: Option<Arc<Mutex<bool>>>,
}

impl RecordingCallbacks {
    pub fn new() -> (Self, Arc<Mutex<Vec<CallbackEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: events.clone(),
                continuation_flag: None,
            },
            events,
        )
    }

    pub fn with_continuation(mut self, flag: Arc<Mutex<bool>>) -> Self {
        self.continuation_flag = Some(flag);
        self
    }
}

impl PickerCallbacks for RecordingCallbacks {
    fn on_error(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(CallbackEvent::Error(message.to_string()));
    }

    fn on_mark(&self, position: Wgs84, label: Option<&str>) {
        self.events.lock().unwrap().push(CallbackEvent::Mark {
            position,
            label: label.map(str::to_string),
        });
    }

    fn on_back(&self) {
        self.events.lock().unwrap().push(CallbackEvent::Back);
    }

    fn on_screenshot(&self, shot: Screenshot) -> Option<BoxFuture<'static, ()>> {
        self.events.lock().unwrap().push(CallbackEvent::Screenshot {
            image: shot.image_data,
            north_arrow: shot.north_arrow,
            scale: shot.scale,
        });
        self.continuation_flag.clone().map(|flag| {
            Box::pin(async move {
                *flag.lock().unwrap() = true;
            }) as BoxFuture<'static, ()>
        })
    }
}

/// Route engine logs to the test harness output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Tiananmen Square, the canonical external test position.
pub fn tiananmen() -> Wgs84 {
    Wgs84::new(39.9070, 116.3976)
}

pub fn sample_results() -> Vec<SearchResult> {
    vec![
        SearchResult::new("B01", "East Gate", Wgs84::new(39.9081, 116.3990)),
        SearchResult::new("B02", "West Gate", Wgs84::new(39.9075, 116.3941)),
    ]
}
