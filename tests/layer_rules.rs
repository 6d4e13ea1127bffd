//! Road-net overlay invariants across reachable view states.

mod common;

use common::*;
use mappick::prelude::*;

fn satellite_picker(map: MockMap, road_net: bool) -> Picker {
    PickerBuilder::new()
        .with_map_provider(Box::new(map))
        .with_view(ViewHandle::new(1))
        .with_default_view(ViewKind::Satellite)
        .with_road_net_visible(road_net)
        .build()
        .expect("picker builds")
}

/// The overlay is present iff view == Satellite and the preference is set.
fn assert_invariant(picker: &Picker, log: &std::sync::Arc<std::sync::Mutex<MapLog>>) {
    let attached = log.lock().unwrap().road_net_count();
    let expected = picker.view_kind() == ViewKind::Satellite && picker.road_net_visible();
    assert_eq!(attached == 1, expected, "road-net invariant violated");
    assert!(attached <= 1, "duplicate road-net layers");
}

#[tokio::test]
async fn road_net_follows_view_switches() {
    let (map, log) = MockMap::new();
    let mut picker = satellite_picker(map, true);
    picker.provider_ready().await;
    assert_invariant(&picker, &log);

    picker.set_view(ViewKind::TwoD);
    assert_eq!(log.lock().unwrap().road_net_count(), 0);
    // The stored preference survives the 2D detour.
    assert!(picker.road_net_visible());
    assert_invariant(&picker, &log);

    picker.set_view(ViewKind::Satellite);
    assert_eq!(log.lock().unwrap().road_net_count(), 1);
    assert_invariant(&picker, &log);
}

#[tokio::test]
async fn toggling_preference_attaches_and_detaches() {
    let (map, log) = MockMap::new();
    let mut picker = satellite_picker(map, false);
    picker.provider_ready().await;
    assert_eq!(log.lock().unwrap().road_net_count(), 0);

    assert!(picker.toggle_road_net());
    assert_invariant(&picker, &log);
    assert!(!picker.toggle_road_net());
    assert_invariant(&picker, &log);
}

#[tokio::test]
async fn preference_on_two_d_never_attaches() {
    let (map, log) = MockMap::new();
    let mut picker = PickerBuilder::new()
        .with_map_provider(Box::new(map))
        .with_view(ViewHandle::new(1))
        .with_default_view(ViewKind::TwoD)
        .with_road_net_visible(true)
        .build()
        .expect("picker builds");
    picker.provider_ready().await;

    assert_eq!(log.lock().unwrap().road_net_count(), 0);
    assert!(picker.road_net_visible());
    assert_invariant(&picker, &log);
}

#[tokio::test]
async fn repeated_switches_never_duplicate_layers() {
    let (map, log) = MockMap::new();
    let mut picker = satellite_picker(map, true);
    picker.provider_ready().await;

    for _ in 0..4 {
        picker.set_view(ViewKind::TwoD);
        picker.set_view(ViewKind::Satellite);
        assert_invariant(&picker, &log);
    }
    assert_eq!(log.lock().unwrap().road_net_count(), 1);
}

#[tokio::test]
async fn toggle_is_ignored_when_road_net_not_offered() {
    let (map, log) = MockMap::new();
    let mut picker = PickerBuilder::new()
        .with_map_provider(Box::new(map))
        .with_view(ViewHandle::new(1))
        .with_default_view(ViewKind::Satellite)
        .with_layer_choices(vec![LayerChoice::TwoD, LayerChoice::Satellite])
        .build()
        .expect("picker builds");
    picker.provider_ready().await;

    assert!(!picker.toggle_road_net());
    assert_eq!(log.lock().unwrap().road_net_count(), 0);
}

#[tokio::test]
async fn layer_switches_are_suspended_while_screenshotting() {
    let (map, log) = MockMap::new();
    let mut picker = PickerBuilder::new()
        .with_map_provider(Box::new(map))
        .with_view(ViewHandle::new(1))
        .with_default_view(ViewKind::Satellite)
        .with_road_net_visible(true)
        .with_snapshot_capturer(Box::new(MockCapturer::returning("img")))
        .build()
        .expect("picker builds");
    picker.provider_ready().await;
    picker.start_screenshot().await;
    assert_eq!(picker.phase(), Phase::Screenshotting);

    picker.set_view(ViewKind::TwoD);
    assert_eq!(picker.view_kind(), ViewKind::Satellite);

    picker.cancel_screenshot();
    picker.set_view(ViewKind::TwoD);
    assert_eq!(picker.view_kind(), ViewKind::TwoD);
    assert_invariant(&picker, &log);
}
