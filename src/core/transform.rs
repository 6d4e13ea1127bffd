//! Coordinate transform gateway between WGS84 and GCJ02.
//!
//! The GCJ02 system offsets WGS84 by a non-linear, position-dependent amount
//! inside mainland China. The forward transform is closed-form; the inverse is
//! not, so [`to_external`] runs a short fixed-point iteration. Both functions
//! are pure and never touch the network.
//!
//! Callers must cross through this gateway at every coordinate-space boundary:
//! constructor input (external to display), marker placement (display to
//! external before notifying the caller), and search-result selection
//! (external to display for recentering).

use crate::core::geo::{Gcj02, LatLng, Wgs84};
use std::f64::consts::PI;

/// Krasovsky 1940 ellipsoid semi-major axis (meters).
const A: f64 = 6378245.0;
/// Krasovsky 1940 first eccentricity squared.
const EE: f64 = 0.006_693_421_622_965_943;

/// Convergence threshold for the inverse iteration (degrees).
const INVERSE_EPSILON: f64 = 1e-9;
/// Iteration cap for the inverse; in practice three rounds converge.
const INVERSE_MAX_ROUNDS: usize = 10;

/// Transforms an external WGS84 position to the GCJ02 display space.
pub fn to_display(external: Wgs84) -> Gcj02 {
    let LatLng { lat, lng } = external.0;
    if out_of_china(lat, lng) {
        return Gcj02(external.0);
    }
    let (d_lat, d_lng) = offset(lat, lng);
    Gcj02(LatLng::new(lat + d_lat, lng + d_lng))
}

/// Transforms a GCJ02 display position back to external WGS84.
///
/// The offset has no closed-form inverse, so this iterates
/// `guess -= to_display(guess) - target` until the correction falls below
/// [`INVERSE_EPSILON`]. Round-tripping stays within 1e-6 degrees.
pub fn to_external(display: Gcj02) -> Wgs84 {
    let LatLng { lat, lng } = display.0;
    if out_of_china(lat, lng) {
        return Wgs84(display.0);
    }
    let mut guess = display.0;
    for _ in 0..INVERSE_MAX_ROUNDS {
        let forward = to_display(Wgs84(guess)).0;
        let d_lat = forward.lat - lat;
        let d_lng = forward.lng - lng;
        guess.lat -= d_lat;
        guess.lng -= d_lng;
        if d_lat.abs() < INVERSE_EPSILON && d_lng.abs() < INVERSE_EPSILON {
            break;
        }
    }
    Wgs84(guess)
}

/// The GCJ02 obfuscation only applies inside mainland China; positions
/// outside this bounding region pass through unchanged.
fn out_of_china(lat: f64, lng: f64) -> bool {
    !(72.004..=137.8347).contains(&lng) || !(0.8293..=55.8271).contains(&lat)
}

/// Computes the (lat, lng) offset in degrees for a WGS84 position.
fn offset(lat: f64, lng: f64) -> (f64, f64) {
    let x = lng - 105.0;
    let y = lat - 35.0;

    let mut d_lat = warp_lat(x, y);
    let mut d_lng = warp_lng(x, y);

    let rad_lat = lat / 180.0 * PI;
    let mut magic = rad_lat.sin();
    magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    d_lat = (d_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    d_lng = (d_lng * 180.0) / (A / sqrt_magic * rad_lat.cos() * PI);

    (d_lat, d_lng)
}

fn warp_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0
        + 2.0 * x
        + 3.0 * y
        + 0.2 * y * y
        + 0.1 * x * y
        + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn warp_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0
        + x
        + 2.0 * y
        + 0.1 * x * x
        + 0.1 * x * y
        + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}
