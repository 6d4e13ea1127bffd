pub mod controller;

pub use controller::LayerController;

use std::fmt;
use std::str::FromStr;

/// Base view of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    TwoD,
    Satellite,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::TwoD => write!(f, "2d"),
            ViewKind::Satellite => write!(f, "satellite"),
        }
    }
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2d" => Ok(ViewKind::TwoD),
            "satellite" => Ok(ViewKind::Satellite),
            other => Err(format!("unknown view kind: {other}")),
        }
    }
}

/// One entry of the layer set offered on the toolbar.
///
/// `RoadNet` is an overlay toggle, not a base view; it is only meaningful
/// while the satellite view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerChoice {
    TwoD,
    Satellite,
    RoadNet,
}

impl fmt::Display for LayerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerChoice::TwoD => write!(f, "2d"),
            LayerChoice::Satellite => write!(f, "satellite"),
            LayerChoice::RoadNet => write!(f, "road-net"),
        }
    }
}

impl FromStr for LayerChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2d" => Ok(LayerChoice::TwoD),
            "satellite" => Ok(LayerChoice::Satellite),
            "road-net" => Ok(LayerChoice::RoadNet),
            other => Err(format!("unknown layer choice: {other}")),
        }
    }
}
