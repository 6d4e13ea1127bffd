//! Place-search capability.

use crate::core::geo::Wgs84;
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One hit returned by a place search.
///
/// Positions stay in the external (WGS84) representation until the user
/// selects the result; only selection converts to display space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub position: Wgs84,
}

impl SearchResult {
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: Wgs84) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
        }
    }
}

/// Capability trait over a keyword place-search backend.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Look up places matching the keyword.
    async fn search(&self, keyword: &str) -> Result<Vec<SearchResult>>;
}
