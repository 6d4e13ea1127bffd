//! Reference [`SearchProvider`] over an AMAP-style place-text HTTP endpoint.
//!
//! The endpoint answers keyword queries with a `pois` array of
//! `{id, name, location}` entries where `location` is a `"lng,lat"` string in
//! GCJ02. Results are converted to the external representation here so the
//! rest of the engine only ever sees WGS84 search results.

use crate::core::constants::DEFAULT_SEARCH_PAGE_SIZE;
use crate::core::geo::Gcj02;
use crate::core::transform::to_external;
use crate::providers::search::{SearchProvider, SearchResult};
use crate::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Shared async HTTP client with a custom User-Agent. Building the client
/// once avoids the cost of TLS and connection pool setup for every query.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("mappick/0.1 (+https://github.com/example/mappick)")
        .build()
        .expect("failed to build reqwest async client")
});

const DEFAULT_ENDPOINT: &str = "https://restapi.amap.com/v3/place/text";

/// Place search backed by an AMAP-compatible place-text service.
pub struct AmapSearch {
    endpoint: String,
    key: String,
    city: String,
    page_size: u32,
}

impl AmapSearch {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            key: key.into(),
            city: String::new(),
            page_size: DEFAULT_SEARCH_PAGE_SIZE,
        }
    }

    /// Restrict results to a city or region code.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Point at a different compatible endpoint (e.g. a proxy).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

#[derive(Debug, Deserialize)]
struct PlaceTextResponse {
    #[serde(default)]
    pois: Vec<Poi>,
}

#[derive(Debug, Deserialize)]
struct Poi {
    #[serde(default)]
    id: String,
    name: String,
    location: String,
}

/// Maps one POI entry to a search result, converting its GCJ02 location to
/// the external representation. Entries with an unparseable location are
/// dropped rather than failing the whole response.
fn poi_to_result(poi: &Poi) -> Option<SearchResult> {
    let (lng, lat) = poi.location.split_once(',')?;
    let lng: f64 = lng.trim().parse().ok()?;
    let lat: f64 = lat.trim().parse().ok()?;
    let display = Gcj02::new(lat, lng);
    if !display.is_valid() {
        log::warn!("dropping poi {:?} with invalid location {:?}", poi.name, poi.location);
        return None;
    }
    Some(SearchResult::new(
        poi.id.clone(),
        poi.name.clone(),
        to_external(display),
    ))
}

#[async_trait]
impl SearchProvider for AmapSearch {
    async fn search(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        let offset = self.page_size.to_string();
        let response = HTTP_CLIENT
            .get(&self.endpoint)
            .query(&[
                ("key", self.key.as_str()),
                ("city", self.city.as_str()),
                ("offset", offset.as_str()),
                ("page", "1"),
                ("keywords", keyword),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: PlaceTextResponse = response.json().await?;
        let results: Vec<SearchResult> = body.pois.iter().filter_map(poi_to_result).collect();
        log::debug!("search {:?} returned {} results", keyword, results.len());
        Ok(results)
    }
}
