//! Engine-wide constants derived from common web-map conventions.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default zoom level used when centering on a picked or selected position.
pub const DEFAULT_ZOOM: f64 = 16.0;

/// Maximum zoom level requested from the map provider.
pub const DEFAULT_MAX_ZOOM: f64 = 18.0;

/// Web-Mercator resolution at zoom 0 on the equator (meters per pixel).
pub const INITIAL_RESOLUTION: f64 = 156_543.033_92;

/// Identity of the road-net overlay layer; attach/detach key on this.
pub const ROAD_NET_LAYER_ID: &str = "roadNetLayer";

/// Default WMTS template for the road-net overlay. `{z}`/`{x}`/`{y}` are
/// substituted by the map provider; hosts with a keyed tile service override
/// this via [`crate::PickerOptions`].
pub const ROAD_NET_LAYER_URL: &str = "https://t0.tianditu.gov.cn/cia_w/wmts?\
SERVICE=WMTS&REQUEST=GetTile&VERSION=1.0.0&LAYER=cia&STYLE=default&TILEMATRIXSET=w\
&FORMAT=tiles&TILEMATRIX={z}&TILEROW={y}&TILECOL={x}";

/// Identity of the single authoritative marker overlay.
pub const MARKER_OVERLAY_ID: &str = "pickedMarker";

/// Fallback label when no place description is known for the marker.
pub const DEFAULT_MARKER_LABEL: &str = "Selected location";

/// Delay ceiling between resolving a placement label and notifying the
/// caller (milliseconds). Configurable through [`crate::PickerOptions`].
pub const DEFAULT_MARK_NOTIFY_DELAY_MS: u64 = 500;

/// Default context-menu width hint passed to the map provider (pixels).
pub const DEFAULT_MENU_WIDTH: u32 = 150;

/// Default search page size for the bundled place-search provider.
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 10;
