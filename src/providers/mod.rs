//! Injected collaborator capabilities.
//!
//! The engine never talks to a concrete mapping SDK, search backend or pixel
//! capturer; it talks to these traits. Hosts implement them over their SDK of
//! choice, tests implement them as recording doubles.

pub mod amap;
pub mod callbacks;
pub mod map;
pub mod search;
pub mod snapshot;

pub use amap::AmapSearch;
pub use callbacks::{NoopCallbacks, PickerCallbacks, Screenshot};
pub use map::{ContextMenu, MapProvider, MenuAction, MenuItem, Overlay};
pub use search::{SearchProvider, SearchResult};
pub use snapshot::{SnapshotCapturer, ViewHandle};
