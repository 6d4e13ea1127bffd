pub mod picker;
pub mod state;

pub use picker::Picker;
pub use state::{Phase, SessionState};
