//! Animated status indicator shown while a schema is being generated.

mod indicator;
mod state;

pub use indicator::{ProgressIndicator, TICK_INTERVAL};
pub use state::{CAPTION, GLYPHS, ProgressState};
