//! Terminal rendering of the dashboard views.

pub mod components;
pub mod formatting;
pub mod painter;

pub use painter::{DEGRADED_MARKER, TextPainter};
