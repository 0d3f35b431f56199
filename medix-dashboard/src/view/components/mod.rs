//! Reusable terminal widgets.

pub mod progress_bar;
pub mod stacked_bar;

pub use progress_bar::ProgressBar;
pub use stacked_bar::{CellCounts, StackedBar, stage_color, stage_fill};
