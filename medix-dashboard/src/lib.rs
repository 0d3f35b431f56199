//! Medix Dashboard
//!
//! Presentation layer for the Medix media-library reports:
//!
//! - [`progress`] - Stacked RAW / PNG / ICO conversion bars per genre
//! - [`catalog`] - Category listings with per-title status badges
//! - [`titles`] - Titles grouped by genre, with collapsible collections
//! - [`unused`] - Unused icon groups
//! - [`toggle`] - Disclosure control styling
//! - [`view`] - Terminal painter
//! - [`output`] - Text / JSON / CBOR output
//! - [`app`] - Command dispatch
//! - [`config`] - Dashboard configuration
//!
//! Every view is a plain `Serialize` descriptor built from a report; painting
//! is a separate step.

pub mod app;
pub mod catalog;
pub mod config;
pub mod output;
pub mod progress;
pub mod titles;
pub mod toggle;
pub mod unused;
pub mod view;

pub use catalog::{CatalogView, CategoryKind, StatusBadge};
pub use config::{BarConfig, ConfigError, DashboardConfig, OutputFormat, ViewFeatures};
pub use progress::{GenreMetrics, GenreRow, LabelStyle, ProgressRenderer, ProgressView, RowIssue};
pub use titles::TitleListView;
pub use toggle::ToggleStyle;
pub use unused::UnusedIconsView;
pub use view::TextPainter;
