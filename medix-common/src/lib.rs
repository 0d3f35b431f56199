//! Medix Common Library
//!
//! This crate provides the shared types and utilities behind the Medix dashboard:
//!
//! - [`report`] - Report documents (`ProgressReport`, `CatalogReport`, `GroupedTitles`, `UnusedIconsReport`)
//! - [`loader`] - Async report loading
//! - [`icons`] - Genre icon lookup table
//! - [`serialization`] - JSON/CBOR encoding and decoding
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod icons;
pub mod loader;
pub mod report;
pub mod serialization;

// Re-export commonly used types at the crate root
pub use config::{LogFormat, LoggingConfig, load_config, parse_config};
pub use error::{Error, Result};
pub use icons::{FALLBACK_ICON, IconTable};
pub use loader::load_report;
pub use report::{
    CatalogGenre, CatalogReport, CountsReport, GenreCounts, GenreProgress, GroupedTitles,
    OrderedGroups, OverallProgress, ProgressReport, Report, STATUS_DONE, STATUS_PENDING,
    TitleEntry, TitleItem, TitleStatus, UnusedIcon, UnusedIconsReport,
};
pub use serialization::{Format, decode, decode_auto, encode};

/// Initialize tracing with the given configuration.
///
/// Logs are written to stderr so painted output on stdout stays clean.
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Example
///
/// ```ignore
/// use medix_common::{LoggingConfig, LogFormat, init_tracing};
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Json,
/// };
/// init_tracing(&config)?;
/// ```
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
