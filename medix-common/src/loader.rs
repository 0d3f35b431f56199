//! Report loading.
//!
//! A load either yields the whole parsed document or fails; nothing is
//! partially rendered.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::report::Report;

/// Read and decode a report file.
pub async fn load_report<R: Report>(path: impl AsRef<Path>) -> Result<R> {
    let path = path.as_ref();
    debug!(path = %path.display(), kind = R::KIND, "Loading report");

    let data = tokio::fs::read(path).await.map_err(|source| Error::ReportRead {
        path: path.display().to_string(),
        source,
    })?;

    let report = R::parse(&data)?;
    info!(path = %path.display(), kind = R::KIND, bytes = data.len(), "Report loaded");
    Ok(report)
}
