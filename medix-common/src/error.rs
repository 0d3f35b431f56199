use thiserror::Error;

/// Common error type for Medix components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The report document is missing required fields or is not decodable.
    #[error("Invalid {kind} report: {reason}")]
    InvalidReport { kind: &'static str, reason: String },

    #[error("Failed to read report '{path}': {source}")]
    ReportRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CBOR serialization error: {0}")]
    Cbor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid report error.
    pub fn invalid_report(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidReport {
            kind,
            reason: reason.into(),
        }
    }
}

impl From<ciborium::ser::Error<std::io::Error>> for Error {
    fn from(e: ciborium::ser::Error<std::io::Error>) -> Self {
        Error::Cbor(e.to_string())
    }
}

impl From<ciborium::de::Error<std::io::Error>> for Error {
    fn from(e: ciborium::de::Error<std::io::Error>) -> Self {
        Error::Cbor(e.to_string())
    }
}

/// Result type alias using Medix's Error.
pub type Result<T> = std::result::Result<T, Error>;
