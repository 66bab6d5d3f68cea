/// Errors raised while retrieving or decoding a graph payload.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// The location is neither a valid HTTP(S) URL nor a readable path.
    #[error("invalid graph location `{location}`: {reason}")]
    InvalidLocation { location: String, reason: String },
    /// Transport failure (unreachable host, TLS, timeout, ...).
    #[error("HTTP error fetching {location}: {source}")]
    Http {
        location: String,
        source: reqwest::Error,
    },
    /// The server answered with a non-2xx status.
    #[error("fetching {location} returned status {status}")]
    Status { location: String, status: u16 },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The payload is not valid JSON.
    #[error("malformed graph payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload is valid JSON but not an object.
    #[error("graph payload is a JSON {found}, expected an object")]
    NotAnObject { found: &'static str },
}

pub type Result<T> = std::result::Result<T, ReaderError>;
