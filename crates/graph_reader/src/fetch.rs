//! Retrieval of the raw payload text, either over HTTP(S) or from disk.
use std::{path::Path, time::Duration};

use log::{debug, info};

use crate::error::{ReaderError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads the payload behind `url` with a blocking GET request.
pub fn fetch_graph_payload(url: &str) -> Result<String> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ReaderError::InvalidLocation {
        location: url.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ReaderError::InvalidLocation {
            location: url.to_string(),
            reason: format!("unsupported scheme `{}`", parsed.scheme()),
        });
    }

    let http_err = |source| ReaderError::Http {
        location: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(http_err)?;

    let now = std::time::Instant::now();
    info!("BEGIN fetching {}", parsed);
    let response = client.get(parsed).send().map_err(http_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ReaderError::Status {
            location: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(http_err)?;
    info!(
        "FINISHED fetching {} bytes. Took {:?}",
        body.len(),
        now.elapsed()
    );
    Ok(body)
}

/// Reads the payload from a file on disk.
pub fn read_graph_payload(path: &Path) -> Result<String> {
    debug!("Reading graph payload from {}", path.display());
    std::fs::read_to_string(path).map_err(|source| ReaderError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Loads the payload from `location`, which is either an HTTP(S) URL or a path.
pub fn load_graph_payload(location: &str) -> Result<String> {
    if is_remote(location) {
        fetch_graph_payload(location)
    } else {
        read_graph_payload(Path::new(location))
    }
}

fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
