//! Blocking HTTP download of the salary CSV.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{IngestError, Result};

/// User agent string for data requests.
const USER_AGENT_VALUE: &str = concat!("salary-dashboard/", env!("CARGO_PKG_VERSION"));

/// Downloads the body at `url`.
///
/// Single attempt with no retry; any transport error or non-success status is
/// returned to the caller.
pub fn fetch_csv(url: &str) -> Result<Vec<u8>> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

    let client = reqwest::blocking::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| network_error(url, format!("failed to create HTTP client: {e}")))?;

    tracing::debug!(url, "fetching salary CSV");

    let response = client
        .get(url)
        .send()
        .map_err(|e| network_error(url, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .map_err(|e| network_error(url, e.to_string()))?;
    tracing::debug!(url, bytes = body.len(), "salary CSV downloaded");
    Ok(body.to_vec())
}

fn network_error(url: &str, message: String) -> IngestError {
    IngestError::Network {
        url: url.to_string(),
        message,
    }
}
