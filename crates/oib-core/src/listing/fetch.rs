//! Listing-page retrieval over HTTP.
//!
//! Uses the curl crate: one Easy handle per request, bounded connect and
//! request timeouts, explicit status check, no retries.

use scraper::Html;
use std::time::Duration;

use super::error::FetchError;

/// Connect/request timeout pair for one HTTP attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(15),
            request: Duration::from_secs(30),
        }
    }
}

/// A fetched listing page: parsed markup plus the URL it came from.
///
/// The URL travels with the document because the parser needs it to resolve
/// relative links into absolute download URLs.
#[derive(Debug)]
pub struct ListingPage {
    pub url: String,
    pub document: Html,
}

/// Single-attempt GET returning the raw response body.
///
/// Follows redirects. Non-2xx statuses and transport errors (including
/// timeouts) are both surfaced as `FetchError`.
pub fn fetch_bytes(url: &str, timeouts: Timeouts) -> Result<Vec<u8>, FetchError> {
    let net = |e: curl::Error| FetchError::network(url, e);

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(net)?;
    easy.follow_location(true).map_err(net)?;
    easy.connect_timeout(timeouts.connect).map_err(net)?;
    easy.timeout(timeouts.request).map_err(net)?;

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(net)?;
        transfer.perform().map_err(net)?;
    }

    let status = easy.response_code().map_err(net)?;
    if !(200..300).contains(&status) {
        return Err(FetchError::http(url, status));
    }

    tracing::debug!(url, bytes = body.len(), "fetched");
    Ok(body)
}

/// Fetch a listing page and parse its markup for the adapters.
pub fn fetch_listing(url: &str, timeouts: Timeouts) -> Result<ListingPage, FetchError> {
    let body = fetch_bytes(url, timeouts)?;
    let text = String::from_utf8_lossy(&body);
    Ok(ListingPage {
        url: url.to_string(),
        document: Html::parse_document(&text),
    })
}
