//! Mirror directory listings: fetch, parse, and filter into image files.
//!
//! Three listing formats are understood, one adapter each: plain Apache
//! `mod_autoindex` tables, h5ai-style tables, and code-hosting releases
//! pages. Every adapter is a pure transform from a fetched page to
//! `ImageFile` records; malformed rows are skipped, never an error.

mod apache;
mod error;
mod fetch;
mod filter;
mod github;
mod h5ai;
mod table;

pub use error::FetchError;
pub use fetch::{fetch_bytes, fetch_listing, ListingPage, Timeouts};
pub use filter::{has_exclude_extensions, is_filtered_by_name_filters};

use serde::{Deserialize, Serialize};

use crate::catalog::ListingSource;

/// Placeholder for fields a listing format does not expose.
pub(crate) const UNAVAILABLE: &str = "N/A";

/// One downloadable artifact discovered on a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFile {
    /// Display name as listed (final path segment for release links).
    pub file_name: String,
    /// Human-readable size as shown on the page, or `"N/A"`.
    pub file_size: String,
    /// Human-readable timestamp as shown on the page, or `"N/A"`.
    pub last_modified: String,
    /// Fully resolved absolute download URL.
    pub download_url: String,
}

/// Structural format of a listing page; decides which adapter applies.
///
/// Closed set: an unknown value in the manifest fails at deserialization
/// time as a configuration error, never at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveType {
    Apache,
    H5ai,
    Github,
}

/// Parse a fetched listing page into image files.
///
/// Dispatches on the source's archive type; the page's own URL is the base
/// for resolving relative links, and the source's name filters are applied
/// to every candidate. Row order follows the page; no sorting.
pub fn parse(page: &ListingPage, source: &ListingSource) -> Vec<ImageFile> {
    let files = match source.archive_type {
        ArchiveType::Apache => apache::parse(page, &source.name_filters),
        ArchiveType::H5ai => h5ai::parse(page, &source.name_filters),
        ArchiveType::Github => github::parse(page, &source.name_filters),
    };
    tracing::debug!(url = %page.url, count = files.len(), "parsed listing");
    files
}

/// Fetch the source's listing page and parse it in one step.
pub fn fetch_and_parse(
    source: &ListingSource,
    timeouts: Timeouts,
) -> Result<Vec<ImageFile>, FetchError> {
    let page = fetch_listing(&source.base_url, timeouts)?;
    Ok(parse(&page, source))
}
