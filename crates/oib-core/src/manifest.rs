//! Remote manifest retrieval.
//!
//! The manifest is trusted structured data (unlike listing pages, which are
//! semi-structured HTML needing adapter extraction). It is fetched from a
//! fixed URL with a short bounded timeout, preceded by a connectivity
//! pre-check so an offline machine fails fast instead of waiting out HTTP.

use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::catalog::Manifest;
use crate::config::OibConfig;
use crate::listing::{fetch_bytes, FetchError};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no network connectivity: cannot reach {host}")]
    NoConnectivity { host: String },
    #[error("manifest URL is invalid: {0}")]
    BadUrl(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("parse manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch and parse the image-address manifest.
///
/// Fails with `NoConnectivity` when the manifest host cannot be reached at
/// the connection level, before any GET is attempted.
pub fn fetch_manifest(cfg: &OibConfig) -> Result<Manifest, ManifestError> {
    check_connectivity(
        &cfg.manifest_url,
        Duration::from_secs(cfg.manifest_timeout_secs),
    )?;

    let body = fetch_bytes(&cfg.manifest_url, cfg.manifest_timeouts())?;
    let manifest: Manifest = serde_json::from_slice(&body)?;
    tracing::info!(
        url = %cfg.manifest_url,
        distributors = manifest.distributors.len(),
        "fetched image manifest"
    );
    Ok(manifest)
}

/// Connect-only probe of the manifest host: establishes the connection and
/// transfers nothing.
fn check_connectivity(manifest_url: &str, timeout: Duration) -> Result<(), ManifestError> {
    let host = Url::parse(manifest_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .ok_or_else(|| ManifestError::BadUrl(manifest_url.to_string()))?;

    let probe = (|| -> Result<(), curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(manifest_url)?;
        easy.connect_only(true)?;
        easy.connect_timeout(timeout)?;
        easy.perform()
    })();

    match probe {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::warn!(host = %host, error = %e, "connectivity probe failed");
            Err(ManifestError::NoConnectivity { host })
        }
    }
}
