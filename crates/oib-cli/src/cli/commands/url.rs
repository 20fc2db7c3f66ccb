//! `oib url` – print the download URL for one listed file.

use anyhow::{Context, Result};
use oib_core::catalog::Manifest;
use oib_core::config::OibConfig;
use oib_core::listing;

pub fn run_url(
    manifest: &Manifest,
    cfg: &OibConfig,
    board: &str,
    distributor: &str,
    os: &str,
    file: &str,
) -> Result<()> {
    let source = manifest.resolve(board, distributor, os)?;
    let files = listing::fetch_and_parse(&source, cfg.listing_timeouts())
        .with_context(|| format!("fetch listing {}", source.base_url))?;

    let found = files
        .iter()
        .find(|f| f.file_name == file)
        .with_context(|| format!("no file named '{}' on {}", file, source.base_url))?;
    println!("{}", found.download_url);
    Ok(())
}
